//! The value capability shared by every flag, plus the built-in adapters.
//!
//! A flag stores its state in a [`Value`]. The scanner only ever needs
//! [`Value::set`]; the optional capabilities are discovered at runtime:
//!
//! - [`BoolFlag`] marks values that may be switched on by presence alone
//!   (`--verbose` rather than `--verbose true`).
//! - [`Getter`] exposes the stored value in its native type for
//!   introspection.
//!
//! The adapters in this module bind to caller-owned storage, so the typed
//! result is read directly from the caller's variable once the
//! [`FlagSet`](crate::FlagSet) borrowing it has been dropped.

use std::any::Any;
use std::fmt;

use crate::ValueError;

mod boolean;
mod duration;
mod float;
mod integer;
mod string;
mod version;

pub use boolean::BoolValue;
pub use duration::DurationValue;
pub use float::FloatValue;
pub use integer::{Integer, IntValue};
pub use string::StringValue;
pub use version::VersionValue;

/// A settable, printable configuration slot.
///
/// `Display` renders the current value; the rendering must be accepted by
/// [`Value::set`] and reproduce the same state.
pub trait Value: fmt::Display {
    /// Parse `text` and store the result.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Syntax`] for malformed text,
    /// [`ValueError::Range`] for numeric text that does not fit, or any
    /// other [`ValueError`] the implementation chooses.
    fn set(&mut self, text: &str) -> Result<(), ValueError>;

    /// Short name of the value's type used when rendering usage text.
    fn type_name(&self) -> &'static str {
        "value"
    }

    /// Query the boolean-flag capability.
    fn as_bool_flag(&self) -> Option<&dyn BoolFlag> {
        None
    }

    /// Query the getter capability.
    fn as_getter(&self) -> Option<&dyn Getter> {
        None
    }
}

/// Values that do not need an explicit argument on the command line.
///
/// The scanner asks on every occurrence, so an implementation may stop
/// being boolean after a number of uses and start consuming arguments.
pub trait BoolFlag {
    /// Whether the flag may currently be given without a value.
    fn is_bool_flag(&self) -> bool;
}

/// Values that expose their contents in the native type.
pub trait Getter {
    /// The stored value, for use with [`Any::downcast_ref`].
    fn get(&self) -> &dyn Any;
}

impl<V> Value for &mut V
where
    V: Value + ?Sized,
{
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        (**self).set(text)
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_bool_flag(&self) -> Option<&dyn BoolFlag> {
        (**self).as_bool_flag()
    }

    fn as_getter(&self) -> Option<&dyn Getter> {
        (**self).as_getter()
    }
}

impl<V> Value for Box<V>
where
    V: Value + ?Sized,
{
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        (**self).set(text)
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_bool_flag(&self) -> Option<&dyn BoolFlag> {
        (**self).as_bool_flag()
    }

    fn as_getter(&self) -> Option<&dyn Getter> {
        (**self).as_getter()
    }
}

/// Returns `true` when `value` currently accepts presence-only syntax.
pub(crate) fn is_bool_flag(value: &dyn Value) -> bool {
    value.as_bool_flag().is_some_and(|flag| flag.is_bool_flag())
}
