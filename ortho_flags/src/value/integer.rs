//! Integer adapter, generic over the primitive integer widths.

use std::any::Any;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

use super::{Getter, Value};
use crate::ValueError;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers usable with [`IntValue`].
pub trait Integer: sealed::Sealed + Copy + fmt::Display + 'static {
    /// Name shown in usage text.
    const TYPE_NAME: &'static str;

    /// Parse digits (with an optional leading sign) in `radix`.
    ///
    /// # Errors
    ///
    /// Propagates the standard library's parse error.
    fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError>;
}

macro_rules! impl_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integer for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
                    <$ty>::from_str_radix(src, radix)
                }
            }
        )*
    };
}

impl_integer!(
    i8 => "int",
    i16 => "int",
    i32 => "int",
    i64 => "int",
    i128 => "int",
    isize => "int",
    u8 => "uint",
    u16 => "uint",
    u32 => "uint",
    u64 => "uint",
    u128 => "uint",
    usize => "uint",
);

/// Integer slot accepting decimal, `0x`, `0o`, `0b` and leading-zero octal
/// text.
#[derive(Debug)]
pub struct IntValue<'a, T>(&'a mut T);

impl<'a, T: Integer> IntValue<'a, T> {
    /// Bind to `slot`, storing `initial` in it.
    #[must_use]
    pub const fn new(slot: &'a mut T, initial: T) -> Self {
        *slot = initial;
        Self(slot)
    }
}

/// Split a base prefix off unsigned digits.
fn split_radix(digits: &str) -> (u32, &str) {
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(rest) = prefixes.iter().find_map(|p| digits.strip_prefix(p)) {
            return (radix, rest);
        }
    }
    match digits.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => (8, rest),
        _ => (10, digits),
    }
}

/// Parse integer text, inferring the base from its prefix.
///
/// # Errors
///
/// Returns [`ValueError::Range`] when the number does not fit `T` and
/// [`ValueError::Syntax`] for anything malformed.
pub(crate) fn parse_integer<T: Integer>(text: &str) -> Result<T, ValueError> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(ValueError::Syntax);
    }
    T::from_str_radix(&format!("{sign}{digits}"), radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValueError::Range,
        _ => ValueError::Syntax,
    })
}

impl<T: Integer> Value for IntValue<'_, T> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        *self.0 = parse_integer(text)?;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn as_getter(&self) -> Option<&dyn Getter> {
        Some(self)
    }
}

impl<T: Integer> Getter for IntValue<'_, T> {
    fn get(&self) -> &dyn Any {
        &*self.0
    }
}

impl<T: Integer> fmt::Display for IntValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
