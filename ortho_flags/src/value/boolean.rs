//! Boolean adapter.

use std::any::Any;
use std::fmt;

use super::{BoolFlag, Getter, Value};
use crate::ValueError;

/// Boolean slot switched on by the flag's presence.
#[derive(Debug)]
pub struct BoolValue<'a>(&'a mut bool);

impl<'a> BoolValue<'a> {
    /// Bind to `slot`, storing `initial` in it.
    #[must_use]
    pub const fn new(slot: &'a mut bool, initial: bool) -> Self {
        *slot = initial;
        Self(slot)
    }
}

/// Parse the boolean spellings accepted on the command line.
///
/// # Errors
///
/// Returns [`ValueError::Syntax`] for anything other than `1`, `t`, `T`,
/// `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false` or `False`.
pub(crate) fn parse_bool(text: &str) -> Result<bool, ValueError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::Syntax),
    }
}

impl Value for BoolValue<'_> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        *self.0 = parse_bool(text)?;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        "bool"
    }

    fn as_bool_flag(&self) -> Option<&dyn BoolFlag> {
        Some(self)
    }

    fn as_getter(&self) -> Option<&dyn Getter> {
        Some(self)
    }
}

impl BoolFlag for BoolValue<'_> {
    fn is_bool_flag(&self) -> bool {
        true
    }
}

impl Getter for BoolValue<'_> {
    fn get(&self) -> &dyn Any {
        &*self.0
    }
}

impl fmt::Display for BoolValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
