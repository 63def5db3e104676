//! Floating-point adapter.

use std::any::Any;
use std::fmt;

use super::{Getter, Value};
use crate::ValueError;

/// `f64` slot accepting decimal and exponent notation.
#[derive(Debug)]
pub struct FloatValue<'a>(&'a mut f64);

impl<'a> FloatValue<'a> {
    /// Bind to `slot`, storing `initial` in it.
    #[must_use]
    pub const fn new(slot: &'a mut f64, initial: f64) -> Self {
        *slot = initial;
        Self(slot)
    }
}

fn spells_infinity(text: &str) -> bool {
    let magnitude = text.trim_start_matches(['+', '-']);
    magnitude.eq_ignore_ascii_case("inf") || magnitude.eq_ignore_ascii_case("infinity")
}

/// Parse float text, reporting overflow to infinity as a range failure.
///
/// # Errors
///
/// Returns [`ValueError::Syntax`] for malformed text and
/// [`ValueError::Range`] when a finite literal exceeds `f64`.
pub(crate) fn parse_float(text: &str) -> Result<f64, ValueError> {
    let parsed: f64 = text.parse().map_err(|_| ValueError::Syntax)?;
    if parsed.is_infinite() && !spells_infinity(text) {
        return Err(ValueError::Range);
    }
    Ok(parsed)
}

impl Value for FloatValue<'_> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        *self.0 = parse_float(text)?;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        "float"
    }

    fn as_getter(&self) -> Option<&dyn Getter> {
        Some(self)
    }
}

impl Getter for FloatValue<'_> {
    fn get(&self) -> &dyn Any {
        &*self.0
    }
}

impl fmt::Display for FloatValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
