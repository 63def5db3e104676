//! String adapter.

use std::any::Any;
use std::fmt;

use super::{Getter, Value};
use crate::ValueError;

/// String slot; every input is accepted verbatim.
#[derive(Debug)]
pub struct StringValue<'a>(&'a mut String);

impl<'a> StringValue<'a> {
    /// Bind to `slot`, storing `initial` in it.
    #[must_use]
    pub fn new(slot: &'a mut String, initial: impl Into<String>) -> Self {
        *slot = initial.into();
        Self(slot)
    }
}

impl Value for StringValue<'_> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        text.clone_into(self.0);
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        "string"
    }

    fn as_getter(&self) -> Option<&dyn Getter> {
        Some(self)
    }
}

impl Getter for StringValue<'_> {
    fn get(&self) -> &dyn Any {
        &*self.0
    }
}

impl fmt::Display for StringValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
