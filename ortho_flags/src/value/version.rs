//! Version adapter.

use std::any::Any;
use std::fmt;

use super::boolean::parse_bool;
use super::{BoolFlag, Getter, Value};
use crate::ValueError;

/// Boolean flag that asks for the program version to be shown when it is
/// switched on.
///
/// Setting it to a true value stores `true` and reports
/// [`ValueError::VersionRequested`]; the flag set turns that into
/// [`FlagError::VersionRequested`](crate::FlagError::VersionRequested)
/// after printing `<name>: <version>` to its output.
#[derive(Debug)]
pub struct VersionValue<'a> {
    requested: &'a mut bool,
    version: String,
}

impl<'a> VersionValue<'a> {
    /// Bind to `slot` (reset to `false`) and remember `version`.
    #[must_use]
    pub fn new(slot: &'a mut bool, version: impl Into<String>) -> Self {
        *slot = false;
        Self {
            requested: slot,
            version: version.into(),
        }
    }

    /// The version string shown when the flag is switched on.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Value for VersionValue<'_> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        let requested = parse_bool(text)?;
        *self.requested = requested;
        if requested {
            return Err(ValueError::VersionRequested {
                version: self.version.clone(),
            });
        }
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

impl BoolFlag for VersionValue<'_> {
    fn is_bool_flag(&self) -> bool {
        true
    }
}

impl Getter for VersionValue<'_> {
    fn get(&self) -> &dyn Any {
        &*self.requested
    }
}

impl fmt::Display for VersionValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.requested)
    }
}
