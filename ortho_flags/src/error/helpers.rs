//! Helpers for classifying parse failures.

use super::{FlagError, ValueError};

impl ValueError {
    /// Wrap an error raised by a user-supplied value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_flags::ValueError;
    /// let err = ValueError::custom("not a colour");
    /// assert_eq!(err.to_string(), "not a colour");
    /// ```
    #[must_use]
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Custom(err.into())
    }
}

impl FlagError {
    /// Returns `true` when the error asks for help or version output rather
    /// than reporting a failure.
    ///
    /// Entry points that parse with
    /// [`ErrorHandling::ContinueOnError`](crate::ErrorHandling::ContinueOnError)
    /// use this to exit successfully after the text has been shown.
    #[must_use]
    pub const fn is_display_request(&self) -> bool {
        matches!(self, Self::HelpRequested | Self::VersionRequested { .. })
    }

    /// Returns `true` when a value rejected numeric text because it does not
    /// fit the target type.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue {
                source: ValueError::Range,
                ..
            } | Self::InvalidBool {
                source: ValueError::Range,
                ..
            }
        )
    }

    /// Returns `true` when a value rejected text as malformed.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue {
                source: ValueError::Syntax,
                ..
            } | Self::InvalidBool {
                source: ValueError::Syntax,
                ..
            }
        )
    }

    pub(crate) fn invalid(name: &str, value: &str, source: ValueError, boolean: bool) -> Self {
        let name = name.to_owned();
        let value = value.to_owned();
        if boolean {
            Self::InvalidBool {
                name,
                value,
                source,
            }
        } else {
            Self::InvalidValue {
                name,
                value,
                source,
            }
        }
    }
}
