//! Primary error enums for value assignment and flag parsing.

use thiserror::Error;

/// Errors reported by [`Value::set`](crate::Value::set) when text cannot be
/// stored in a flag's typed slot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The text is not valid syntax for the target type.
    #[error("parse error")]
    Syntax,

    /// The text is well formed but does not fit the target type.
    #[error("value out of range")]
    Range,

    /// A version flag was switched on and asks for the version to be shown.
    #[error("version requested")]
    VersionRequested {
        /// Version string to display.
        version: String,
    },

    /// Failure raised by a user-supplied value type.
    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur while defining flags or parsing arguments.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// A flag token is malformed (for example `---x` or `--=value`).
    #[error("bad flag syntax: {token}")]
    BadSyntax {
        /// Token as it appeared in the argument list.
        token: String,
    },

    /// A long name or short alias has no registered definition.
    #[error("flag provided but not defined: {flag}")]
    Undefined {
        /// The flag as written, including its leading dashes.
        flag: String,
    },

    /// A value-taking flag reached the end of input without a value.
    #[error("flag needs an argument: --{name}")]
    MissingArgument {
        /// Long name of the flag.
        name: String,
    },

    /// The flag's value rejected the supplied text.
    #[error("invalid value {value:?} for flag --{name}: {source}")]
    InvalidValue {
        /// Long name of the flag.
        name: String,
        /// Text handed to the value.
        value: String,
        /// Why the value rejected the text.
        #[source]
        source: ValueError,
    },

    /// A boolean flag rejected the supplied text.
    #[error("invalid boolean value {value:?} for --{name}: {source}")]
    InvalidBool {
        /// Long name of the flag.
        name: String,
        /// Text handed to the value.
        value: String,
        /// Why the value rejected the text.
        #[source]
        source: ValueError,
    },

    /// `--help` or `-h` was given and no user flag claims that name.
    #[error("flag: help requested")]
    HelpRequested,

    /// A version flag was switched on.
    #[error("flag: version requested")]
    VersionRequested {
        /// Version string that was displayed.
        version: String,
    },

    /// A flag with the same long name is already registered.
    #[error("flag redefined: {name}")]
    Redefined {
        /// The duplicated long name.
        name: String,
    },

    /// The alias is already bound to another flag.
    #[error("flag alias redefined: -{alias} is already bound to --{existing}")]
    AliasRedefined {
        /// The duplicated alias.
        alias: char,
        /// Long name already owning the alias.
        existing: String,
    },

    /// The long name cannot be written on a command line.
    #[error("invalid flag name {name:?}: {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// Human-readable explanation.
        reason: &'static str,
    },

    /// The alias cannot be written on a command line.
    #[error("invalid flag alias {alias:?} for --{name}")]
    InvalidAlias {
        /// Rejected alias.
        alias: char,
        /// Long name the alias was meant for.
        name: String,
    },
}
