//! The flag set: registration, parsing, and post-parse queries.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::registry::{Callback, Flag, Registry};
use crate::value::{
    BoolValue, DurationValue, FloatValue, IntValue, Integer, StringValue, VersionValue,
};
use crate::{FlagError, Value};

mod policy;
mod scan;
mod usage;

pub use policy::ErrorHandling;

use scan::Tokens;

/// Custom usage function; receives the flag set so it can render defaults
/// to the configured output.
pub type UsageFn<'a> = Box<dyn FnMut(&mut FlagSet<'a>) + 'a>;

/// A set of defined flags and the parser that fills them in.
///
/// Flags bind to storage owned by the caller for the lifetime `'a`; once the
/// set is dropped the parsed values are read straight from that storage.
///
/// ```
/// use ortho_flags::{ErrorHandling, FlagSet};
///
/// let mut verbose = false;
/// let mut name = String::new();
/// let mut flags = FlagSet::new("greet", ErrorHandling::ContinueOnError, false);
/// flags.bool_var(&mut verbose, "verbose", Some('v'), false, "chatty output")?;
/// flags.string_var(&mut name, "name", Some('n'), "world", "who to greet")?;
/// flags.parse(["-vn", "Ada", "extra"])?;
/// assert_eq!(flags.args(), ["extra"]);
/// drop(flags);
/// assert!(verbose);
/// assert_eq!(name, "Ada");
/// # Ok::<(), ortho_flags::FlagError>(())
/// ```
pub struct FlagSet<'a> {
    name: String,
    error_handling: ErrorHandling,
    stop_at_first_non_flag: bool,
    registry: Registry<'a>,
    tokens: Tokens,
    parsed: bool,
    output: Box<dyn Write + 'a>,
    usage: Option<UsageFn<'a>>,
}

impl<'a> FlagSet<'a> {
    /// Create an empty flag set.
    ///
    /// With `stop_at_first_non_flag` set, scanning halts at the first
    /// positional argument and every later token is left as a positional,
    /// flags included.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        error_handling: ErrorHandling,
        stop_at_first_non_flag: bool,
    ) -> Self {
        Self {
            name: name.into(),
            error_handling,
            stop_at_first_non_flag,
            registry: Registry::default(),
            tokens: Tokens::default(),
            parsed: false,
            output: Box::new(io::stderr()),
            usage: None,
        }
    }

    /// A flag set for the running program: named after `argv[0]`, exiting
    /// on error, and scanning past positional arguments.
    ///
    /// Pair with [`FlagSet::parse_env`].
    #[must_use]
    pub fn command_line() -> Self {
        Self::new(argv0(), ErrorHandling::ExitOnError, false)
    }

    /// Reset the name, policy and scanning mode. Definitions are kept.
    pub fn init(
        &mut self,
        name: impl Into<String>,
        error_handling: ErrorHandling,
        stop_at_first_non_flag: bool,
    ) {
        self.name = name.into();
        self.error_handling = error_handling;
        self.stop_at_first_non_flag = stop_at_first_non_flag;
    }

    /// Name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Active error-handling policy.
    #[must_use]
    pub const fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// Whether scanning halts at the first positional argument.
    #[must_use]
    pub const fn stops_at_first_non_flag(&self) -> bool {
        self.stop_at_first_non_flag
    }

    /// Whether [`FlagSet::parse`] has been called.
    #[must_use]
    pub const fn parsed(&self) -> bool {
        self.parsed
    }

    /// Redirect usage text and diagnostics (standard error by default).
    pub fn set_output(&mut self, output: impl Write + 'a) {
        self.output = Box::new(output);
    }

    /// Sink for usage text and diagnostics.
    pub fn output(&mut self) -> &mut (dyn Write + 'a) {
        self.output.as_mut()
    }

    /// Replace the usage function shown on `--help`.
    pub fn set_usage(&mut self, usage: impl FnMut(&mut FlagSet<'a>) + 'a) {
        self.usage = Some(Box::new(usage));
    }

    /// Define a flag backed by any [`Value`].
    ///
    /// The value's current rendering is recorded as the flag's default.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Redefined`] or [`FlagError::AliasRedefined`]
    /// when the name or alias is taken, and [`FlagError::InvalidName`] or
    /// [`FlagError::InvalidAlias`] when either cannot be written on a
    /// command line.
    pub fn var<V>(
        &mut self,
        value: V,
        name: &str,
        alias: Option<char>,
        usage: &str,
    ) -> Result<(), FlagError>
    where
        V: Value + 'a,
    {
        self.registry.define(Box::new(value), name, alias, usage, None)
    }

    /// Define a flag whose `on_change` callback runs after every successful
    /// assignment.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::var`].
    pub fn var_with_callback<V, F>(
        &mut self,
        value: V,
        name: &str,
        alias: Option<char>,
        usage: &str,
        on_change: F,
    ) -> Result<(), FlagError>
    where
        V: Value + 'a,
        F: FnMut(&dyn Value) + 'a,
    {
        let callback: Callback<'a> = Box::new(on_change);
        self.registry
            .define(Box::new(value), name, alias, usage, Some(callback))
    }

    /// Attach or replace the `on_change` callback of a defined flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Undefined`] when no flag is called `name`.
    pub fn on_change<F>(&mut self, name: &str, on_change: F) -> Result<(), FlagError>
    where
        F: FnMut(&dyn Value) + 'a,
    {
        if self.registry.set_callback(name, Box::new(on_change)) {
            Ok(())
        } else {
            Err(FlagError::Undefined {
                flag: format!("--{name}"),
            })
        }
    }

    /// Define a boolean flag.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::var`].
    pub fn bool_var(
        &mut self,
        slot: &'a mut bool,
        name: &str,
        alias: Option<char>,
        initial: bool,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.var(BoolValue::new(slot, initial), name, alias, usage)
    }

    /// Define an integer flag of any primitive width.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::var`].
    pub fn int_var<T: Integer>(
        &mut self,
        slot: &'a mut T,
        name: &str,
        alias: Option<char>,
        initial: T,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.var(IntValue::new(slot, initial), name, alias, usage)
    }

    /// Define an `f64` flag.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::var`].
    pub fn float_var(
        &mut self,
        slot: &'a mut f64,
        name: &str,
        alias: Option<char>,
        initial: f64,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.var(FloatValue::new(slot, initial), name, alias, usage)
    }

    /// Define a string flag.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::var`].
    pub fn string_var(
        &mut self,
        slot: &'a mut String,
        name: &str,
        alias: Option<char>,
        initial: &str,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.var(StringValue::new(slot, initial), name, alias, usage)
    }

    /// Define a duration flag.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::var`].
    pub fn duration_var(
        &mut self,
        slot: &'a mut Duration,
        name: &str,
        alias: Option<char>,
        initial: Duration,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.var(DurationValue::new(slot, initial), name, alias, usage)
    }

    /// Define a version flag that reports `version` when switched on.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::var`].
    pub fn version_var(
        &mut self,
        slot: &'a mut bool,
        name: &str,
        alias: Option<char>,
        version: &str,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.var(VersionValue::new(slot, version), name, alias, usage)
    }

    /// Look up a flag by long name. Only exact matches are found.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.registry.lookup(name)
    }

    /// Look up a flag by its short alias.
    #[must_use]
    pub fn lookup_alias(&self, alias: char) -> Option<&Flag<'a>> {
        self.registry
            .alias_lookup(alias)
            .and_then(|name| self.registry.lookup(name))
    }

    /// Visit every defined flag in ascending name order.
    pub fn visit_all<F>(&self, visitor: F)
    where
        F: FnMut(&Flag<'a>),
    {
        self.registry.all().for_each(visitor);
    }

    /// Visit the flags assigned since the last parse began, in ascending
    /// name order.
    pub fn visit<F>(&self, visitor: F)
    where
        F: FnMut(&Flag<'a>),
    {
        self.registry.seen().for_each(visitor);
    }

    /// Number of flags assigned since the last parse began.
    #[must_use]
    pub fn n_flags(&self) -> usize {
        self.registry.seen_count()
    }

    /// Positional arguments left after parsing.
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.tokens.remaining()
    }

    /// The `index`th positional argument.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.tokens.remaining().get(index).map(String::as_str)
    }

    /// Number of positional arguments left after parsing.
    #[must_use]
    pub fn n_args(&self) -> usize {
        self.tokens.remaining().len()
    }
}

/// The running program's name as given in `argv[0]`.
fn argv0() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl fmt::Debug for FlagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        self.visit_all(|flag| flags.push(flag.name().to_owned()));
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("error_handling", &self.error_handling)
            .field("stop_at_first_non_flag", &self.stop_at_first_non_flag)
            .field("flags", &flags)
            .field("args", &self.args())
            .field("parsed", &self.parsed)
            .finish_non_exhaustive()
    }
}
