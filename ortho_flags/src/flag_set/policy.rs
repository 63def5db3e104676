//! Top-level parse driver and the error-handling policy it applies.

use std::io::Write;

use tracing::{debug, warn};

use super::FlagSet;
use crate::FlagError;

/// Status used when [`ErrorHandling::ExitOnError`] terminates the process.
pub(crate) const EXIT_STATUS: i32 = 2;

/// What [`FlagSet::parse`] does when parsing fails.
///
/// The policy never changes how tokens are scanned, only how a failure is
/// delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorHandling {
    /// Return the error; nothing is printed.
    #[default]
    ContinueOnError,
    /// Print the error and exit with status 2.
    ExitOnError,
    /// Print the error and panic with it.
    PanicOnError,
}

impl FlagSet<'_> {
    /// Parse `arguments` (without the program name) into the defined flags.
    ///
    /// Flags are read until the input is exhausted, a `--` terminator is
    /// reached, or (in stop-at-first-non-flag mode) a positional argument
    /// is seen. Positional arguments are available from
    /// [`FlagSet::args`] afterwards. Assignments made before a failure are
    /// kept.
    ///
    /// # Errors
    ///
    /// Under [`ErrorHandling::ContinueOnError`] every failure is returned,
    /// including [`FlagError::HelpRequested`] and
    /// [`FlagError::VersionRequested`], which callers should test with
    /// [`FlagError::is_display_request`].
    ///
    /// # Panics
    ///
    /// Panics with the failure under [`ErrorHandling::PanicOnError`].
    #[expect(
        clippy::panic_in_result_fn,
        reason = "PanicOnError raises the parse failure as a panic"
    )]
    pub fn parse<I, S>(&mut self, arguments: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed = true;
        self.registry.clear_seen();
        self.tokens
            .reset(arguments.into_iter().map(Into::into).collect());

        let outcome = loop {
            match self.parse_one() {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        let Err(err) = outcome else {
            debug!(
                flags = self.n_flags(),
                positionals = self.n_args(),
                "parsed command line"
            );
            return Ok(());
        };

        self.report(&err);
        match self.error_handling {
            ErrorHandling::ContinueOnError => Err(err),
            ErrorHandling::ExitOnError => {
                debug!(error = %err, status = EXIT_STATUS, "exiting after parse failure");
                std::process::exit(EXIT_STATUS)
            }
            ErrorHandling::PanicOnError => panic!("{err}"),
        }
    }

    /// Parse the running program's arguments, skipping `argv[0]`.
    ///
    /// # Errors
    ///
    /// As for [`FlagSet::parse`].
    pub fn parse_env(&mut self) -> Result<(), FlagError> {
        let arguments: Vec<String> = std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        self.parse(arguments)
    }

    /// Write what the user should see about `err`.
    ///
    /// Version requests always print the version. Other failures print only
    /// when the policy is about to exit or panic; help requests have
    /// already shown the usage text.
    fn report(&mut self, err: &FlagError) {
        let line = match err {
            FlagError::HelpRequested => return,
            FlagError::VersionRequested { version } => {
                format!("{}: {version}", self.program_name())
            }
            other if self.error_handling != ErrorHandling::ContinueOnError => other.to_string(),
            _ => return,
        };
        if let Err(write_err) = writeln!(self.output, "{line}") {
            warn!(error = %write_err, "failed to write flag diagnostics");
        }
    }

    fn program_name(&self) -> String {
        if self.name.is_empty() {
            super::argv0()
        } else {
            self.name.clone()
        }
    }
}
