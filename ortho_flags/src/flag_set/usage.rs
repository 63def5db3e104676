//! Usage text: the default help screen and the per-flag defaults listing.

use std::io::Write;

use tracing::warn;

use super::FlagSet;
use crate::registry::Flag;
use crate::value::is_bool_flag;

/// Split a back-quoted argument name out of `usage`.
///
/// `"load from `file`"` yields `("file", "load from file")`. Without back
/// quotes the value's type name is used, and boolean flags get none.
fn unquote_usage<'u>(flag: &'u Flag<'_>) -> (&'u str, String) {
    let usage = flag.usage();
    if let Some((before, rest)) = usage.split_once('`') {
        if let Some((name, after)) = rest.split_once('`') {
            return (name, format!("{before}{name}{after}"));
        }
    }
    let type_name = if is_bool_flag(flag.value()) {
        ""
    } else {
        flag.value().type_name()
    };
    (type_name, usage.to_owned())
}

/// Whether the recorded default is the zero value of its type and so not
/// worth printing.
fn is_zero_default(flag: &Flag<'_>) -> bool {
    let default = flag.default_value();
    match flag.value().type_name() {
        "string" => default.is_empty(),
        _ => matches!(default, "" | "0" | "false" | "0s"),
    }
}

fn render_flag(flag: &Flag<'_>) -> String {
    let mut line = match flag.alias() {
        Some(alias) => format!("  -{alias}, --{}", flag.name()),
        None => format!("      --{}", flag.name()),
    };
    let (argument, usage) = unquote_usage(flag);
    if !argument.is_empty() {
        line.push(' ');
        line.push_str(argument);
    }
    line.push_str("\n    \t");
    line.push_str(&usage.replace('\n', "\n    \t"));
    if !is_zero_default(flag) {
        let default = if flag.value().type_name() == "string" {
            format!("{:?}", flag.default_value())
        } else {
            flag.default_value().to_owned()
        };
        line.push_str(" (default ");
        line.push_str(&default);
        line.push(')');
    }
    line.push('\n');
    line
}

impl FlagSet<'_> {
    /// Render the defaults listing: one entry per flag, in name order.
    ///
    /// ```
    /// use ortho_flags::{ErrorHandling, FlagSet};
    ///
    /// let mut count = 0_i32;
    /// let mut flags = FlagSet::new("demo", ErrorHandling::ContinueOnError, false);
    /// flags.int_var(&mut count, "count", Some('c'), 3, "how many `times`")?;
    /// assert_eq!(
    ///     flags.defaults(),
    ///     "  -c, --count times\n    \thow many times (default 3)\n"
    /// );
    /// # Ok::<(), ortho_flags::FlagError>(())
    /// ```
    #[must_use]
    pub fn defaults(&self) -> String {
        let mut rendered = String::new();
        self.visit_all(|flag| rendered.push_str(&render_flag(flag)));
        rendered
    }

    /// Write the defaults listing to the output.
    pub fn print_defaults(&mut self) {
        let rendered = self.defaults();
        self.write_output(&rendered);
    }

    /// Write the standard usage screen: a header naming the set followed by
    /// the defaults listing.
    pub fn default_usage(&mut self) {
        let header = if self.name.is_empty() {
            "Usage:\n".to_owned()
        } else {
            format!("Usage of {}:\n", self.name)
        };
        self.write_output(&header);
        self.print_defaults();
    }

    /// Show usage, preferring a function installed with
    /// [`FlagSet::set_usage`].
    pub(crate) fn usage(&mut self) {
        match self.usage.take() {
            Some(mut custom) => {
                custom(self);
                if self.usage.is_none() {
                    self.usage = Some(custom);
                }
            }
            None => self.default_usage(),
        }
    }

    fn write_output(&mut self, text: &str) {
        if let Err(err) = self.output.write_all(text.as_bytes()) {
            warn!(error = %err, "failed to write usage text");
        }
    }
}
