//! Token scanner: classifies one token at a time and assigns flag values.

use tracing::{debug, trace};

use super::FlagSet;
use crate::registry::Flag;
use crate::value::is_bool_flag;
use crate::{FlagError, ValueError};

/// Working copy of the argument list.
///
/// Flag tokens (and the values they consume) are removed from the list;
/// positional tokens are stepped over and stay behind as the remainder.
#[derive(Debug, Default)]
pub(super) struct Tokens {
    args: Vec<String>,
    index: usize,
}

impl Tokens {
    pub(super) fn reset(&mut self, args: Vec<String>) {
        self.args = args;
        self.index = 0;
    }

    fn current(&self) -> Option<&str> {
        self.args.get(self.index).map(String::as_str)
    }

    /// Remove and return the token under the cursor.
    fn cut(&mut self) -> Option<String> {
        (self.index < self.args.len()).then(|| self.args.remove(self.index))
    }

    const fn skip(&mut self) {
        self.index += 1;
    }

    const fn has_more(&self) -> bool {
        self.index < self.args.len()
    }

    pub(super) fn remaining(&self) -> &[String] {
        &self.args
    }
}

/// Store `text` in `flag`, firing its callback and translating failures.
fn store(flag: &mut Flag<'_>, text: &str, boolean: bool) -> Result<(), FlagError> {
    flag.set(text).map_err(|source| match source {
        ValueError::VersionRequested { version } => FlagError::VersionRequested { version },
        other => FlagError::invalid(flag.name(), text, other, boolean),
    })
}

impl FlagSet<'_> {
    /// Scan one token. Returns `Ok(true)` while tokens remain to be scanned.
    pub(super) fn parse_one(&mut self) -> Result<bool, FlagError> {
        let Some(current) = self.tokens.current() else {
            return Ok(false);
        };

        if current.len() < 2 || !current.starts_with('-') {
            if self.stop_at_first_non_flag {
                trace!(token = current, "stopping at first non-flag argument");
                return Ok(false);
            }
            trace!(token = current, "positional argument");
            self.tokens.skip();
            return Ok(self.tokens.has_more());
        }

        let Some(token) = self.tokens.cut() else {
            return Ok(false);
        };
        if token == "--" {
            trace!("flag terminator");
            return Ok(false);
        }

        let (long, body) = match token.strip_prefix("--") {
            Some(body) => (true, body),
            None => (false, token.strip_prefix('-').unwrap_or(&token)),
        };
        if body.is_empty() || body.starts_with(['-', '=']) {
            return Err(FlagError::BadSyntax { token });
        }

        let (names, attached) = match body.split_once('=') {
            Some((names, value)) => (names, Some(value)),
            None => (body, None),
        };
        if long {
            self.parse_long(names, attached)?;
        } else {
            self.parse_short(names, attached)?;
        }
        Ok(self.tokens.has_more())
    }

    fn parse_long(&mut self, name: &str, attached: Option<&str>) -> Result<(), FlagError> {
        if self.registry.lookup(name).is_none() {
            if name == "help" {
                self.usage();
                return Err(FlagError::HelpRequested);
            }
            return Err(FlagError::Undefined {
                flag: format!("--{name}"),
            });
        }
        self.assign(name, attached)
    }

    /// Resolve each character as an alias in turn. A value attached with
    /// `=` belongs to the last alias of the group.
    fn parse_short(&mut self, aliases: &str, attached: Option<&str>) -> Result<(), FlagError> {
        let mut chars = aliases.chars().peekable();
        while let Some(alias) = chars.next() {
            let value = if chars.peek().is_none() { attached } else { None };
            let Some(name) = self.registry.alias_lookup(alias).map(str::to_owned) else {
                if alias == 'h' {
                    self.usage();
                    return Err(FlagError::HelpRequested);
                }
                return Err(FlagError::Undefined {
                    flag: format!("-{alias}"),
                });
            };
            self.assign(&name, value)?;
        }
        Ok(())
    }

    /// Assign a value to the flag called `name`.
    ///
    /// Boolean flags take `attached` when present and `"true"` otherwise;
    /// every other flag takes `attached` or consumes the next token.
    fn assign(&mut self, name: &str, attached: Option<&str>) -> Result<(), FlagError> {
        let Some(flag) = self.registry.lookup_mut(name) else {
            return Err(FlagError::Undefined {
                flag: format!("--{name}"),
            });
        };
        let boolean = is_bool_flag(flag.value());
        let text = match (attached, boolean) {
            (Some(text), _) => text.to_owned(),
            (None, true) => "true".to_owned(),
            (None, false) => self
                .tokens
                .cut()
                .ok_or_else(|| FlagError::MissingArgument {
                    name: name.to_owned(),
                })?,
        };
        store(flag, &text, boolean)?;
        self.registry.mark_seen(name);
        debug!(flag = name, explicit = attached.is_some(), "flag assigned");
        Ok(())
    }

    /// Assign `text` to the flag called `name` as though it had been given
    /// on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Undefined`] for unknown names and the value's
    /// rejection otherwise.
    pub fn set(&mut self, name: &str, text: &str) -> Result<(), FlagError> {
        let Some(flag) = self.registry.lookup_mut(name) else {
            return Err(FlagError::Undefined {
                flag: format!("--{name}"),
            });
        };
        let boolean = is_bool_flag(flag.value());
        store(flag, text, boolean)?;
        self.registry.mark_seen(name);
        Ok(())
    }
}
