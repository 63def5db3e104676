//! Flag definitions and the registry that indexes them by name and alias.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use crate::{FlagError, Value};

/// Callback invoked after a flag's value has been set successfully.
pub type Callback<'a> = Box<dyn FnMut(&dyn Value) + 'a>;

/// A registered flag.
pub struct Flag<'a> {
    name: String,
    alias: Option<char>,
    usage: String,
    default: String,
    value: Box<dyn Value + 'a>,
    on_change: Option<Callback<'a>>,
}

impl<'a> Flag<'a> {
    /// Long name, used as `--name`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short alias, used as `-a`.
    #[must_use]
    pub const fn alias(&self) -> Option<char> {
        self.alias
    }

    /// Help text supplied at registration.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Rendering of the value at registration time.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &(dyn Value + 'a) {
        self.value.as_ref()
    }

    /// The current value in its native type, when the value exposes a
    /// [`Getter`](crate::Getter) and `T` matches.
    ///
    /// ```
    /// use ortho_flags::{ErrorHandling, FlagSet};
    ///
    /// let mut port = 0_u16;
    /// let mut flags = FlagSet::new("demo", ErrorHandling::ContinueOnError, false);
    /// flags.int_var(&mut port, "port", Some('p'), 8080, "listen port")?;
    /// flags.parse(["-p", "9000"])?;
    /// let current = flags.lookup("port").and_then(|flag| flag.get::<u16>().copied());
    /// assert_eq!(current, Some(9000));
    /// # Ok::<(), ortho_flags::FlagError>(())
    /// ```
    #[must_use]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.value
            .as_getter()
            .and_then(|getter| getter.get().downcast_ref::<T>())
    }

    pub(crate) fn set(&mut self, text: &str) -> Result<(), crate::ValueError> {
        self.value.set(text)?;
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.value.as_ref());
        }
        Ok(())
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("usage", &self.usage)
            .field("default", &self.default)
            .field("value", &self.value.to_string())
            .field(
                "on_change",
                &self.on_change.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

/// Flags owned by a [`FlagSet`](crate::FlagSet).
///
/// Definitions are kept sorted by long name so both visiting orders are
/// ascending. `seen` tracks the flags assigned since the last reset.
#[derive(Default)]
pub(crate) struct Registry<'a> {
    formal: BTreeMap<String, Flag<'a>>,
    aliases: HashMap<char, String>,
    seen: BTreeSet<String>,
}

fn validate_name(name: &str) -> Result<(), FlagError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.starts_with('-') {
        "name begins with '-'"
    } else if name.contains('=') {
        "name contains '='"
    } else {
        return Ok(());
    };
    Err(FlagError::InvalidName {
        name: name.to_owned(),
        reason,
    })
}

impl<'a> Registry<'a> {
    /// Register a flag.
    ///
    /// Names and aliases must be unique; a clash is reported rather than
    /// overwriting the earlier definition.
    pub(crate) fn define(
        &mut self,
        value: Box<dyn Value + 'a>,
        name: &str,
        alias: Option<char>,
        usage: &str,
        on_change: Option<Callback<'a>>,
    ) -> Result<(), FlagError> {
        validate_name(name)?;
        if self.formal.contains_key(name) {
            return Err(FlagError::Redefined {
                name: name.to_owned(),
            });
        }
        if let Some(alias) = alias {
            if matches!(alias, '-' | '=') || alias.is_whitespace() {
                return Err(FlagError::InvalidAlias {
                    alias,
                    name: name.to_owned(),
                });
            }
            if let Some(existing) = self.aliases.get(&alias) {
                return Err(FlagError::AliasRedefined {
                    alias,
                    existing: existing.clone(),
                });
            }
            self.aliases.insert(alias, name.to_owned());
        }

        let flag = Flag {
            name: name.to_owned(),
            alias,
            usage: usage.to_owned(),
            default: value.to_string(),
            value,
            on_change,
        };
        self.formal.insert(name.to_owned(), flag);
        Ok(())
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.formal.get(name)
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Flag<'a>> {
        self.formal.get_mut(name)
    }

    pub(crate) fn alias_lookup(&self, alias: char) -> Option<&str> {
        self.aliases.get(&alias).map(String::as_str)
    }

    pub(crate) fn set_callback(&mut self, name: &str, callback: Callback<'a>) -> bool {
        self.formal.get_mut(name).is_some_and(|flag| {
            flag.on_change = Some(callback);
            true
        })
    }

    pub(crate) fn mark_seen(&mut self, name: &str) {
        self.seen.insert(name.to_owned());
    }

    pub(crate) fn clear_seen(&mut self) {
        self.seen.clear();
    }

    pub(crate) fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Every definition in ascending name order.
    pub(crate) fn all(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.formal.values()
    }

    /// Definitions assigned since the last reset, in ascending name order.
    pub(crate) fn seen(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.seen.iter().filter_map(|name| self.formal.get(name))
    }
}
