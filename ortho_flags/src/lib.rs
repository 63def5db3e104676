//! Command-line flag parsing into caller-owned, typed storage.
//!
//! Programs register flags on a [`FlagSet`], each with a long name, an
//! optional single-character alias, and a [`Value`] that owns the typed
//! slot. [`FlagSet::parse`] then walks the argument list:
//!
//! - `--name`, `--name=value` and `--name value` address flags by name;
//! - `-a`, `-a=value`, `-a value` and grouped aliases such as `-abc`
//!   address them by alias;
//! - boolean flags are switched on by presence alone;
//! - `--` ends flag scanning, and an optional mode stops at the first
//!   positional argument;
//! - `--help`/`-h` show usage unless a flag claims those names.
//!
//! Everything that is not a flag is kept, in order, as a positional
//! argument. Failures are delivered according to the set's
//! [`ErrorHandling`] policy.
//!
//! ```
//! use std::time::Duration;
//! use ortho_flags::{ErrorHandling, FlagSet};
//!
//! let mut verbose = false;
//! let mut retries = 0_u32;
//! let mut timeout = Duration::ZERO;
//! let mut flags = FlagSet::new("fetch", ErrorHandling::ContinueOnError, false);
//! flags.bool_var(&mut verbose, "verbose", Some('v'), false, "log progress")?;
//! flags.int_var(&mut retries, "retries", Some('r'), 3, "attempts before giving up")?;
//! flags.duration_var(&mut timeout, "timeout", None, Duration::from_secs(30), "per request")?;
//!
//! flags.parse(["-vr", "5", "https://example.com", "--timeout=1m30s"])?;
//! assert_eq!(flags.args(), ["https://example.com"]);
//! drop(flags);
//!
//! assert!(verbose);
//! assert_eq!(retries, 5);
//! assert_eq!(timeout, Duration::from_secs(90));
//! # Ok::<(), ortho_flags::FlagError>(())
//! ```

mod error;
mod flag_set;
mod registry;
pub mod value;

pub use error::{FlagError, ValueError};
pub use flag_set::{ErrorHandling, FlagSet, UsageFn};
pub use registry::{Callback, Flag};
pub use value::{BoolFlag, Getter, Value};
