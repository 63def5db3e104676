//! Help interception and the usage hook.

use std::cell::Cell;

use anyhow::{Result, ensure};
use ortho_flags::{ErrorHandling, FlagError, FlagSet};
use rstest::rstest;
use test_helpers::output::SharedBuffer;

#[rstest]
#[case("--help")]
#[case("-h")]
#[case("-vh")]
fn help_calls_usage_only_when_asked(#[case] request: &str) -> Result<()> {
    let called = Cell::new(false);
    let mut flag = false;
    let mut verbose = false;
    let mut flags = FlagSet::new("help test", ErrorHandling::ContinueOnError, true);
    flags.set_usage(|_| called.set(true));
    flags.bool_var(&mut flag, "flag", None, false, "regular flag")?;
    flags.bool_var(&mut verbose, "verbose", Some('v'), false, "")?;

    flags.parse(["--flag=true"])?;
    ensure!(!called.get(), "usage called for a regular flag");

    let err = flags.parse([request]);
    ensure!(matches!(err, Err(FlagError::HelpRequested)), "{request}: {err:?}");
    ensure!(called.get(), "{request}: usage was not called");
    drop(flags);
    ensure!(flag, "--flag was not applied");
    Ok(())
}

#[test]
fn user_defined_help_flag_wins() -> Result<()> {
    let called = Cell::new(false);
    let mut help = false;
    let mut flags = FlagSet::new("help test", ErrorHandling::ContinueOnError, true);
    flags.set_usage(|_| called.set(true));
    flags.bool_var(&mut help, "help", None, false, "help flag")?;
    flags.parse(["--help"])?;
    ensure!(!called.get(), "usage called for a defined --help");
    ensure!(flags.lookup("help").is_some_and(|f| f.value().to_string() == "true"), "not set");
    Ok(())
}

#[test]
fn user_defined_h_alias_wins() -> Result<()> {
    let mut host = String::new();
    let out = SharedBuffer::default();
    let mut flags = FlagSet::new("client", ErrorHandling::ContinueOnError, true);
    flags.set_output(out.clone());
    flags.string_var(&mut host, "host", Some('h'), "localhost", "server `address`")?;
    flags.parse(["-h", "example.org"])?;
    ensure!(out.is_empty(), "usage printed: {:?}", out.contents());

    let err = flags.parse(["--help"]);
    ensure!(matches!(err, Err(FlagError::HelpRequested)), "{err:?}");
    drop(flags);
    ensure!(host == "example.org", "host = {host}");
    Ok(())
}

#[test]
fn default_usage_lists_the_flags() -> Result<()> {
    let mut count = 0_i32;
    let mut name = String::new();
    let mut quiet = false;
    let out = SharedBuffer::default();
    let mut flags = FlagSet::new("tool", ErrorHandling::ContinueOnError, false);
    flags.set_output(out.clone());
    flags.int_var(&mut count, "count", Some('c'), 2, "how many")?;
    flags.string_var(&mut name, "name", None, "world", "who to `greet`")?;
    flags.bool_var(&mut quiet, "quiet", Some('q'), false, "say less")?;

    let err = flags.parse(["-h"]);
    ensure!(err.as_ref().is_err_and(FlagError::is_display_request), "{err:?}");
    let expected = concat!(
        "Usage of tool:\n",
        "  -c, --count int\n",
        "    \thow many (default 2)\n",
        "      --name greet\n",
        "    \twho to greet (default \"world\")\n",
        "  -q, --quiet\n",
        "    \tsay less\n",
    );
    ensure!(out.contents() == expected, "usage was {:?}", out.contents());
    Ok(())
}

#[test]
fn usage_hook_can_write_through_the_set() -> Result<()> {
    let mut level = 0_u8;
    let out = SharedBuffer::default();
    let mut flags = FlagSet::new("tool", ErrorHandling::ContinueOnError, false);
    flags.set_output(out.clone());
    flags.int_var(&mut level, "level", None, 1, "log level")?;
    flags.set_usage(|set| {
        if writeln!(set.output(), "tool [flags] FILE").is_ok() {
            set.print_defaults();
        }
    });
    ensure!(flags.parse(["--help"]).is_err(), "help did not fail the parse");
    let text = out.contents();
    ensure!(text.starts_with("tool [flags] FILE\n"), "usage was {text:?}");
    ensure!(text.contains("--level int"), "defaults missing from {text:?}");
    Ok(())
}
