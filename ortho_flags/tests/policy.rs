//! Delivery of parse failures under each error-handling policy.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::process::Command;

use anyhow::{Result, ensure};
use ortho_flags::{ErrorHandling, FlagError, FlagSet};
use rstest::rstest;
use test_helpers::output::SharedBuffer;

#[test]
#[should_panic(expected = "flag provided but not defined: --nope")]
fn panic_on_error_raises_the_failure() {
    let mut flags = FlagSet::new("strict", ErrorHandling::PanicOnError, false);
    flags.set_output(SharedBuffer::default());
    let outcome = flags.parse(["--nope"]);
    panic!("parse returned {outcome:?} instead of panicking");
}

#[test]
fn panic_on_error_prints_before_panicking() -> Result<()> {
    let out = SharedBuffer::default();
    let writer = out.clone();
    let caught = catch_unwind(AssertUnwindSafe(move || {
        let mut verbose = false;
        let mut flags = FlagSet::new("strict", ErrorHandling::PanicOnError, false);
        flags.set_output(writer);
        flags.bool_var(&mut verbose, "verbose", Some('v'), false, "")?;
        flags.parse(["-v", "-q"])
    }));
    ensure!(caught.is_err(), "parse did not panic");
    ensure!(
        out.contents() == "flag provided but not defined: -q\n",
        "output {:?}",
        out.contents()
    );
    Ok(())
}

#[test]
fn panic_on_error_is_quiet_on_success() -> Result<()> {
    let out = SharedBuffer::default();
    let mut verbose = false;
    let mut flags = FlagSet::new("strict", ErrorHandling::PanicOnError, false);
    flags.set_output(out.clone());
    flags.bool_var(&mut verbose, "verbose", Some('v'), false, "")?;
    flags.parse(["-v", "file"])?;
    ensure!(out.is_empty(), "output {:?}", out.contents());
    ensure!(flags.args() == ["file"], "positionals {:?}", flags.args());
    Ok(())
}

#[rstest]
#[case(ErrorHandling::ContinueOnError)]
#[case(ErrorHandling::PanicOnError)]
fn version_is_printed_under_every_policy(#[case] policy: ErrorHandling) -> Result<()> {
    let out = SharedBuffer::default();
    let writer = out.clone();
    let caught = catch_unwind(AssertUnwindSafe(move || {
        let mut show = false;
        let mut flags = FlagSet::new("tool", policy, false);
        flags.set_output(writer);
        flags.version_var(&mut show, "version", Some('V'), "1.2.3", "print the version")?;
        flags.parse(["-V"])
    }));
    ensure!(
        out.contents() == "tool: 1.2.3\n",
        "output {:?}",
        out.contents()
    );
    match policy {
        ErrorHandling::ContinueOnError => ensure!(
            matches!(
                &caught,
                Ok(Err(FlagError::VersionRequested { version })) if version == "1.2.3"
            ),
            "{caught:?}"
        ),
        ErrorHandling::ExitOnError | ErrorHandling::PanicOnError => {
            ensure!(caught.is_err(), "{policy:?} returned {caught:?}");
        }
    }
    Ok(())
}

#[test]
fn continue_on_error_returns_help_without_printing_an_error() -> Result<()> {
    let out = SharedBuffer::default();
    let mut flags = FlagSet::new("", ErrorHandling::ContinueOnError, false);
    flags.set_output(out.clone());
    let outcome = flags.parse(["--help"]);
    ensure!(matches!(outcome, Err(FlagError::HelpRequested)), "{outcome:?}");
    ensure!(out.contents() == "Usage:\n", "output {:?}", out.contents());
    Ok(())
}

/// Set in a re-executed test binary to the argument it should parse under
/// `ExitOnError`.
const EXIT_CHILD_ARG: &str = "ORTHO_FLAGS_EXIT_CHILD_ARG";

#[rstest]
#[case("--bogus", "flag provided but not defined: --bogus\n")]
#[case("--help", "Usage of exiting:\n      --level int\n    \tlog level (default 1)\n")]
fn exit_on_error_exits_with_status_two(
    #[case] argument: &str,
    #[case] stderr: &str,
) -> Result<()> {
    if let Some(child_argument) = std::env::var_os(EXIT_CHILD_ARG) {
        let mut level = 0_i32;
        let mut flags = FlagSet::new("exiting", ErrorHandling::ExitOnError, false);
        flags.int_var(&mut level, "level", None, 1, "log level")?;
        let outcome = flags.parse([child_argument.to_string_lossy().into_owned()]);
        anyhow::bail!("parse returned {outcome:?} instead of exiting");
    }

    let output = Command::new(std::env::current_exe()?)
        .args([
            "exit_on_error_exits_with_status_two",
            "--test-threads=1",
            "--nocapture",
        ])
        .env(EXIT_CHILD_ARG, argument)
        .output()?;
    let child_stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        output.status.code() == Some(2),
        "{argument}: exited with {:?}, stderr {child_stderr:?}",
        output.status
    );
    ensure!(
        child_stderr.contains(stderr),
        "{argument}: stderr {child_stderr:?}"
    );
    Ok(())
}
