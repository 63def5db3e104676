//! Example CLI greeting each name given on the command line.
//!
//! ```text
//! greet -sc 2 --pause=250ms Ada Grace
//! ```

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use ortho_flags::{ErrorHandling, FlagError, FlagSet};

/// Settings bound to the command's flags.
#[derive(Debug, Default)]
struct Options {
    greeting: String,
    count: u32,
    shout: bool,
    pause: Duration,
    version: bool,
}

fn configure<'a>(flags: &mut FlagSet<'a>, options: &'a mut Options) -> Result<(), FlagError> {
    flags.string_var(
        &mut options.greeting,
        "greeting",
        Some('g'),
        "Hello",
        "`word` to greet with",
    )?;
    flags.int_var(&mut options.count, "count", Some('c'), 1, "times to greet each name")?;
    flags.bool_var(&mut options.shout, "shout", Some('s'), false, "greet in capitals")?;
    flags.duration_var(
        &mut options.pause,
        "pause",
        None,
        Duration::ZERO,
        "wait between greetings",
    )?;
    flags.version_var(
        &mut options.version,
        "version",
        Some('V'),
        env!("CARGO_PKG_VERSION"),
        "print the version and exit",
    )
}

fn render(options: &Options, names: &[String]) -> Vec<String> {
    let default_name = [String::from("world")];
    let targets = if names.is_empty() {
        default_name.as_slice()
    } else {
        names
    };
    targets
        .iter()
        .flat_map(|name| {
            let greeting = format!("{}, {name}!", options.greeting);
            let line = if options.shout {
                greeting.to_uppercase()
            } else {
                greeting
            };
            std::iter::repeat_n(line, usize::try_from(options.count).unwrap_or(usize::MAX))
        })
        .collect()
}

/// Parse `arguments`, then greet on `stdout`.
///
/// Help and version requests are shown on `diagnostics` and end the run
/// successfully.
fn run(
    arguments: Vec<String>,
    diagnostics: Box<dyn Write>,
    stdout: &mut dyn Write,
) -> Result<(), String> {
    let mut options = Options::default();
    let mut flags = FlagSet::new("greet", ErrorHandling::ContinueOnError, false);
    flags.set_output(diagnostics);
    configure(&mut flags, &mut options).map_err(|e| e.to_string())?;
    match flags.parse(arguments) {
        Ok(()) => {}
        Err(err) if err.is_display_request() => return Ok(()),
        Err(err) => return Err(err.to_string()),
    }
    let names = flags.args().to_vec();
    drop(flags);

    for (index, line) in render(&options, &names).iter().enumerate() {
        if index > 0 && !options.pause.is_zero() {
            thread::sleep(options.pause);
        }
        write_line(stdout, line)?;
    }
    Ok(())
}

fn main() -> Result<(), String> {
    let arguments = std::env::args().skip(1).collect();
    with_locked_stdout(|stdout| run(arguments, Box::new(io::stderr()), stdout))
}

fn with_locked_stdout<F>(emit: F) -> Result<(), String>
where
    F: FnOnce(&mut dyn Write) -> Result<(), String>,
{
    let mut stdout = io::stdout().lock();
    emit(&mut stdout)
}

fn write_line(writer: &mut dyn Write, message: &str) -> Result<(), String> {
    writer
        .write_all(message.as_bytes())
        .map_err(|err| err.to_string())?;
    writer.write_all(b"\n").map_err(|err| err.to_string())
}
