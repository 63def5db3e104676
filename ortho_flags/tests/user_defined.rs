//! Caller-defined value types and change callbacks.

use std::cell::RefCell;
use std::fmt;

use anyhow::{Result, ensure};
use ortho_flags::{BoolFlag, ErrorHandling, FlagError, FlagSet, Value, ValueError};

/// Collects every occurrence instead of overwriting.
#[derive(Default)]
struct List(Vec<String>);

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

impl Value for List {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        self.0.push(text.to_owned());
        Ok(())
    }
}

#[test]
fn list_value_accumulates_every_form() -> Result<()> {
    let mut list = List::default();
    let mut flags = FlagSet::new("test", ErrorHandling::ContinueOnError, true);
    flags.var(&mut list, "v", Some('v'), "usage")?;
    flags.parse(["--v", "1", "--v=2", "-v", "3", "-v=4"])?;
    drop(flags);
    ensure!(list.0.len() == 4, "expected 4 values, got {}", list.0.len());
    ensure!(list.to_string() == "[1 2 3 4]", "rendered {list}");
    Ok(())
}

/// Switches on by presence for its first four uses, then wants a value.
#[derive(Default)]
struct Counter {
    count: u32,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}

impl Value for Counter {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        if text == "true" {
            self.count += 1;
        }
        Ok(())
    }

    fn as_bool_flag(&self) -> Option<&dyn BoolFlag> {
        Some(self)
    }
}

impl BoolFlag for Counter {
    fn is_bool_flag(&self) -> bool {
        self.count < 4
    }
}

#[test]
fn bool_capability_is_asked_on_every_occurrence() -> Result<()> {
    let mut counter = Counter::default();
    let mut flags = FlagSet::new("test", ErrorHandling::ContinueOnError, true);
    flags.var(&mut counter, "bool", Some('b'), "usage")?;
    let outcome = flags.parse([
        "--bool", "-b", "-b", "--bool=true", "-b=false", "--bool", "barg", "-b",
    ]);
    ensure!(
        matches!(&outcome, Err(FlagError::MissingArgument { name }) if name == "bool"),
        "unexpected outcome {outcome:?}"
    );
    ensure!(flags.n_args() == 0, "barg left as positional: {:?}", flags.args());
    drop(flags);
    ensure!(counter.count == 4, "count = {}", counter.count);
    Ok(())
}

/// Accepts `scheme://host` and nothing else.
#[derive(Default)]
struct Endpoint {
    scheme: String,
    host: String,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.is_empty() {
            return Ok(());
        }
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

impl Value for Endpoint {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        let (scheme, host) = text
            .split_once("://")
            .filter(|(scheme, host)| !scheme.is_empty() && !host.is_empty())
            .ok_or_else(|| ValueError::custom(format!("{text:?} is not scheme://host")))?;
        scheme.clone_into(&mut self.scheme);
        host.clone_into(&mut self.host);
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        "url"
    }
}

#[test]
fn custom_value_errors_carry_their_message() -> Result<()> {
    let mut endpoint = Endpoint::default();
    let mut flags = FlagSet::new("client", ErrorHandling::ContinueOnError, false);
    flags.var(&mut endpoint, "endpoint", Some('e'), "server to call")?;
    ensure!(
        flags.defaults().contains("--endpoint url"),
        "defaults {:?}",
        flags.defaults()
    );

    let err = flags.parse(["-e", "localhost"]);
    ensure!(
        matches!(
            &err,
            Err(FlagError::InvalidValue { source: ValueError::Custom(_), .. })
        ),
        "{err:?}"
    );
    let text = err.map_or_else(|e| e.to_string(), |()| String::new());
    ensure!(text.contains("is not scheme://host"), "message {text:?}");

    flags.parse(["--endpoint=https://example.com"])?;
    drop(flags);
    ensure!(
        endpoint.scheme == "https" && endpoint.host == "example.com",
        "endpoint = {endpoint}"
    );
    Ok(())
}

#[test]
fn callbacks_see_each_accepted_value() -> Result<()> {
    let changes = RefCell::new(Vec::new());
    let mut level = 0_u8;
    let mut name = String::new();
    let mut flags = FlagSet::new("", ErrorHandling::ContinueOnError, false);
    flags.var_with_callback(
        ortho_flags::value::IntValue::new(&mut level, 1),
        "level",
        Some('l'),
        "verbosity",
        |value: &dyn Value| changes.borrow_mut().push(format!("level={value}")),
    )?;
    flags.string_var(&mut name, "name", None, "", "")?;
    flags.on_change("name", |value: &dyn Value| {
        changes.borrow_mut().push(format!("name={value}"));
    })?;

    let outcome = flags.parse(["-l", "2", "--name", "x", "--level=300", "-l3"]);
    ensure!(outcome.is_err(), "300 fits in u8?");
    flags.set("level", "4")?;
    drop(flags);

    ensure!(
        *changes.borrow() == ["level=2", "name=x", "level=4"],
        "changes {:?}",
        changes.borrow()
    );
    ensure!(level == 4, "level = {level}");
    Ok(())
}

#[test]
fn on_change_requires_a_defined_flag() -> Result<()> {
    let mut flags = FlagSet::new("", ErrorHandling::ContinueOnError, false);
    let outcome = flags.on_change("ghost", |_: &dyn Value| {});
    ensure!(
        matches!(&outcome, Err(FlagError::Undefined { flag }) if flag == "--ghost"),
        "{outcome:?}"
    );
    Ok(())
}
