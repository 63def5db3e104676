//! Duration adapter using the compact unit-suffixed grammar (`300ms`,
//! `1.5h`, `2h45m`).

use std::any::Any;
use std::fmt;
use std::iter::{self, Peekable};
use std::str::Chars;
use std::time::Duration;

use super::{Getter, Value};
use crate::ValueError;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Duration slot.
///
/// [`Duration`] is unsigned, so negative text such as `-1s` is rejected
/// with [`ValueError::Syntax`]. A leading `+` is accepted.
///
/// ```
/// use std::time::Duration;
/// use ortho_flags::{Value, ValueError};
/// use ortho_flags::value::DurationValue;
///
/// let mut timeout = Duration::ZERO;
/// let mut value = DurationValue::new(&mut timeout, Duration::from_secs(5));
/// assert!(matches!(value.set("-1s"), Err(ValueError::Syntax)));
/// assert!(value.set("+90s").is_ok());
/// assert_eq!(value.to_string(), "1m30s");
/// ```
#[derive(Debug)]
pub struct DurationValue<'a>(&'a mut Duration);

impl<'a> DurationValue<'a> {
    /// Bind to `slot`, storing `initial` in it.
    #[must_use]
    pub const fn new(slot: &'a mut Duration, initial: Duration) -> Self {
        *slot = initial;
        Self(slot)
    }
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3_600 * NANOS_PER_SECOND),
        _ => None,
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    iter::from_fn(|| chars.next_if(char::is_ascii_digit)).collect()
}

/// Nanoseconds contributed by one `whole.fraction unit` component.
fn component_nanos(whole: &str, fraction: &str, scale: u128) -> Result<u128, ValueError> {
    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| ValueError::Range)?
    };
    let mut nanos = whole_value.checked_mul(scale).ok_or(ValueError::Range)?;

    // Digits past nanosecond precision are truncated.
    let mut numerator: u128 = 0;
    let mut divisor: u128 = 1;
    for digit in fraction.chars().filter_map(|c| c.to_digit(10)) {
        if divisor > scale {
            break;
        }
        numerator = numerator * 10 + u128::from(digit);
        divisor *= 10;
    }
    nanos = nanos
        .checked_add((numerator * scale).div_euclid(divisor))
        .ok_or(ValueError::Range)?;
    Ok(nanos)
}

/// Parse duration text such as `1h30m`, `1.5s` or `250us`.
///
/// A bare `0` is accepted without a unit. Negative durations cannot be
/// represented and are rejected as malformed.
///
/// # Errors
///
/// Returns [`ValueError::Syntax`] for malformed text and
/// [`ValueError::Range`] when the total exceeds `u64` nanoseconds.
pub(crate) fn parse_duration(text: &str) -> Result<Duration, ValueError> {
    let body = text.strip_prefix('+').unwrap_or(text);
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(ValueError::Syntax);
    }

    let mut chars = body.chars().peekable();
    let mut total: u128 = 0;
    while chars.peek().is_some() {
        let whole = take_digits(&mut chars);
        let fraction = if chars.next_if_eq(&'.').is_some() {
            take_digits(&mut chars)
        } else {
            String::new()
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(ValueError::Syntax);
        }
        let unit: String =
            iter::from_fn(|| chars.next_if(|c| *c != '.' && !c.is_ascii_digit())).collect();
        let scale = unit_nanos(&unit).ok_or(ValueError::Syntax)?;
        total = total
            .checked_add(component_nanos(&whole, &fraction, scale)?)
            .ok_or(ValueError::Range)?;
    }

    let nanos = u64::try_from(total).map_err(|_| ValueError::Range)?;
    Ok(Duration::from_nanos(nanos))
}

/// Render `value / scale` with up to `width` fractional digits, trimming
/// trailing zeros.
fn fixed(value: u128, scale: u128, width: usize) -> String {
    let whole = value.div_euclid(scale);
    let fraction = value.rem_euclid(scale);
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Render a duration in the form accepted by [`parse_duration`].
pub(crate) fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}\u{b5}s", fixed(nanos, NANOS_PER_MICRO, 3));
    }
    if nanos < NANOS_PER_SECOND {
        return format!("{}ms", fixed(nanos, NANOS_PER_MILLI, 6));
    }

    let secs = duration.as_secs();
    let hours = secs.div_euclid(3_600);
    let minutes = secs.div_euclid(60).rem_euclid(60);
    let seconds = u128::from(secs.rem_euclid(60)) * NANOS_PER_SECOND
        + u128::from(duration.subsec_nanos());

    let mut rendered = String::new();
    if hours > 0 {
        rendered.push_str(&hours.to_string());
        rendered.push('h');
    }
    if hours > 0 || minutes > 0 {
        rendered.push_str(&minutes.to_string());
        rendered.push('m');
    }
    rendered.push_str(&fixed(seconds, NANOS_PER_SECOND, 9));
    rendered.push('s');
    rendered
}

impl Value for DurationValue<'_> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        *self.0 = parse_duration(text)?;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        "duration"
    }

    fn as_getter(&self) -> Option<&dyn Getter> {
        Some(self)
    }
}

impl Getter for DurationValue<'_> {
    fn get(&self) -> &dyn Any {
        &*self.0
    }
}

impl fmt::Display for DurationValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(*self.0))
    }
}
