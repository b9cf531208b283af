//! Durations in the `1h2m3.5s` syntax understood by Go programs.
//!
//! Processes configured through flags commonly parse durations with Go's
//! `time.ParseDuration`, so flag values are rendered the way Go's
//! `time.Duration.String` prints them. [`FlagDuration`] carries the same
//! syntax through `serde` so configuration files and flags agree.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DurationError;
use crate::walk::{Node, Walk};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;

/// Fraction digits kept when parsing; further digits are below nanosecond
/// resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 18;

/// Formats `duration` like Go's `time.Duration.String`.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use flagbuilder::format_duration;
///
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// assert_eq!(format_duration(Duration::from_secs(330)), "5m30s");
/// assert_eq!(format_duration(Duration::from_secs(3_600)), "1h0m0s");
/// assert_eq!(format_duration(Duration::from_millis(1_500)), "1.5s");
/// assert_eq!(format_duration(Duration::from_micros(2_500)), "2.5ms");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", decimal(nanos, NANOS_PER_MICRO));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, NANOS_PER_MILLI));
    }

    let secs = duration.as_secs();
    let hours = secs.div_euclid(SECS_PER_HOUR);
    let minutes = secs.rem_euclid(SECS_PER_HOUR).div_euclid(SECS_PER_MINUTE);
    let seconds = secs.rem_euclid(SECS_PER_MINUTE);
    let fraction = u128::from(seconds) * NANOS_PER_SEC + u128::from(duration.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&decimal(fraction, NANOS_PER_SEC));
    out.push('s');
    out
}

/// Renders `value / scale` with the fraction's trailing zeros removed.
fn decimal(value: u128, scale: u128) -> String {
    let whole = value.div_euclid(scale);
    let fraction = value.rem_euclid(scale);
    if fraction == 0 {
        return whole.to_string();
    }
    let width = scale.to_string().len().saturating_sub(1);
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Parses a duration written in Go syntax, such as `300ms`, `1.5h` or `2h45m`.
///
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `0`
/// is accepted. Negative durations cannot be represented and are rejected
/// unless they are zero.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use flagbuilder::parse_duration;
///
/// assert_eq!(parse_duration("2h45m"), Ok(Duration::from_secs(9_900)));
/// assert_eq!(parse_duration("1.5s"), Ok(Duration::from_millis(1_500)));
/// assert!(parse_duration("10").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`DurationError`] describing why `input` was rejected.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    let (negative, body) = input.strip_prefix('-').map_or_else(
        || (false, input.strip_prefix('+').unwrap_or(input)),
        |rest| (true, rest),
    );
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(DurationError::Invalid {
            input: input.to_owned(),
        });
    }

    let mut total: u128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let (nanos, remainder) = parse_component(rest, input)?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| DurationError::Overflow {
                input: input.to_owned(),
            })?;
        rest = remainder;
    }

    if negative && total > 0 {
        return Err(DurationError::Negative {
            input: input.to_owned(),
        });
    }
    let secs = u64::try_from(total.div_euclid(NANOS_PER_SEC)).map_err(|_| DurationError::Overflow {
        input: input.to_owned(),
    })?;
    let subsec = u32::try_from(total.rem_euclid(NANOS_PER_SEC)).map_err(|_| {
        DurationError::Overflow {
            input: input.to_owned(),
        }
    })?;
    Ok(Duration::new(secs, subsec))
}

/// Parses one `{number}{unit}` component from the front of `text`.
fn parse_component<'a>(text: &'a str, input: &str) -> Result<(u128, &'a str), DurationError> {
    let invalid = || DurationError::Invalid {
        input: input.to_owned(),
    };
    let overflow = || DurationError::Overflow {
        input: input.to_owned(),
    };

    let (whole, after_whole) = split_digits(text);
    let (fraction, suffix) = after_whole
        .strip_prefix('.')
        .map_or(("", after_whole), split_digits);
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }

    let unit_len = suffix
        .char_indices()
        .find(|(_, ch)| *ch == '.' || ch.is_ascii_digit())
        .map_or(suffix.len(), |(index, _)| index);
    let (unit, remainder) = suffix.split_at(unit_len);
    if unit.is_empty() {
        return Err(DurationError::MissingUnit {
            input: input.to_owned(),
        });
    }
    let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
        unit: unit.to_owned(),
        input: input.to_owned(),
    })?;

    let whole_value = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| overflow())?
    };
    let mut nanos = whole_value.checked_mul(scale).ok_or_else(overflow)?;

    let kept = fraction.get(..MAX_FRACTION_DIGITS).unwrap_or(fraction);
    if !kept.is_empty() {
        let digits = kept.parse::<u128>().map_err(|_| invalid())?;
        let exponent = u32::try_from(kept.len()).map_err(|_| invalid())?;
        let fraction_nanos = (digits * scale).div_euclid(10_u128.pow(exponent));
        nanos = nanos.checked_add(fraction_nanos).ok_or_else(overflow)?;
    }
    Ok((nanos, remainder))
}

fn split_digits(text: &str) -> (&str, &str) {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    text.split_at(len)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(u128::from(SECS_PER_MINUTE) * NANOS_PER_SEC),
        "h" => Some(u128::from(SECS_PER_HOUR) * NANOS_PER_SEC),
        _ => None,
    }
}

/// A [`Duration`] that reads and writes Go duration syntax.
///
/// Use it for configuration fields that end up as duration flags. It
/// serialises as a string such as `"5m30s"` and deserialises from either
/// such a string or a whole number of seconds.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use flagbuilder::FlagDuration;
///
/// let timeout: FlagDuration = "2m".parse()?;
/// assert_eq!(timeout.as_duration(), Duration::from_secs(120));
/// assert_eq!(timeout.to_string(), "2m0s");
/// # Ok::<(), flagbuilder::DurationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlagDuration(pub Duration);

impl FlagDuration {
    /// A zero-length duration, rendered as `0s`.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Creates a duration of `secs` whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Returns the wrapped [`Duration`].
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }
}

impl From<Duration> for FlagDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<FlagDuration> for Duration {
    fn from(duration: FlagDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for FlagDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

impl FromStr for FlagDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s).map(Self)
    }
}

impl Walk for FlagDuration {
    fn node(&self) -> Node<'_> {
        Node::Duration(self.0)
    }
}

impl Serialize for FlagDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FlagDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlagDurationVisitor)
    }
}

struct FlagDurationVisitor;

impl Visitor<'_> for FlagDurationVisitor {
    type Value = FlagDuration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a duration such as \"1m30s\" or a whole number of seconds")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, secs: u64) -> Result<Self::Value, E> {
        Ok(FlagDuration::from_secs(secs))
    }

    fn visit_i64<E: de::Error>(self, secs: i64) -> Result<Self::Value, E> {
        u64::try_from(secs)
            .map(FlagDuration::from_secs)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(secs), &self))
    }
}
