//! Go-style duration strings (`4h`, `90m`, `1h30m`, `2.5s`).
//!
//! The lookback flag has always been written in this notation, so both
//! parsing and formatting stay compatible with it.

use std::time::Duration;

use crate::config::ConfigError;

const NANOS_PER_UNIT: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 3_600 * 1_000_000_000),
];

/// Parse a Go duration string into a [`Duration`].
///
/// A duration is a sequence of decimal numbers, each with an optional
/// fraction and a mandatory unit suffix. The bare string `"0"` is also
/// accepted. Negative durations are rejected.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use scouter_types::parse_go_duration;
/// assert_eq!(parse_go_duration("4h").unwrap(), Duration::from_secs(4 * 3600));
/// assert_eq!(parse_go_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_go_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// ```
pub fn parse_go_duration(input: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration(input.to_string());
    let s = input.trim();
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut rest = s;
    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(invalid)?;
        if number_len == 0 {
            return Err(invalid());
        }
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);

        let scale = NANOS_PER_UNIT
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(invalid)?;

        total += scaled(number, scale).ok_or_else(invalid)?;
        rest = tail;
    }

    let secs = u64::try_from(total / 1_000_000_000).map_err(|_| invalid())?;
    Ok(Duration::new(secs, (total % 1_000_000_000) as u32))
}

/// Multiply a decimal literal such as `1.25` by `scale` without going
/// through floating point.
fn scaled(number: &str, scale: u128) -> Option<u128> {
    let (whole, fraction) = match number.split_once('.') {
        Some((w, f)) => (w, f),
        None => (number, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.contains('.') {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut value = whole.checked_mul(scale)?;

    let mut divisor: u128 = 1;
    let mut frac_value: u128 = 0;
    for digit in fraction.bytes() {
        // Anything past nanosecond precision is dropped
        if divisor >= 1_000_000_000_000_000_000 {
            break;
        }
        frac_value = frac_value * 10 + u128::from(digit - b'0');
        divisor *= 10;
    }
    value = value.checked_add(frac_value * scale / divisor)?;
    Some(value)
}

/// Format a duration the way Go's `time.Duration.String` does for whole
/// seconds and above (`4h0m0s`, `1m30s`), falling back to `ms` for
/// sub-second values.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use scouter_types::format_go_duration;
/// assert_eq!(format_go_duration(Duration::from_secs(4 * 3600)), "4h0m0s");
/// assert_eq!(format_go_duration(Duration::from_secs(90)), "1m30s");
/// assert_eq!(format_go_duration(Duration::from_millis(250)), "250ms");
/// assert_eq!(format_go_duration(Duration::ZERO), "0s");
/// ```
pub fn format_go_duration(d: Duration) -> String {
    let total = d.as_secs();
    if total == 0 {
        if d.is_zero() {
            return "0s".to_string();
        }
        return format!("{}ms", d.as_millis());
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Serde adapter storing a [`Duration`] as a Go duration string.
pub mod serde_go {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_go_duration(*d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_go_duration(&s).map_err(serde::de::Error::custom)
    }
}
