//! Compact elapsed-time text, e.g. `3m38s`, `1h0m0s`, `1.5ms`.

use std::fmt::Write as _;
use std::time::Duration;

use crate::error::{Error, Result};

const NANOS_PER_SEC: u128 = 1_000_000_000;

// Fraction digits past this point are below nanosecond resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_scale(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let n = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(n)
}

/// Parse a sequence of `<number>[.<fraction>]<unit>` groups such as `3m38s`
/// or `1h2.5m`. A bare `0` is accepted; signs other than a leading `+` are not.
pub fn parse_duration(text: &str) -> Result<Duration> {
    let s = text.trim();
    if s.starts_with('-') {
        return Err(Error::duration(text, "negative durations are not supported"));
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(Error::duration(text, "empty duration"));
    }

    let mut total: u128 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        rest = after;

        let mut fraction = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after) = split_digits(after_dot);
            fraction = digits;
            rest = after;
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(Error::duration(text, "expected a number"));
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after) = rest.split_at(unit_end);
        rest = after;
        if unit.is_empty() {
            return Err(Error::duration(text, "missing unit"));
        }
        let scale = unit_scale(unit).ok_or_else(|| Error::duration(text, "unknown unit"))?;

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| Error::duration(text, "value out of range"))?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .ok_or_else(|| Error::duration(text, "value out of range"))?;

        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let numerator: u128 = digits
                .parse()
                .map_err(|_| Error::duration(text, "value out of range"))?;
            nanos = nanos
                .checked_add(numerator * scale / 10u128.pow(digits.len() as u32))
                .ok_or_else(|| Error::duration(text, "value out of range"))?;
        }

        total = total
            .checked_add(nanos)
            .filter(|t| *t <= u128::from(u64::MAX))
            .ok_or_else(|| Error::duration(text, "value out of range"))?;
    }

    // Bounded by the filter above.
    Ok(Duration::from_nanos(total as u64))
}

/// `value / 10^scale` as decimal text with trailing fractional zeros trimmed.
fn decimal(value: u128, scale: u32) -> String {
    let div = 10u128.pow(scale);
    let whole = value / div;
    let frac = value % div;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = scale as usize);
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Format a duration in the compact form accepted by [`parse_duration`].
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, 6));
    }

    let secs = d.as_secs();
    let hours = secs / 3_600;
    let minutes = secs / 60 % 60;
    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let seconds = u128::from(secs % 60) * NANOS_PER_SEC + u128::from(d.subsec_nanos());
    out.push_str(&decimal(seconds, 9));
    out.push('s');
    out
}
