// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use chrono::Duration;
use lazy_static::lazy_static;
use std::collections::HashMap;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1000 * NANOSECOND;
const MILLISECOND: u64 = 1000 * MICROSECOND;
const SECOND: u64 = 1000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// The magnitude of the most negative representable duration, in nanoseconds.
const MAX_MAGNITUDE: u64 = 1 << 63;

lazy_static! {
    static ref UNIT_MAP: HashMap<&'static str, u64> = {
        let mut m = HashMap::new();
        m.insert("ns", NANOSECOND);
        m.insert("us", MICROSECOND);
        m.insert("\u{00b5}s", MICROSECOND); // U+00B5 = micro symbol
        m.insert("\u{03bc}s", MICROSECOND); // U+03BC = Greek letter mu
        m.insert("ms", MILLISECOND);
        m.insert("s", SECOND);
        m.insert("m", MINUTE);
        m.insert("h", HOUR);
        m
    };
}

/// Consume the leading run of ASCII digits from s. Returns the digits' value
/// and the rest of the string, or None if the value overflows.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut v: u64 = 0;
    for c in s[..end].bytes() {
        v = v.checked_mul(10)?.checked_add(u64::from(c - b'0'))?;
        if v > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((v, &s[end..]))
}

/// Consume the leading run of ASCII digits after a decimal point. Returns the
/// digits' value, the scale it should be divided by, and the rest of the
/// string. Digits past the point where precision would overflow are consumed
/// but otherwise ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut v: u64 = 0;
    let mut scale: f64 = 1.0;
    let mut overflow = false;
    for c in s[..end].bytes() {
        if overflow {
            continue;
        }
        match v
            .checked_mul(10)
            .and_then(|y| y.checked_add(u64::from(c - b'0')))
        {
            Some(y) if y <= MAX_MAGNITUDE => {
                v = y;
                scale *= 10.0;
            }
            _ => overflow = true,
        }
    }
    (v, scale, &s[end..])
}

/// Parse a duration string, which is a possibly signed sequence of decimal
/// numbers each with an optional fraction and a unit suffix, like "300ms",
/// "-1.5h" or "2h45m". Valid units are "ns", "us" (or "µs"), "ms", "s", "m",
/// and "h".
pub fn parse_duration(raw: &str) -> ValueResult<Duration> {
    let invalid = |reason: &str| ValueError::InvalidDuration {
        value: raw.to_owned(),
        reason: reason.to_owned(),
    };

    let mut s = raw;
    let mut negative = false;
    if s.starts_with('-') || s.starts_with('+') {
        negative = s.starts_with('-');
        s = &s[1..];
    }
    if s == "0" {
        return Ok(Duration::zero());
    }
    if s.is_empty() {
        return Err(invalid("empty duration"));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid("expected a number"));
        }

        let before = s.len();
        let (whole, rest) = leading_int(s).ok_or_else(|| invalid("value out of range"))?;
        s = rest;
        let had_whole = before != s.len();

        let mut fraction: u64 = 0;
        let mut scale: f64 = 1.0;
        let mut had_fraction = false;
        if s.starts_with('.') {
            s = &s[1..];
            let before = s.len();
            let (f, sc, rest) = leading_fraction(s);
            fraction = f;
            scale = sc;
            s = rest;
            had_fraction = before != s.len();
        }
        if !had_whole && !had_fraction {
            return Err(invalid("expected digits around '.'"));
        }

        let unit_end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_end == 0 {
            return Err(invalid("missing unit"));
        }
        let unit_name = &s[..unit_end];
        s = &s[unit_end..];
        let unit = *UNIT_MAP
            .get(unit_name)
            .ok_or_else(|| invalid(&format!("unknown unit '{}'", unit_name)))?;

        let mut v = whole
            .checked_mul(unit)
            .filter(|&v| v <= MAX_MAGNITUDE)
            .ok_or_else(|| invalid("value out of range"))?;
        if fraction > 0 {
            // Float precision is fine here; the whole part is exact already.
            let extra = (fraction as f64 * (unit as f64 / scale)) as u64;
            v = v
                .checked_add(extra)
                .filter(|&v| v <= MAX_MAGNITUDE)
                .ok_or_else(|| invalid("value out of range"))?;
        }
        total = total
            .checked_add(v)
            .filter(|&t| t <= MAX_MAGNITUDE)
            .ok_or_else(|| invalid("value out of range"))?;
    }

    let nanos: i64 = match negative {
        true => (-(total as i128)) as i64,
        false => {
            if total > i64::MAX as u64 {
                return Err(invalid("value out of range"));
            }
            total as i64
        }
    };
    Ok(Duration::nanoseconds(nanos))
}

/// Format the fraction of v / 10^precision, omitting trailing zeros (and the
/// decimal point entirely, if the fraction is zero). Returns the formatted
/// fraction, and v / 10^precision.
fn format_fraction(v: u64, precision: u32) -> (String, u64) {
    let pow = 10u64.pow(precision);
    let fraction = v % pow;
    if fraction == 0 {
        return (String::new(), v / pow);
    }
    let digits = format!("{:0width$}", fraction, width = precision as usize);
    (format!(".{}", digits.trim_end_matches('0')), v / pow)
}

/// Format a duration the same way `parse_duration` accepts it, e.g. "72h3m0.5s".
/// Leading zero units are omitted, and durations shorter than one second use
/// smaller units ("1.5µs", "3.4ms") so there is always a nonzero leading digit.
/// The zero duration formats as "0s".
pub fn format_duration(d: &Duration) -> String {
    // chrono durations can exceed i64 nanoseconds, but we never construct one.
    let nanos = d.num_nanoseconds().unwrap_or(i64::MAX);
    let negative = nanos < 0;
    let u = (nanos as i128).abs() as u64;

    let body = if u < SECOND {
        let (unit, precision) = match u {
            0 => return "0s".to_owned(),
            _ if u < MICROSECOND => ("ns", 0),
            _ if u < MILLISECOND => ("\u{00b5}s", 3),
            _ => ("ms", 6),
        };
        let (fraction, whole) = format_fraction(u, precision);
        format!("{}{}{}", whole, fraction, unit)
    } else {
        let (fraction, seconds) = format_fraction(u, 9);
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let seconds = format!("{}{}s", seconds % 60, fraction);
        match (hours, minutes) {
            (0, 0) => seconds,
            (0, m) => format!("{}m{}", m, seconds),
            (h, m) => format!("{}h{}m{}", h, m % 60, seconds),
        }
    };

    match negative {
        false => body,
        true => format!("-{}", body),
    }
}
