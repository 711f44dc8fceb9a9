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
use std::num::IntErrorKind;

/// Split a base prefix off of the given (unsigned) digit string, returning the
/// radix and the remaining digits. A leading "0" followed by more digits means
/// octal, just like an integer literal in most C-like languages.
fn split_radix(s: &str) -> (u32, &str, bool) {
    let lower = s.get(..2).map(|p| p.to_ascii_lowercase());
    match lower.as_ref().map(|p| p.as_str()) {
        Some("0x") => (16, &s[2..], true),
        Some("0o") => (8, &s[2..], true),
        Some("0b") => (2, &s[2..], true),
        _ if s.len() > 1 && s.starts_with('0') => (8, &s[1..], true),
        _ => (10, s, false),
    }
}

/// Underscores may separate digits, or follow a base prefix, but may not
/// appear at the very start or end, and may not be doubled up.
fn strip_underscores(digits: &str, has_prefix: bool) -> Option<String> {
    if !digits.contains('_') {
        return Some(digits.to_owned());
    }
    if digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    if digits.starts_with('_') && !has_prefix {
        return None;
    }
    Some(digits.chars().filter(|&c| c != '_').collect())
}

/// Parse an integer, automatically detecting its base from its prefix. The
/// result is returned as an i128, which the caller should narrow to whatever
/// type it actually wants (reporting an out-of-range error if that fails).
///
/// If `signed` is false, any leading sign character is rejected.
pub fn parse_integer(raw: &str, signed: bool) -> ValueResult<i128> {
    let invalid = || ValueError::InvalidInteger(raw.to_owned());

    let (negative, unsigned) = match raw.chars().next() {
        Some('-') if signed => (true, &raw[1..]),
        Some('+') if signed => (false, &raw[1..]),
        _ => (false, raw),
    };
    if unsigned.is_empty() {
        return Err(invalid());
    }

    let (radix, digits, has_prefix) = split_radix(unsigned);
    let digits = strip_underscores(digits, has_prefix).ok_or_else(invalid)?;
    // from_str_radix would happily accept a second sign here.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    let magnitude = i128::from_str_radix(digits.as_str(), radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ValueError::IntegerOutOfRange(raw.to_owned())
        }
        _ => invalid(),
    })?;

    Ok(match negative {
        false => magnitude,
        true => -magnitude,
    })
}

/// Parse a floating point value. This accepts the usual decimal and exponent
/// forms, as well as "inf", "infinity" and "nan" (case insensitive).
pub fn parse_float(raw: &str) -> ValueResult<f64> {
    raw.parse::<f64>()
        .map_err(|_| ValueError::InvalidFloat(raw.to_owned()))
}

/// Format a floating point value using the fewest digits which parse back to
/// the same value. Exponents below -4, or of 6 and above, use scientific
/// notation with a signed exponent of at least two digits ("1e+06", "2.5e-07");
/// everything else is plain decimal ("123456", "0.0001").
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        return match v.is_sign_negative() {
            false => "+Inf".to_owned(),
            true => "-Inf".to_owned(),
        };
    }

    let scientific = format!("{:e}", v);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if exponent < -4 || exponent >= 6 {
        let sign = match exponent < 0 {
            false => '+',
            true => '-',
        };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }
    v.to_string()
}

/// Return the boolean interpretation of a string, or an error if the string
/// isn't one of the recognized spellings of true or false.
pub fn parse_bool(raw: &str) -> ValueResult<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::BadBoolean(raw.to_owned())),
    }
}
