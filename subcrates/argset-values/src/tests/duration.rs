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

use crate::duration::*;
use crate::error::ValueError;
use chrono::Duration;

#[test]
fn test_parse_duration() {
    let test_cases: Vec<(&'static str, i64)> = vec![
        ("0", 0),
        ("-0", 0),
        ("5s", 5_000_000_000),
        ("+5s", 5_000_000_000),
        ("1h2s", 3_602_000_000_000),
        ("2h45m", 9_900_000_000_000),
        ("-3.4ms", -3_400_000),
        ("1.5h", 5_400_000_000_000),
        (".5s", 500_000_000),
        ("1.s", 1_000_000_000),
        ("100ns", 100),
        ("3us", 3_000),
        ("3\u{00b5}s", 3_000),
        ("3\u{03bc}s", 3_000),
        ("1m0.25s", 60_250_000_000),
        ("9223372036854775807ns", i64::MAX),
        ("-9223372036854775808ns", i64::MIN),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            Duration::nanoseconds(expected),
            parse_duration(input).unwrap(),
            "input {}",
            input
        );
    }
}

#[test]
fn test_parse_duration_invalid() {
    for input in &[
        "",
        "-",
        "s",
        "5",
        ".s",
        "1x",
        "1h-2m",
        "quack",
        "9223372036854775808ns",
        "3000000h",
    ] {
        match parse_duration(input) {
            Err(ValueError::InvalidDuration { value, .. }) => assert_eq!(*input, value),
            r => panic!("expected invalid duration for '{}', got {:?}", input, r),
        }
    }
}

#[test]
fn test_format_duration() {
    let test_cases: Vec<(i64, &'static str)> = vec![
        (0, "0s"),
        (1, "1ns"),
        (1_100, "1.1\u{00b5}s"),
        (2_200_000, "2.2ms"),
        (-3_400_000, "-3.4ms"),
        (3_300_000_000, "3.3s"),
        (60_000_000_000, "1m0s"),
        (4_500_000_000_000, "1h15m0s"),
        (3_602_000_000_000, "1h0m2s"),
        (-3_602_000_000_000, "-1h0m2s"),
        (5_000_500_000, "5.0005s"),
    ];

    for (nanos, expected) in test_cases {
        assert_eq!(expected, format_duration(&Duration::nanoseconds(nanos)));
    }
}

#[test]
fn test_format_parses_back() {
    for input in &["1h2m3.5s", "-3.4ms", "1.1\u{00b5}s", "0s", "100ns"] {
        let d = parse_duration(input).unwrap();
        assert_eq!(*input, format_duration(&d));
    }
}
