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

use crate::args::{ArgSet, Range};
use crate::usage::*;
use argset_values::error::ValueResult;
use argset_values::value::{Hinter, Scalar, Value};
use chrono::Duration;
use std::fmt;

struct HintVar<'a> {
    value: &'a mut String,
    kind: &'static str,
    hint: &'static str,
}

impl<'a> HintVar<'a> {
    fn new(value: &'a mut String, kind: &'static str, hint: &'static str) -> Self {
        HintVar {
            value: value,
            kind: kind,
            hint: hint,
        }
    }
}

impl<'a> fmt::Display for HintVar<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.value.as_str())
    }
}

impl<'a> Hinter for HintVar<'a> {
    fn hint(&self) -> (String, String) {
        (self.kind.to_owned(), self.hint.to_owned())
    }
}

impl<'a> Value for HintVar<'a> {
    fn set(&mut self, raw: &str) -> ValueResult<()> {
        *self.value = raw.to_owned();
        Ok(())
    }

    fn as_hinter(&self) -> Option<&dyn Hinter> {
        Some(self)
    }
}

const EXPECTED_HINTABLE_USAGE: &str = "  <hintonly> hint
        hint only
  <kindonly> (kind)
        kind only
  <hintboth> (kind) hint
        hint both
  <hintnone>
        hint none
";

#[test]
fn test_hintable_usage() {
    let mut hint_only = String::new();
    let mut kind_only = String::new();
    let mut hint_both = String::new();
    let mut hint_none = String::new();

    let mut args = ArgSet::new();
    args.var(HintVar::new(&mut hint_only, "", "hint"), "hintonly", "hint only");
    args.var(HintVar::new(&mut kind_only, "kind", ""), "kindonly", "kind only");
    args.var(HintVar::new(&mut hint_both, "kind", "hint"), "hintboth", "hint both");
    args.var(HintVar::new(&mut hint_none, "", ""), "hintnone", "hint none");

    assert_eq!(EXPECTED_HINTABLE_USAGE, args.usage());
    // Rendering doesn't change anything, so doing it twice is identical.
    assert_eq!(args.usage(), args.usage());
}

#[test]
fn test_default_suppression() {
    let mut verbose = false;
    let mut count: isize = 0;
    let mut answer = String::new();

    let mut args = ArgSet::new();
    args.bool(&mut verbose, "verbose", "Be loud");
    args.int(&mut count, "count", "How many");
    args.string_optional(&mut answer, "answer", "yep", "The answer");

    assert_eq!(
        "  <verbose>
        Be loud
  <count> (int)
        How many
  [<answer>] (string)
        The answer (default: \"yep\")
",
        args.usage()
    );
}

#[test]
fn test_non_string_defaults_are_unquoted() {
    let mut count: u64 = 0;
    let mut loud = false;
    let mut ratio: f64 = 0.0;

    let mut args = ArgSet::new();
    args.uint64_optional(&mut count, "count", 7, "How many");
    args.bool_optional(&mut loud, "loud", true, "");
    args.float64_optional(&mut ratio, "ratio", 0.0, "");

    assert_eq!(
        "  [<count>] (uint)
        How many (default: 7)
  [<loud>]
        (default: true)
  [<ratio>] (float)
",
        args.usage()
    );
}

#[test]
fn test_duration_and_list_kinds() {
    let mut timeout = Duration::zero();
    let mut nums: Vec<i64> = vec![];

    let mut args = ArgSet::new();
    args.duration(&mut timeout, "timeout", "How long to wait");
    args.remaining_int64s(&mut nums, "nums", Range::ANY_LEN, "Some numbers");

    assert_eq!(
        format!(
            "  <timeout> (duration) {}
        How long to wait
  <nums...> (int)
        Some numbers
",
            DURATION_HINT
        ),
        args.usage()
    );
}

#[test]
fn test_back_quoted_kind() {
    let mut path = String::new();
    let mut args = ArgSet::new();
    args.string(&mut path, "path", "A `file` to read");
    assert_eq!("  <path> (file)\n        A file to read\n", args.usage());
}

#[test]
fn test_hidden_usage() {
    let mut rest: Vec<String> = vec![];
    let mut args = ArgSet::all(&mut rest, "args", "Arguments for the subcommand");
    assert!(!args.usage().is_empty());
    args.hide_usage();
    assert_eq!("", args.usage());
    assert_eq!("<args...>", args.invocation());
}

#[test]
fn test_long_usage_wraps() {
    let mut foo = String::new();
    let mut args = ArgSet::new();
    args.string(
        &mut foo,
        "foo",
        "This usage text is long enough that it needs to be wrapped onto a second line of output",
    );
    assert_eq!(
        "  <foo> (string)
        This usage text is long enough that it needs to be wrapped onto a second line
        of output
",
        args.usage()
    );
}

struct ShortFlag<'a> {
    name: &'static str,
    usage: &'static str,
    default_value: String,
    value: Scalar<'a, bool>,
}

impl<'a> ShortFlag<'a> {
    fn new(value: &'a mut bool, name: &'static str, usage: &'static str) -> Self {
        let value = Scalar::new(value);
        ShortFlag {
            name: name,
            usage: usage,
            default_value: value.to_string(),
            value: value,
        }
    }
}

impl<'a> Usable for ShortFlag<'a> {
    fn name(&self) -> &str {
        self.name
    }

    fn usage(&self) -> &str {
        self.usage
    }

    fn default_value(&self) -> &str {
        self.default_value.as_str()
    }

    fn value(&self) -> &dyn Value {
        &self.value
    }

    fn describe(&self, kind: &str, _hint: &str) -> String {
        match kind.is_empty() {
            true => format!("-{}", self.name),
            false => format!("-{}=<{}>", self.name, kind),
        }
    }
}

#[test]
fn test_short_describe_on_same_line() {
    let mut v = false;
    let mut verbose = false;
    let mut d = true;
    let short = ShortFlag::new(&mut v, "v", "Verbose output");
    let long = ShortFlag::new(&mut verbose, "verbose", "Verbose output");
    let defaulted = ShortFlag::new(&mut d, "d", "Debug");
    let usables: [&dyn Usable; 3] = [&short, &long, &defaulted];
    assert_eq!(
        "  -v    Verbose output
  -verbose
        Verbose output
  -d    Debug (default: true)
",
        usage(0, &usables)
    );
}

#[test]
fn test_kind_and_hint() {
    let mut s = String::new();
    let mut b = false;
    let mut u: usize = 0;
    let mut ds: Vec<Duration> = vec![];
    let mut custom = String::new();
    assert_eq!(
        ("string".to_owned(), String::new()),
        kind_and_hint(&Scalar::new(&mut s))
    );
    assert_eq!((String::new(), String::new()), kind_and_hint(&Scalar::new(&mut b)));
    assert_eq!(("uint".to_owned(), String::new()), kind_and_hint(&Scalar::new(&mut u)));
    assert_eq!(
        ("duration".to_owned(), DURATION_HINT.to_owned()),
        kind_and_hint(&argset_values::value::List::new(&mut ds))
    );
    assert_eq!(
        ("k".to_owned(), "h".to_owned()),
        kind_and_hint(&HintVar::new(&mut custom, "k", "h"))
    );
}

#[test]
fn test_float_default_uses_exponent() {
    let mut big: f64 = 0.0;
    let mut args = ArgSet::new();
    args.float64_optional(&mut big, "big", 1e21, "A big number");
    assert_eq!(
        "  [<big>] (float)\n        A big number (default: 1e+21)\n",
        args.usage()
    );
}
