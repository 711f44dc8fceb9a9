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

use crate::args::arg::{Arg, Slot};
use crate::args::range::Range;
use crate::error::*;
use crate::usage::{self, Usable};
use argset_values::value::{List, Scalar, ScalarType, Value};
use chrono::Duration;
use log::{debug, trace};

/// ArgSet is an ordered set of positional argument definitions. Each arg is
/// bound to a variable owned by the caller; `parse` writes into those
/// variables, so the caller reads them back once the ArgSet is dropped.
///
/// Args are matched against inputs strictly left to right. Once an optional
/// arg has been defined, every arg defined after it is optional too. An ArgSet
/// may end with a single "remaining" arg, which collects all leftover inputs;
/// defining any arg after it is a programming error, and panics.
///
/// ```
/// use argset::args::{ArgSet, Range};
///
/// let mut src = String::new();
/// let mut dsts: Vec<String> = vec![];
/// {
///     let mut args = ArgSet::new();
///     args.string(&mut src, "src", "File to copy");
///     args.remaining(&mut dsts, "dst", Range::min(1), "Destinations");
///     assert_eq!("<src> <dst...>", args.invocation());
///     args.parse(&["a", "b", "c"]).unwrap();
/// }
/// assert_eq!("a", src);
/// assert_eq!(vec!["b", "c"], dsts);
/// ```
#[derive(Default)]
pub struct ArgSet<'a> {
    args: Vec<Arg<'a>>,
    optional: bool,
    hide_usage: bool,
}

impl<'a> ArgSet<'a> {
    /// Construct a new, empty ArgSet.
    pub fn new() -> Self {
        ArgSet::default()
    }

    /// Construct an ArgSet which collects all of its inputs, of which there
    /// may be any number, into the given list.
    pub fn all(into: &'a mut Vec<String>, name: &str, usage: &str) -> Self {
        let mut args = ArgSet::new();
        args.remaining(into, name, Range::ANY_LEN, usage);
        args
    }

    /// Prevent a usage string being built for this ArgSet. This is mostly
    /// useful for dynamic subcommand dispatch, to avoid spurious and redundant
    /// documentation for things like "<command> <args...>".
    pub fn hide_usage(&mut self) {
        self.hide_usage = true;
    }

    /// Returns the usage block for all of this set's args, or an empty string
    /// if `hide_usage` was called.
    pub fn usage(&self) -> String {
        if self.hide_usage {
            return String::new();
        }
        let usables: Vec<&dyn Usable> = self.args.iter().map(|a| -> &dyn Usable { a }).collect();
        usage::usage(0, usables.as_slice())
    }

    /// Returns an example invocation string, intended for display in the
    /// "Usage:" line of a command's help, e.g. "<foo> [<bar>] <baz...>".
    pub fn invocation(&self) -> String {
        let described: Vec<String> = self.args.iter().map(|a| a.describe("", "")).collect();
        described.join(" ")
    }

    /// Returns the number of args which have been defined. The remaining arg
    /// counts as one.
    pub fn nargs(&self) -> usize {
        self.args.len()
    }

    /// Returns an iterator over this set's args, in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arg<'a>> {
        self.args.iter()
    }

    fn has_remaining(&self) -> bool {
        self.args.last().map_or(false, |a| a.is_remaining())
    }

    fn push(&mut self, slot: Slot<'a>, name: &str, usage: &str) {
        assert!(
            !self.has_remaining(),
            "cannot add more arguments after accumulating remaining"
        );
        self.args.push(Arg::new(name, usage, slot, self.optional));
    }

    /// Parse the given inputs, setting each arg's value in turn.
    ///
    /// Each input is assigned to the earliest arg which doesn't have one yet;
    /// there is no lookahead. A missing input for a required arg, an input
    /// which fails to parse, a remaining arg whose input count is out of
    /// range, or any unconsumed inputs are all errors. Values set before an
    /// error was found keep their new values.
    pub fn parse<S: AsRef<str>>(&mut self, input: &[S]) -> Result<()> {
        let mut consumed: usize = 0;

        for (idx, arg) in self.args.iter_mut().enumerate() {
            let position = idx + 1;
            let optional = arg.is_optional();
            let describe = arg.describe("", "");

            match arg.slot_mut() {
                Slot::Remaining { value, range } => {
                    let left = input.get(idx..).unwrap_or(&[]);
                    if left.len() < range.min {
                        debug!("too few inputs for {}: {}", describe, left.len());
                        return Err(Error::TooFewRemaining {
                            min: range.min,
                            position: position,
                            found: left.len(),
                        });
                    }
                    if range.is_bounded() && left.len() > range.max {
                        debug!("too many inputs for {}: {}", describe, left.len());
                        return Err(Error::TooManyRemaining {
                            max: range.max,
                            position: position,
                            found: left.len(),
                        });
                    }
                    for (offset, raw) in left.iter().enumerate() {
                        set_value(&mut **value, raw.as_ref(), position + offset)?;
                        trace!("set {} from '{}'", describe, raw.as_ref());
                        consumed += 1;
                    }
                    // The remaining arg is always last.
                    break;
                }
                Slot::Single(value) => match input.get(idx) {
                    None => {
                        if !optional {
                            debug!("no input for required arg {}", describe);
                            return Err(Error::MissingArgument {
                                describe: describe,
                                position: position,
                            });
                        }
                    }
                    Some(raw) => {
                        set_value(&mut **value, raw.as_ref(), position)?;
                        trace!("set {} from '{}'", describe, raw.as_ref());
                    }
                },
            }
            consumed += 1;
        }

        if consumed < input.len() {
            debug!("{} of {} inputs were not consumed", input.len() - consumed, input.len());
            return Err(Error::ExtraArguments(input.len() - consumed));
        }
        Ok(())
    }

    /// Define an arg with the given name and usage text. The type and value
    /// of the arg are represented by the given Value; its current `Display`
    /// output is captured as the arg's default value.
    ///
    /// Panics if a remaining arg has already been defined.
    pub fn var<V: Value + 'a>(&mut self, value: V, name: &str, usage: &str) {
        self.push(Slot::Single(Box::new(value)), name, usage);
    }

    /// Define the remaining arg, which collects all inputs after the last
    /// defined arg by calling `set` once per input. The number of inputs it
    /// accepts is constrained by `range`; use `Range::ANY_LEN` for no limits.
    ///
    /// Panics if a remaining arg has already been defined. No further args may
    /// be defined after this one.
    pub fn remaining_var<V: Value + 'a>(
        &mut self,
        value: V,
        name: &str,
        range: Range,
        usage: &str,
    ) {
        debug!("defining remaining arg <{}> accepting {:?}", name, range);
        self.push(
            Slot::Remaining {
                value: Box::new(value),
                range: range,
            },
            name,
            usage,
        );
    }

    /// Define an arg bound to any of the built-in scalar types.
    pub fn scalar<T: ScalarType + 'a>(&mut self, p: &'a mut T, name: &str, usage: &str) {
        self.var(Scalar::new(p), name, usage);
    }

    /// Define an optional arg bound to any of the built-in scalar types. The
    /// bound variable is set to `default` immediately, and keeps that value if
    /// no input is given for it. All args defined after this one are optional
    /// too.
    pub fn scalar_optional<T: ScalarType + 'a>(
        &mut self,
        p: &'a mut T,
        name: &str,
        default: T,
        usage: &str,
    ) {
        self.optional = true;
        *p = default;
        self.scalar(p, name, usage);
    }

    /// Define the remaining arg, bound to a list of any of the built-in scalar
    /// types.
    pub fn list<T: ScalarType + 'a>(
        &mut self,
        p: &'a mut Vec<T>,
        name: &str,
        range: Range,
        usage: &str,
    ) {
        self.remaining_var(List::new(p), name, range, usage);
    }

    /// Define a string arg.
    pub fn string(&mut self, p: &'a mut String, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional string arg. See `scalar_optional`.
    pub fn string_optional(&mut self, p: &'a mut String, name: &str, default: &str, usage: &str) {
        self.scalar_optional(p, name, default.to_owned(), usage);
    }

    /// Define an int arg. Integers may be given in decimal, or in hex, octal or
    /// binary with the usual "0x", "0o" (or a bare leading "0") and "0b"
    /// prefixes.
    pub fn int(&mut self, p: &'a mut isize, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional int arg. See `scalar_optional`.
    pub fn int_optional(&mut self, p: &'a mut isize, name: &str, default: isize, usage: &str) {
        self.scalar_optional(p, name, default, usage);
    }

    /// Define an int64 arg.
    pub fn int64(&mut self, p: &'a mut i64, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional int64 arg. See `scalar_optional`.
    pub fn int64_optional(&mut self, p: &'a mut i64, name: &str, default: i64, usage: &str) {
        self.scalar_optional(p, name, default, usage);
    }

    /// Define a uint arg.
    pub fn uint(&mut self, p: &'a mut usize, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional uint arg. See `scalar_optional`.
    pub fn uint_optional(&mut self, p: &'a mut usize, name: &str, default: usize, usage: &str) {
        self.scalar_optional(p, name, default, usage);
    }

    /// Define a uint64 arg.
    pub fn uint64(&mut self, p: &'a mut u64, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional uint64 arg. See `scalar_optional`.
    pub fn uint64_optional(&mut self, p: &'a mut u64, name: &str, default: u64, usage: &str) {
        self.scalar_optional(p, name, default, usage);
    }

    /// Define a float64 arg.
    pub fn float64(&mut self, p: &'a mut f64, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional float64 arg. See `scalar_optional`.
    pub fn float64_optional(&mut self, p: &'a mut f64, name: &str, default: f64, usage: &str) {
        self.scalar_optional(p, name, default, usage);
    }

    /// Define a bool arg.
    pub fn bool(&mut self, p: &'a mut bool, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional bool arg. See `scalar_optional`.
    pub fn bool_optional(&mut self, p: &'a mut bool, name: &str, default: bool, usage: &str) {
        self.scalar_optional(p, name, default, usage);
    }

    /// Define a duration arg, accepting inputs like "1h2s" or "-3.4ms".
    pub fn duration(&mut self, p: &'a mut Duration, name: &str, usage: &str) {
        self.scalar(p, name, usage);
    }

    /// Define an optional duration arg. See `scalar_optional`.
    pub fn duration_optional(
        &mut self,
        p: &'a mut Duration,
        name: &str,
        default: Duration,
        usage: &str,
    ) {
        self.scalar_optional(p, name, default, usage);
    }

    /// Collect all inputs after the last defined arg into a list of strings.
    /// See `remaining_var`.
    pub fn remaining(&mut self, p: &'a mut Vec<String>, name: &str, range: Range, usage: &str) {
        self.list(p, name, range, usage);
    }

    /// Collect all remaining inputs into a list of ints.
    pub fn remaining_ints(&mut self, p: &'a mut Vec<isize>, name: &str, range: Range, usage: &str) {
        self.list(p, name, range, usage);
    }

    /// Collect all remaining inputs into a list of int64s.
    pub fn remaining_int64s(&mut self, p: &'a mut Vec<i64>, name: &str, range: Range, usage: &str) {
        self.list(p, name, range, usage);
    }

    /// Collect all remaining inputs into a list of uints.
    pub fn remaining_uints(&mut self, p: &'a mut Vec<usize>, name: &str, range: Range, usage: &str) {
        self.list(p, name, range, usage);
    }

    /// Collect all remaining inputs into a list of uint64s.
    pub fn remaining_uint64s(&mut self, p: &'a mut Vec<u64>, name: &str, range: Range, usage: &str) {
        self.list(p, name, range, usage);
    }

    /// Collect all remaining inputs into a list of float64s.
    pub fn remaining_float64s(&mut self, p: &'a mut Vec<f64>, name: &str, range: Range, usage: &str) {
        self.list(p, name, range, usage);
    }

    /// Collect all remaining inputs into a list of bools.
    pub fn remaining_bools(&mut self, p: &'a mut Vec<bool>, name: &str, range: Range, usage: &str) {
        self.list(p, name, range, usage);
    }

    /// Collect all remaining inputs into a list of durations.
    pub fn remaining_durations(
        &mut self,
        p: &'a mut Vec<Duration>,
        name: &str,
        range: Range,
        usage: &str,
    ) {
        self.list(p, name, range, usage);
    }
}

fn set_value(value: &mut dyn Value, raw: &str, position: usize) -> Result<()> {
    value.set(raw).map_err(|e| {
        debug!("invalid input '{}' at position {}: {}", raw, position, e);
        Error::InvalidArgument {
            position: position,
            source: e,
        }
    })
}
