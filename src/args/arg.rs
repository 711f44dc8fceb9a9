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

use crate::args::range::Range;
use crate::usage::Usable;
use argset_values::value::Value;

/// Slot is where an Arg's inputs end up.
pub(crate) enum Slot<'a> {
    /// A single input is set on the value.
    Single(Box<dyn Value + 'a>),
    /// Every input left over after all other args have been satisfied is set
    /// on the value, in order.
    Remaining {
        value: Box<dyn Value + 'a>,
        range: Range,
    },
}

/// Arg is a single declared positional argument.
pub struct Arg<'a> {
    name: String,
    usage: String,
    slot: Slot<'a>,
    default_value: String,
    optional: bool,
}

impl<'a> Arg<'a> {
    pub(crate) fn new(name: &str, usage: &str, slot: Slot<'a>, optional: bool) -> Self {
        let default_value = match slot {
            Slot::Single(ref value) => value.to_string(),
            Slot::Remaining { ref value, .. } => value.to_string(),
        };
        Arg {
            name: name.to_owned(),
            usage: usage.to_owned(),
            slot: slot,
            default_value: default_value,
            optional: optional,
        }
    }

    /// Returns true if this arg was defined after the first optional arg. A
    /// missing input for an optional arg is not an error; the arg just keeps
    /// its default value.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns true if this is the "remaining" arg, which collects all of the
    /// inputs after the other args.
    pub fn is_remaining(&self) -> bool {
        match self.slot {
            Slot::Remaining { .. } => true,
            Slot::Single(_) => false,
        }
    }

    /// Returns the allowed number of inputs, if this is a remaining arg.
    pub fn range(&self) -> Option<Range> {
        match self.slot {
            Slot::Remaining { range, .. } => Some(range),
            Slot::Single(_) => None,
        }
    }

    pub(crate) fn slot_mut(&mut self) -> &mut Slot<'a> {
        &mut self.slot
    }
}

impl<'a> Usable for Arg<'a> {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn usage(&self) -> &str {
        self.usage.as_str()
    }

    fn default_value(&self) -> &str {
        self.default_value.as_str()
    }

    fn value(&self) -> &dyn Value {
        match self.slot {
            Slot::Single(ref value) => &**value,
            Slot::Remaining { ref value, .. } => &**value,
        }
    }

    /// Args are described as "<name>", "<name...>" for the remaining arg, or
    /// "[<name>]" for optional args, followed by the kind and hint if given.
    fn describe(&self, kind: &str, hint: &str) -> String {
        let mut s = match (self.is_remaining(), self.optional) {
            (true, _) => format!("<{}...>", self.name),
            (false, true) => format!("[<{}>]", self.name),
            (false, false) => format!("<{}>", self.name),
        };
        if !kind.is_empty() {
            s.push_str(format!(" ({})", kind).as_str());
        }
        if !hint.is_empty() {
            s.push(' ');
            s.push_str(hint);
        }
        s
    }
}
