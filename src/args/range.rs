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

/// Describes how many inputs a remaining arg may accept, inclusive at both
/// ends.
///
/// ```
/// use argset::args::Range;
///
/// assert!(Range::min(2).contains(5));
/// assert!(!Range::max(2).contains(3));
/// assert!(Range::min_max(1, 3).contains(1));
/// assert!(Range::ANY_LEN.contains(0));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Range {
    /// The fewest inputs allowed.
    pub min: usize,
    /// The most inputs allowed, or UNLIMITED for no limit.
    pub max: usize,
}

impl Range {
    /// A sentinel value used for `max` to indicate there is no upper bound.
    pub const UNLIMITED: usize = usize::MAX;

    /// Allows any number of inputs, including zero.
    pub const ANY_LEN: Range = Range {
        min: 0,
        max: Range::UNLIMITED,
    };

    /// Requires at least `min` inputs.
    pub fn min(min: usize) -> Range {
        Range {
            min: min,
            max: Range::UNLIMITED,
        }
    }

    /// Allows at most `max` inputs.
    pub fn max(max: usize) -> Range {
        Range { min: 0, max: max }
    }

    /// Requires between `min` and `max` inputs, inclusive.
    pub fn min_max(min: usize, max: usize) -> Range {
        Range { min: min, max: max }
    }

    /// Returns true if this Range has an upper bound.
    pub fn is_bounded(&self) -> bool {
        self.max != Range::UNLIMITED
    }

    /// Returns whether the given number of inputs satisfies this Range.
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && (!self.is_bounded() || count <= self.max)
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::ANY_LEN
    }
}
