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

use argset_values::error::ValueError;
use thiserror::Error;

fn arg_noun(count: &usize) -> &'static str {
    match *count {
        1 => "arg",
        _ => "args",
    }
}

/// Error represents the various errors which can come up while parsing
/// positional command-line arguments. Aside from I/O errors, these are all the
/// user's fault (bad input), so callers generally want to respond by printing
/// usage information.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument had no corresponding input.
    #[error("missing arg {describe} at position {position}")]
    MissingArgument {
        /// How the argument is described in an invocation, e.g. "<foo>".
        describe: String,
        /// The 1-based position the argument was expected at.
        position: usize,
    },
    /// An argument's input could not be parsed into its value.
    #[error("arg invalid at position {position}: {source}")]
    InvalidArgument {
        /// The 1-based position of the invalid input.
        position: usize,
        /// Why the input was invalid.
        source: ValueError,
    },
    /// There were fewer inputs left over than the remaining arg requires.
    #[error("expected at least {min} remaining args at position {position}, found {found}")]
    TooFewRemaining {
        /// The smallest number of remaining inputs allowed.
        min: usize,
        /// The 1-based position of the remaining arg.
        position: usize,
        /// How many inputs were actually left.
        found: usize,
    },
    /// There were more inputs left over than the remaining arg allows.
    #[error("expected at most {max} remaining args at position {position}, found {found}")]
    TooManyRemaining {
        /// The largest number of remaining inputs allowed.
        max: usize,
        /// The 1-based position of the remaining arg.
        position: usize,
        /// How many inputs were actually left.
        found: usize,
    },
    /// More inputs were given than there were args to consume them.
    #[error("found {0} additional {}", arg_noun(.0))]
    ExtraArguments(usize),
    /// An I/O error, generally encountered while writing help output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// A Result type which uses argset's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
