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

use thiserror::Error;

/// ValueError describes the ways in which setting a `Value` from a raw
/// command-line string can fail.
#[derive(Debug, Error)]
pub enum ValueError {
    /// A malformed boolean value was found.
    #[error("invalid boolean value '{0}'")]
    BadBoolean(String),
    /// A malformed floating point value was found.
    #[error("invalid float value '{0}'")]
    InvalidFloat(String),
    /// A malformed integer value was found.
    #[error("invalid integer value '{0}'")]
    InvalidInteger(String),
    /// A syntactically valid integer which doesn't fit in the target type.
    #[error("integer value '{0}' out of range")]
    IntegerOutOfRange(String),
    /// A malformed duration value was found.
    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration {
        /// The raw string we tried to parse.
        value: String,
        /// What exactly was wrong with it.
        reason: String,
    },
    /// A generic error, for use by custom `Value` implementations.
    #[error("{0}")]
    Invalid(String),
}

/// A Result type which uses ValueError.
pub type ValueResult<T> = Result<T, ValueError>;
