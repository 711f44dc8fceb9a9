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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argset parses positional command-line arguments into typed variables, and
//! renders usage text describing them. Flags are left to some other parser;
//! argset only sees whatever inputs are left over once flags are gone.

/// args defines ArgSet, and the positional arguments it is made of.
pub mod args;
/// error defines the errors which parsing or printing help can produce.
pub mod error;
/// help prints complete usage information for a program's arguments.
pub mod help;
/// usage renders usage text for arguments, or for anything else implementing
/// `Usable`.
pub mod usage;
/// wrap provides ANSI-aware word wrapping for usage text.
pub mod wrap;

pub use argset_values as values;

pub use crate::args::{Arg, ArgSet, Range};
pub use crate::error::{Error, Result};
pub use argset_values::value::{Hinter, Kind, List, Scalar, ScalarKind, ScalarType, Value};

#[cfg(test)]
mod tests;
