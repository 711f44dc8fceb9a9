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

//! argset-values defines the `Value` trait which positional arguments are
//! bound through, along with the built-in scalar and list implementations and
//! the string parsers they use.

/// duration parses and formats signed, unit-suffixed durations like "1h2s".
pub mod duration;
/// error defines the errors which can occur while setting a value.
pub mod error;
/// parse contains the string parsers for the built-in numeric and boolean
/// types, and the float formatter.
pub mod parse;
/// value defines the `Value` and `Hinter` traits, and the built-in values.
pub mod value;

#[cfg(test)]
mod tests;
