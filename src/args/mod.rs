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

/// arg defines a single positional argument.
pub mod arg;
/// range defines the allowed number of inputs for a remaining argument.
pub mod range;
/// set defines ArgSet, an ordered set of positional arguments.
pub mod set;

// Re-export most commonly used symbols, to allow using this module with just
// one "use".

pub use self::arg::Arg;
pub use self::range::Range;
pub use self::set::ArgSet;
