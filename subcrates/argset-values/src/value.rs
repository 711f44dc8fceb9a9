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

use crate::duration::{format_duration, parse_duration};
use crate::error::*;
use crate::parse::{format_float, parse_bool, parse_float, parse_integer};
use chrono::Duration;
use std::convert::TryFrom;
use std::fmt;

/// ScalarKind identifies one of the built-in scalar value types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    /// A freeform string.
    String,
    /// A platform-sized signed integer.
    Int,
    /// A 64-bit signed integer.
    Int64,
    /// A platform-sized unsigned integer.
    Uint,
    /// A 64-bit unsigned integer.
    Uint64,
    /// A 64-bit float.
    Float64,
    /// A boolean.
    Bool,
    /// A signed duration, with nanosecond precision.
    Duration,
}

/// Kind describes the underlying type of a `Value`. This is what usage
/// rendering uses to decide how to describe a value which doesn't provide its
/// own `Hinter`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// A single built-in scalar.
    Scalar(ScalarKind),
    /// A list which accumulates built-in scalars, one per `set` call.
    List(ScalarKind),
    /// Some user-defined type.
    Custom,
}

/// Hinter lets a `Value` customize how it is described in usage output. The
/// returned pair is (kind, hint); either may be empty to omit that part.
pub trait Hinter {
    /// Returns this value's (kind, hint) pair.
    fn hint(&self) -> (String, String);
}

/// Value is something which can be bound to a command-line argument. Its
/// `Display` implementation is used to capture default values, and `set` is
/// called with each raw string the argument receives.
pub trait Value: fmt::Display {
    /// Update this value from the given raw command-line string.
    fn set(&mut self, raw: &str) -> ValueResult<()>;

    /// The underlying type of this value.
    fn kind(&self) -> Kind {
        Kind::Custom
    }

    /// What this value's type displays as when freshly constructed, if that is
    /// known. This is used to avoid printing uninteresting default values.
    fn zero_string(&self) -> Option<String> {
        None
    }

    /// If this value implements `Hinter`, return it. Implementations which
    /// provide their own hints should override this to return `Some(self)`.
    fn as_hinter(&self) -> Option<&dyn Hinter> {
        None
    }
}

/// ScalarType is implemented for each of the built-in types which can be bound
/// to an argument, either alone or accumulated into a list.
pub trait ScalarType: Sized {
    /// Which built-in type this is.
    const KIND: ScalarKind;

    /// Parse a raw command-line string into this type.
    fn parse(raw: &str) -> ValueResult<Self>;

    /// Format this value for display.
    fn format(&self) -> String;

    /// The type's zero value.
    fn zero() -> Self;
}

impl ScalarType for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn parse(raw: &str) -> ValueResult<Self> {
        Ok(raw.to_owned())
    }

    fn format(&self) -> String {
        self.clone()
    }

    fn zero() -> Self {
        String::new()
    }
}

macro_rules! integer_scalar_type {
    ($t:ty, $kind:expr, $signed:expr) => {
        impl ScalarType for $t {
            const KIND: ScalarKind = $kind;

            fn parse(raw: &str) -> ValueResult<Self> {
                let v = parse_integer(raw, $signed)?;
                <$t>::try_from(v).map_err(|_| ValueError::IntegerOutOfRange(raw.to_owned()))
            }

            fn format(&self) -> String {
                self.to_string()
            }

            fn zero() -> Self {
                0
            }
        }
    };
}

integer_scalar_type!(isize, ScalarKind::Int, true);
integer_scalar_type!(i64, ScalarKind::Int64, true);
integer_scalar_type!(usize, ScalarKind::Uint, false);
integer_scalar_type!(u64, ScalarKind::Uint64, false);

impl ScalarType for f64 {
    const KIND: ScalarKind = ScalarKind::Float64;

    fn parse(raw: &str) -> ValueResult<Self> {
        parse_float(raw)
    }

    fn format(&self) -> String {
        format_float(*self)
    }

    fn zero() -> Self {
        0.0
    }
}

impl ScalarType for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn parse(raw: &str) -> ValueResult<Self> {
        parse_bool(raw)
    }

    fn format(&self) -> String {
        self.to_string()
    }

    fn zero() -> Self {
        false
    }
}

impl ScalarType for Duration {
    const KIND: ScalarKind = ScalarKind::Duration;

    fn parse(raw: &str) -> ValueResult<Self> {
        parse_duration(raw)
    }

    fn format(&self) -> String {
        format_duration(self)
    }

    fn zero() -> Self {
        Duration::zero()
    }
}

/// Scalar binds a single built-in value to an argument. Each `set` overwrites
/// the bound variable.
pub struct Scalar<'a, T: ScalarType>(&'a mut T);

impl<'a, T: ScalarType> Scalar<'a, T> {
    /// Bind the given variable.
    pub fn new(value: &'a mut T) -> Self {
        Scalar(value)
    }
}

impl<'a, T: ScalarType> fmt::Display for Scalar<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0.format().as_str())
    }
}

impl<'a, T: ScalarType> Value for Scalar<'a, T> {
    fn set(&mut self, raw: &str) -> ValueResult<()> {
        *self.0 = T::parse(raw)?;
        Ok(())
    }

    fn kind(&self) -> Kind {
        Kind::Scalar(T::KIND)
    }

    fn zero_string(&self) -> Option<String> {
        Some(T::zero().format())
    }
}

/// List binds a list of built-in values to an argument. Each `set` appends to
/// the bound list; a value which fails to parse leaves the list unchanged.
pub struct List<'a, T: ScalarType>(&'a mut Vec<T>);

impl<'a, T: ScalarType> List<'a, T> {
    /// Bind the given list.
    pub fn new(values: &'a mut Vec<T>) -> Self {
        List(values)
    }
}

impl<'a, T: ScalarType> fmt::Display for List<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted: Vec<String> = self.0.iter().map(|v| v.format()).collect();
        f.write_str(formatted.join(",").as_str())
    }
}

impl<'a, T: ScalarType> Value for List<'a, T> {
    fn set(&mut self, raw: &str) -> ValueResult<()> {
        self.0.push(T::parse(raw)?);
        Ok(())
    }

    fn kind(&self) -> Kind {
        Kind::List(T::KIND)
    }

    fn zero_string(&self) -> Option<String> {
        Some(String::new())
    }
}
