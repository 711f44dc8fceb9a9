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

use crate::args::ArgSet;
use crate::error::*;
use std::io::Write;

/// Print a program's help for the given args: a "Usage:" line built from the
/// args' invocation, then the args' usage block (unless it is empty or
/// hidden). If an error is given, it is printed last, so this is suitable for
/// responding to a failed `ArgSet::parse`.
///
/// If no writer is given, this does nothing.
pub fn print_usage<W: Write>(
    f: Option<&mut W>,
    program: &str,
    args: &ArgSet,
    error: Option<&Error>,
) -> Result<()> {
    let f = match f {
        None => return Ok(()),
        Some(f) => f,
    };

    let invocation = args.invocation();
    match invocation.is_empty() {
        true => f.write_fmt(format_args!("Usage: {}\n", program))?,
        false => f.write_fmt(format_args!("Usage: {} {}\n", program, invocation))?,
    }

    let usage = args.usage();
    if !usage.is_empty() {
        f.write_fmt(format_args!("\nArguments:\n{}", usage))?;
    }

    if let Some(error) = error {
        f.write_fmt(format_args!("\nerror: {}\n", error))?;
    }

    Ok(())
}

/// Identical to `print_usage`, but the output is returned as a string.
pub fn usage_string(program: &str, args: &ArgSet, error: Option<&Error>) -> String {
    let mut buf: Vec<u8> = vec![];
    // Writing to a Vec can't fail.
    if print_usage(Some(&mut buf), program, args, error).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(buf.as_slice()).into_owned()
}
