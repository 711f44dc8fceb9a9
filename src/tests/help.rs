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

use crate::args::{ArgSet, Range};
use crate::help::*;

#[test]
fn test_usage_with_error() {
    let mut src = String::new();
    let mut dst: Vec<String> = vec![];
    let mut args = ArgSet::new();
    args.string(&mut src, "src", "Source file");
    args.remaining(&mut dst, "dst", Range::min(1), "Destinations");
    let err = args.parse(&["a"]).unwrap_err();

    assert_eq!(
        "Usage: cp <src> <dst...>

Arguments:
  <src> (string)
        Source file
  <dst...> (string)
        Destinations

error: expected at least 1 remaining args at position 2, found 0
",
        usage_string("cp", &args, Some(&err))
    );
}

#[test]
fn test_usage_without_args() {
    let args = ArgSet::new();
    assert_eq!("Usage: true\n", usage_string("true", &args, None));
}

#[test]
fn test_hidden_usage_skips_arguments() {
    let mut rest: Vec<String> = vec![];
    let mut args = ArgSet::all(&mut rest, "args", "Subcommand arguments");
    args.hide_usage();
    assert_eq!("Usage: run <args...>\n", usage_string("run", &args, None));
}

#[test]
fn test_print_usage_writer() {
    let mut foo = String::new();
    let mut args = ArgSet::new();
    args.string(&mut foo, "foo", "");

    let mut buf: Vec<u8> = vec![];
    print_usage(Some(&mut buf), "prog", &args, None).unwrap();
    assert_eq!(
        "Usage: prog <foo>\n\nArguments:\n  <foo> (string)\n",
        String::from_utf8(buf).unwrap()
    );

    assert!(print_usage::<Vec<u8>>(None, "prog", &args, None).is_ok());
}
