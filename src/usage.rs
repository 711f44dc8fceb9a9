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

use crate::wrap::Wrapper;
use argset_values::value::{Kind, ScalarKind, Value};

/// Indent for usage text placed on its own line.
const INDENT: &str = "        ";
/// Separator for usage text placed on the same line as a very short describe
/// fragment.
const INDENT_SHORT: &str = "    ";

/// The hint shown for duration values.
pub const DURATION_HINT: &str = "formats: '1h2s', '-3.4ms', units: h, m, s, ms, us, ns";

/// Usable is anything which can be described in a usage statement. Positional
/// arguments implement this, and so can an external flag set's flags.
pub trait Usable {
    /// The name this item is referred to by.
    fn name(&self) -> &str;

    /// Freeform help text. A word enclosed in back-quotes is used as the
    /// item's kind in place of the one its value would otherwise get.
    fn usage(&self) -> &str;

    /// The item's default value, as captured when it was defined.
    fn default_value(&self) -> &str;

    /// The value bound to this item.
    fn value(&self) -> &dyn Value;

    /// Format how this item appears in an invocation, given its kind and hint
    /// (either of which may be empty), e.g. "<foo> (int)" or "-foo=<int>".
    fn describe(&self, kind: &str, hint: &str) -> String;
}

fn kind_from_scalar(kind: ScalarKind) -> (String, String) {
    let (kind, hint) = match kind {
        ScalarKind::Bool => ("", ""),
        ScalarKind::Float64 => ("float", ""),
        ScalarKind::String => ("string", ""),
        ScalarKind::Int | ScalarKind::Int64 => ("int", ""),
        ScalarKind::Uint | ScalarKind::Uint64 => ("uint", ""),
        ScalarKind::Duration => ("duration", DURATION_HINT),
    };
    (kind.to_owned(), hint.to_owned())
}

/// Returns the (kind, hint) pair used to describe the given value. Values
/// which implement `Hinter` describe themselves; otherwise this is derived
/// from the value's `Kind`. Lists are described the same way as the scalars
/// they contain.
pub fn kind_and_hint(value: &dyn Value) -> (String, String) {
    if let Some(hinter) = value.as_hinter() {
        return hinter.hint();
    }
    match value.kind() {
        Kind::Scalar(k) | Kind::List(k) => kind_from_scalar(k),
        Kind::Custom => (String::new(), String::new()),
    }
}

/// Look for a back-quoted name in the usable's help text. If there is one, it
/// is returned as the kind (with no hint), and the back-quotes are removed from
/// the returned usage text. Otherwise the kind and hint come from the value.
fn unquote_usage(usable: &dyn Usable) -> (String, String, String) {
    let usage = usable.usage();
    if let Some(start) = usage.find('`') {
        if let Some(len) = usage[start + 1..].find('`') {
            let end = start + 1 + len;
            let name = &usage[start + 1..end];
            let unquoted = format!("{}{}{}", &usage[..start], name, &usage[end + 1..]);
            return (unquoted, name.to_owned(), String::new());
        }
    }

    let (kind, hint) = kind_and_hint(usable.value());
    (usage.to_owned(), kind, hint)
}

/// Guess whether the given default value string is uninteresting enough to
/// leave out of the usage statement. This isn't exact: a default which happens
/// to format the same as the type's zero value is suppressed too.
fn is_zero_value(value: &dyn Value, default_value: &str) -> bool {
    if value.zero_string().map_or(false, |z| z == default_value) {
        return true;
    }
    match default_value {
        "false" | "" | "0" => true,
        _ => false,
    }
}

fn is_string_value(value: &dyn Value) -> bool {
    value.kind() == Kind::Scalar(ScalarKind::String)
}

/// Returns a block of text containing usage descriptions for the given
/// usables (e.g. positional arguments), one entry per usable in the order
/// given. Help text is wrapped to the given width, or to the default width if
/// it is zero.
pub fn usage(width: usize, usables: &[&dyn Usable]) -> String {
    let mut out = String::new();

    for usable in usables {
        let (mut help, kind, hint) = unquote_usage(*usable);
        let mut s = format!("  {}", usable.describe(kind.as_str(), hint.as_str()));

        let default_value = usable.default_value();
        let show_default = !is_zero_value(usable.value(), default_value);

        // Boolean flags of one ASCII letter are so common that their help goes
        // on the same line: two spaces, '-', 'x'.
        if s.len() <= 4 {
            s.push_str(INDENT_SHORT);
        } else if !help.is_empty() || show_default {
            s.push('\n');
            s.push_str(INDENT);
        }

        if show_default {
            match is_string_value(usable.value()) {
                true => help.push_str(format!(" (default: {:?})", default_value).as_str()),
                false => help.push_str(format!(" (default: {})", default_value).as_str()),
            }
        }

        s.push_str(Wrapper::new(INDENT, width).wrap(help.as_str()).as_str());
        out.push_str(s.as_str());
        out.push('\n');
    }

    out
}
