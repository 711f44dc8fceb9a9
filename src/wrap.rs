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

use unicode_width::UnicodeWidthChar;

/// The width text is wrapped to if no (or a zero) width is configured.
pub const DEFAULT_WIDTH: usize = 80;

const ESCAPE: char = '\x1b';

/// Wrapper word-wraps text, breaking lines only at spaces or hyphens. Width is
/// measured in terminal columns, so wide characters count double, and ANSI
/// color sequences (ESC ... 'm') are not counted at all.
#[derive(Clone, Debug, Default)]
pub struct Wrapper<'a> {
    /// Written at the start of every continuation line.
    pub indent: &'a str,
    /// Whether the first line should be indented as well.
    pub indent_first: bool,
    /// The maximum number of columns per line, not including the indent.
    /// Zero means DEFAULT_WIDTH.
    pub width: usize,
    /// Written at the end of every line which breaks. Defaults to "\n".
    pub wrap_with: &'a str,
}

impl<'a> Wrapper<'a> {
    /// Construct a Wrapper with the given continuation indent and width.
    pub fn new(indent: &'a str, width: usize) -> Self {
        Wrapper {
            indent: indent,
            width: width,
            ..Default::default()
        }
    }

    /// Returns the byte index of the first visible character in line which
    /// would extend it past width columns, or None if the whole line fits.
    /// Escape sequences take up no columns, wherever they appear.
    fn overflow_index(line: &str, width: usize) -> Option<usize> {
        let mut visible: usize = 0;
        let mut in_escape = false;
        for (idx, c) in line.char_indices() {
            if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
                continue;
            }
            if c == ESCAPE {
                in_escape = true;
                continue;
            }

            let w = c.width().unwrap_or(0);
            if visible + w > width {
                return Some(idx);
            }
            visible += w;
        }
        None
    }

    /// Wrap the given string. Leading and trailing whitespace is trimmed, and
    /// existing newlines are preserved (each continuation gets the indent).
    pub fn wrap(&self, s: &str) -> String {
        let width = match self.width {
            0 => DEFAULT_WIDTH,
            w => w,
        };
        let mut separator = match self.wrap_with {
            "" => "\n".to_owned(),
            w => w.to_owned(),
        };
        separator.push_str(self.indent);

        let mut out = String::new();
        if self.indent_first {
            out.push_str(self.indent);
        }

        for (line_idx, line) in s.trim().split('\n').enumerate() {
            if line_idx > 0 {
                out.push_str(separator.as_str());
            }

            let mut line = line;
            loop {
                let break_idx = Self::overflow_index(line, width)
                    .and_then(|end| line[..end].rfind(|c: char| c == ' ' || c == '-'));
                match break_idx {
                    None => {
                        out.push_str(line);
                        break;
                    }
                    Some(idx) => {
                        // Hyphens stay on the line they end; spaces are dropped.
                        match line[idx..].starts_with('-') {
                            true => out.push_str(&line[..=idx]),
                            false => out.push_str(&line[..idx]),
                        }
                        line = &line[idx + 1..];
                        out.push_str(separator.as_str());
                    }
                }
            }
        }

        out
    }
}
