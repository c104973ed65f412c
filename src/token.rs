// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::location::Location;

/// One lexical unit of a pattern.
///
/// The text is always a slice of the pattern that was tokenized:
///
/// - a literal run, e.g. `abc`
/// - a single meta character, e.g. `^`, `|`, `(`
/// - a bracket expression, e.g. `[a-z]`, `[[:alpha:]]`
/// - a brace quantifier, e.g. `{2,3}`
/// - a group header, e.g. `(?:`, `(?P<name>`
/// - an escape sequence, e.g. `\d`, `\x41`
/// - a marker, e.g. the `/gi` flags of a JavaScript literal or the `r'`
///   prefix of a Python raw string.
///
/// Markers describe the envelope around a pattern rather than the pattern
/// itself, so they are skipped when the token texts are joined back together.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a str,
    pub range: Location,
    pub marker: bool,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, range: Location) -> Self {
        Self {
            text,
            range,
            marker: false,
        }
    }

    pub fn new_marker(text: &'a str, range: Location) -> Self {
        Self {
            text,
            range,
            marker: true,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}
