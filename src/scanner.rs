// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Closing delimiter scanners shared by all dialects.
//
// Each function takes the whole pattern and the byte index of an opening
// delimiter, and returns the byte index of the matching closing delimiter,
// or `None` when the pattern ends first.
//
// All delimiters are ASCII, so scanning bytes never stops in the middle of
// a multi-byte character.

/// Find the `]` that closes the bracket expression opened at `start`.
///
/// A `]` right after the opening `[` is a literal member, e.g. `[]abc]`,
/// and so is a `]` preceded by a backslash, e.g. `[\]]`.
pub fn find_closing_bracket(pattern: &str, start: usize) -> Option<usize> {
    let bytes = pattern.as_bytes();
    (start + 2..bytes.len()).find(|&idx| bytes[idx] == b']' && !is_escaped(bytes, idx))
}

/// Find the `}` that closes the brace quantifier opened at `start`.
pub fn find_closing_brace(pattern: &str, start: usize) -> Option<usize> {
    find_unescaped_byte(pattern, start + 1, b'}')
}

/// Find the `)` that closes the group opened at `start`, taking nested
/// groups into account. A character following a backslash is skipped.
pub fn find_closing_paren(pattern: &str, start: usize) -> Option<usize> {
    let bytes = pattern.as_bytes();
    let mut depth = 1;
    let mut idx = start + 1;

    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' if idx + 1 < bytes.len() => {
                // skip the escaped char
                idx += 1;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
        idx += 1;
    }

    None
}

/// Find the first `expected_byte` at or after `from` that is not escaped
/// by a backslash.
pub(crate) fn find_unescaped_byte(pattern: &str, from: usize, expected_byte: u8) -> Option<usize> {
    let bytes = pattern.as_bytes();
    (from..bytes.len()).find(|&idx| bytes[idx] == expected_byte && !is_escaped(bytes, idx))
}

/// A character is escaped when an odd number of backslashes precede it,
/// e.g. the `]` in `\]` but not the one in `\\]`.
fn is_escaped(bytes: &[u8], idx: usize) -> bool {
    let backslashes = bytes[..idx]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}

/// Find the `]` that closes a POSIX bracket expression opened at `start`.
///
/// Works like `find_closing_bracket`, except that the `[:name:]` class
/// markers inside the expression are stepped over as a whole, so the `]`
/// of a marker never closes the outer expression, e.g. `[[:alpha:]_]`.
pub(crate) fn find_closing_posix_bracket(pattern: &str, start: usize) -> Option<usize> {
    let bytes = pattern.as_bytes();
    let mut idx = start + 1;

    while idx < bytes.len() {
        if bytes[idx] == b'[' && bytes.get(idx + 1) == Some(&b':') {
            // `[:name:]`
            //  ^      ^__ continue after here
            //  |_________ current
            match pattern[idx + 2..].find(":]") {
                Some(offset) => {
                    idx += 2 + offset + 2;
                    continue;
                }
                None => return None,
            }
        }

        if bytes[idx] == b']' && idx != start + 1 && !is_escaped(bytes, idx) {
            return Some(idx);
        }

        idx += 1;
    }

    None
}
