// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The Python `re` dialect.
//
// A pattern may start with the raw string prefix `r"` (or `r'`, `R"`, `R'`),
// which becomes a marker token, and then with an inline flags group
// such as `(?im)`, which becomes a regular token.
//
// group headers:
//
// - (?:        non-capturing group
// - (?= (?!    lookahead
// - (?<= (?<!  lookbehind
// - (?<name>  (?P<name>
//              named capturing group
// - (?P=name)  named back reference, the whole group is one token
//
// quantifiers take an optional lazy suffix `?`, e.g. `a*?`.
//
// escape sequences with an argument:
//
// - \xHH        up to 2 hex digits
// - \uHHHH      exactly 4 hex digits
// - \UHHHHHHHH  exactly 8 hex digits
// - \N{name}    unicode character name
// - \g<name>    named group reference

use crate::{
    explain::{
        escape_argument, escape_hex_digits, escaped_char, explain_backreference,
        explain_charset, explain_escaped_literal, explain_flags, explain_group_header,
        explain_literal, explain_metachar, explain_named_group, explain_quantifier,
        explain_repetition, QuantifierStyle,
    },
    lexer::Lexer,
    scanner::find_closing_paren,
    token::Token,
};

const GROUP_HEADERS: [&str; 5] = ["(?:", "(?=", "(?!", "(?<=", "(?<!"];
const NAMED_GROUP_PREFIXES: [&str; 2] = ["(?P<", "(?<"];

const FLAG_LETTERS: &[u8] = b"aiLmsux";
const RAW_STRING_PREFIXES: [&str; 4] = ["r\"", "r'", "R\"", "R'"];

pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(pattern);

    if RAW_STRING_PREFIXES
        .iter()
        .any(|prefix| lexer.starts_with(prefix))
    {
        log::debug!("raw string prefix \"{}\"", &pattern[..2]);
        lexer.push_marker(2);
    }

    lex_inline_flags(&mut lexer);

    while let Some(current) = lexer.peek_byte(0) {
        match current {
            b'[' => lexer.lex_charset(),
            b'\\' if lexer.peek_byte(1).is_some() => lex_escaping(&mut lexer),
            b'{' => lexer.lex_repetition(),
            b'*' | b'+' | b'?' => lexer.lex_quantifier(Some(b'?')),
            b'(' => lex_group_header(&mut lexer),
            b')' | b'|' | b'^' | b'$' | b'.' => lexer.push_span(1),
            _ => lexer.push_literal_char(),
        }
    }

    lexer.finish()
}

fn lex_inline_flags(lexer: &mut Lexer) {
    // (?aiLmsux)  //
    // ^        ^__// close
    // |___________// current char

    if !lexer.starts_with("(?") {
        return;
    }

    let start = lexer.index();
    let Some(close) = find_closing_paren(lexer.source(), start) else {
        return;
    };

    let letters = &lexer.source().as_bytes()[start + 2..close];
    if !letters.is_empty() && letters.iter().all(|b| FLAG_LETTERS.contains(b)) {
        lexer.push_until_included(close);
    }
}

fn lex_escaping(lexer: &mut Lexer) {
    match lexer.peek_byte(1) {
        Some(b'x') if lexer.peek_byte(2).is_some() => {
            // \xH or \xHH
            let digits = lexer.count_hex_digits(2, 2);
            lexer.push_span(2 + digits);
        }
        Some(b'u') if lexer.count_hex_digits(2, 4) == 4 => lexer.push_span(6),
        Some(b'U') if lexer.count_hex_digits(2, 8) == 8 => lexer.push_span(10),
        Some(b'N') => lexer.lex_escaping_with_delimiters(b'{', b'}'),
        Some(b'g') => lexer.lex_escaping_with_delimiters(b'<', b'>'),
        _ => lexer.lex_escaping(),
    }
}

fn lex_group_header(lexer: &mut Lexer) {
    if let Some(header) = GROUP_HEADERS
        .iter()
        .find(|header| lexer.starts_with(header))
    {
        lexer.push_span(header.len());
    } else if lexer.starts_with("(?<") {
        lexer.lex_named_group(3);
    } else if lexer.starts_with("(?P<") {
        lexer.lex_named_group(4);
    } else if lexer.starts_with("(?P=") {
        lex_named_backreference(lexer);
    } else {
        lexer.push_span(1);
    }
}

fn lex_named_backreference(lexer: &mut Lexer) {
    // (?P=name)?  //
    // ^        ^__// to here
    // |___________// current char, validated

    // the name can not contain escapes, the first `)` closes it
    let name_start = lexer.index() + 4;
    let close = lexer.source().as_bytes()[name_start..]
        .iter()
        .position(|b| *b == b')')
        .map(|offset| name_start + offset);

    match close {
        Some(end) => lexer.push_until_included(end),
        None => {
            log::trace!("incomplete named back reference at {}", lexer.index());
            lexer.push_span(1);
        }
    }
}

pub fn explain_marker(token: &str) -> Option<String> {
    RAW_STRING_PREFIXES
        .contains(&token)
        .then(|| "Raw string marker - backslashes are treated literally".to_owned())
}

pub fn explain(token: &str) -> String {
    if let Some(flags) = inline_flags(token) {
        return explain_flags(flags, describe_flag);
    }

    if let Some(description) = explain_metachar(token) {
        return description.to_owned();
    }

    if token == "." {
        return "Matches any single character except newline".to_owned();
    }

    if let Some(description) = explain_quantifier(token, QuantifierStyle::Lazy) {
        return description;
    }

    if let Some(description) = explain_group_header(token, &GROUP_HEADERS) {
        return description.to_owned();
    }

    if let Some(description) = explain_named_group(token, &NAMED_GROUP_PREFIXES) {
        return description;
    }

    if let Some(name) = token
        .strip_prefix("(?P=")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return format!("Backreference to the named group '{}'", name);
    }

    if let Some(description) = explain_charset(token) {
        return description;
    }

    if token.starts_with('\\') {
        return explain_escaping(token);
    }

    if let Some(description) = explain_repetition(token) {
        return description;
    }

    explain_literal(token)
}

/// The letters of an inline flags group, e.g. `im` of `(?im)`.
fn inline_flags(token: &str) -> Option<&str> {
    token
        .strip_prefix("(?")
        .and_then(|rest| rest.strip_suffix(')'))
        .filter(|letters| {
            !letters.is_empty() && letters.bytes().all(|b| FLAG_LETTERS.contains(&b))
        })
}

fn describe_flag(flag: char) -> Option<&'static str> {
    let description = match flag {
        'a' => "ASCII-only matching",
        'i' => "Case-insensitive matching",
        'L' => "Locale-dependent matching",
        'm' => "Multi-line matching - ^ and $ match at line breaks",
        's' => "Dot matches all - the dot (.) matches any character including newline",
        'u' => "Unicode matching",
        'x' => "Verbose - whitespace and comments in pattern are ignored",
        _ => return None,
    };

    Some(description)
}

fn explain_escaping(token: &str) -> String {
    let Some(escaped) = escaped_char(token) else {
        return "Invalid escape sequence".to_owned();
    };

    let description = match escaped {
        'A' => "Matches only at the start of the string",
        'Z' => "Matches only at the end of the string",
        'd' => "Matches any decimal digit (0-9)",
        'D' => "Matches any non-digit character",
        's' => "Matches any whitespace character (space, tab, newline, etc.)",
        'S' => "Matches any non-whitespace character",
        'w' => "Matches any alphanumeric character (including underscore)",
        'W' => "Matches any non-alphanumeric character",
        'b' => "Matches a word boundary",
        'B' => "Matches a non-word boundary",
        'n' => "Matches a newline character",
        't' => "Matches a tab character",
        'r' => "Matches a carriage return character",
        'f' => "Matches a form feed character",
        'v' => "Matches a vertical tab character",
        'a' => "Matches a bell (BEL) character",
        'g' => {
            return match escape_argument(token, b'<', b'>') {
                Some(name) => format!("Backreference to the named group '{}'", name),
                None => "Invalid named backreference".to_owned(),
            }
        }
        'x' => {
            return match escape_hex_digits(token, 2) {
                Some(digits) => format!("Matches the character with hex code {}", digits),
                None => "Invalid hexadecimal escape sequence".to_owned(),
            }
        }
        'u' => {
            return match escape_hex_digits(token, 4) {
                Some(digits) => format!("Matches the Unicode character U+{}", digits),
                None => "Invalid Unicode escape sequence".to_owned(),
            }
        }
        'U' => {
            return match escape_hex_digits(token, 8) {
                Some(digits) => format!("Matches the Unicode character U+{}", digits),
                None => "Invalid extended Unicode escape sequence".to_owned(),
            }
        }
        'N' => {
            return match escape_argument(token, b'{', b'}').filter(|name| !name.is_empty()) {
                Some(name) => format!("Matches the Unicode character named '{}'", name),
                None => "Invalid Unicode name escape sequence".to_owned(),
            }
        }
        _ => {
            return explain_backreference(escaped)
                .unwrap_or_else(|| explain_escaped_literal(escaped))
        }
    };

    description.to_owned()
}
