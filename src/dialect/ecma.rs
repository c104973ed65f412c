// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The JavaScript (ECMAScript) dialect.
//
// A pattern can be written as a regex literal `/body/flags`, the flags
// become a leading marker token, e.g. `/abc/gi` is tokenized to
// `/gi` (marker) and `abc`.
//
// group headers:
//
// - (?:       non-capturing group
// - (?= (?!   lookahead
// - (?<= (?<! lookbehind
// - (?<name>  named capturing group
//
// quantifiers take an optional lazy suffix `?`, e.g. `a*?`.
//
// escape sequences with an argument:
//
// - \k<name>      named back reference
// - \p{..} \P{..} unicode property
// - \uHHHH        exactly 4 hex digits
// - \u{H..}       1 to 6 hex digits
// - \xHH          exactly 2 hex digits

use crate::{
    explain::{
        escape_argument, escape_hex_digits, escaped_char, explain_backreference,
        explain_charset, explain_common_escape, explain_escaped_literal, explain_flags,
        explain_group_header, explain_literal, explain_metachar, explain_named_group,
        explain_quantifier, explain_repetition, QuantifierStyle,
    },
    lexer::Lexer,
    location::Location,
    token::Token,
};

const GROUP_HEADERS: [&str; 5] = ["(?:", "(?=", "(?!", "(?<=", "(?<!"];
const NAMED_GROUP_PREFIXES: [&str; 1] = ["(?<"];

const MAX_CODE_POINT_DIGITS: usize = 6;

pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = vec![];

    let mut lexer = match split_regex_literal(pattern) {
        RegexLiteral::WithFlags { body, slash_index } => {
            log::debug!("regex literal with flags \"{}\"", &pattern[slash_index..]);
            let flags = Token::new_marker(
                &pattern[slash_index..],
                Location::new_range(slash_index, pattern.len() - slash_index),
            );
            tokens.push(flags);
            Lexer::with_base(body, 1)
        }
        RegexLiteral::WithoutFlags { body } => {
            log::debug!("regex literal without flags");
            Lexer::with_base(body, 1)
        }
        RegexLiteral::Bare => Lexer::new(pattern),
    };

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

    tokens.extend(lexer.finish());
    tokens
}

enum RegexLiteral<'a> {
    // `/body/flags`
    WithFlags { body: &'a str, slash_index: usize },

    // `/body/`
    WithoutFlags { body: &'a str },

    // anything else is taken as is, including a
    // tail which is not made of flag letters, e.g. `/a/1`
    Bare,
}

fn split_regex_literal(pattern: &str) -> RegexLiteral<'_> {
    if pattern.len() <= 2 || !pattern.starts_with('/') {
        return RegexLiteral::Bare;
    }

    // `pattern` starts with a slash, so `rfind` always succeeds
    let slash_index = pattern.rfind('/').unwrap_or(0);

    if slash_index > 0 && slash_index < pattern.len() - 1 {
        if regex_literal_flags(&pattern[slash_index..]).is_none() {
            log::trace!("invalid regex literal flags \"{}\"", &pattern[slash_index..]);
            return RegexLiteral::Bare;
        }

        RegexLiteral::WithFlags {
            body: &pattern[1..slash_index],
            slash_index,
        }
    } else if pattern.ends_with('/') {
        RegexLiteral::WithoutFlags {
            body: &pattern[1..pattern.len() - 1],
        }
    } else {
        RegexLiteral::Bare
    }
}

fn lex_escaping(lexer: &mut Lexer) {
    match lexer.peek_byte(1) {
        Some(b'k') => lexer.lex_escaping_with_delimiters(b'<', b'>'),
        Some(b'p' | b'P') => lexer.lex_escaping_with_delimiters(b'{', b'}'),
        Some(b'u') if lexer.count_hex_digits(2, 4) == 4 => {
            // \uHHHH
            lexer.push_span(6);
        }
        Some(b'u') if lexer.peek_byte_and_equals(2, b'{') => {
            // \u{H..}
            let digits = lexer.count_hex_digits(3, MAX_CODE_POINT_DIGITS);
            if digits > 0 && lexer.peek_byte_and_equals(3 + digits, b'}') {
                lexer.push_span(4 + digits);
            } else {
                lexer.lex_escaping();
            }
        }
        Some(b'x') if lexer.count_hex_digits(2, 2) == 2 => {
            // \xHH
            lexer.push_span(4);
        }
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
    } else {
        lexer.push_span(1);
    }
}

/// Describe the flags marker, e.g. `/gi`.
pub fn explain_marker(token: &str) -> Option<String> {
    regex_literal_flags(token).map(|flags| explain_flags(flags, describe_flag))
}

pub fn explain(token: &str) -> String {
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

/// The flags of the marker token, e.g. `gi` of `/gi`.
fn regex_literal_flags(token: &str) -> Option<&str> {
    token
        .strip_prefix('/')
        .filter(|flags| !flags.is_empty() && flags.bytes().all(|b| b.is_ascii_alphabetic()))
}

fn describe_flag(flag: char) -> Option<&'static str> {
    let description = match flag {
        'g' => "Global search - find all matches rather than stopping after the first match",
        'i' => "Case-insensitive search",
        'm' => "Multi-line search - ^ and $ match start/end of each line",
        's' => "Dot-all mode - the dot (.) matches newlines",
        'u' => "Unicode mode - treat pattern as a sequence of Unicode code points",
        'y' => "Sticky mode - matches only from the index indicated by the lastIndex property",
        'd' => "Generate indices for substring matches",
        _ => return None,
    };

    Some(description)
}

fn explain_escaping(token: &str) -> String {
    let Some(escaped) = escaped_char(token) else {
        return "Invalid escape sequence".to_owned();
    };

    match escaped {
        'k' => match escape_argument(token, b'<', b'>') {
            Some(name) => format!("Backreference to the named group '{}'", name),
            None => "Invalid named backreference".to_owned(),
        },
        'p' | 'P' => match escape_argument(token, b'{', b'}') {
            Some(property) if escaped == 'p' => format!(
                "Matches a character with the unicode property '{}' (requires u flag)",
                property
            ),
            Some(property) => format!(
                "Matches a character without the unicode property '{}' (requires u flag)",
                property
            ),
            None => "Invalid unicode property".to_owned(),
        },
        'u' => {
            let code_point = escape_hex_digits(token, 4).or_else(|| {
                escape_argument(token, b'{', b'}').filter(|digits| {
                    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
                })
            });

            match code_point {
                Some(digits) => format!("Matches the Unicode character U+{}", digits),
                None => "Invalid Unicode escape sequence".to_owned(),
            }
        }
        'x' => match escape_hex_digits(token, 2) {
            Some(digits) => format!("Matches the character with hex code {}", digits),
            None => "Invalid hexadecimal escape sequence".to_owned(),
        },
        _ => {
            if let Some(description) = explain_backreference(escaped) {
                return description;
            }

            explain_common_escape(escaped)
                .map(str::to_owned)
                .unwrap_or_else(|| explain_escaped_literal(escaped))
        }
    }
}
