// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The POSIX extended dialect (ERE).
//
// There are no group headers, a `(` always opens a capturing group.
// A bracket expression may contain character class markers such
// as `[:alpha:]`, e.g. `[[:alpha:]_]`.

use crate::{
    explain::{
        charset_content, escaped_char, explain_backreference, explain_charset,
        explain_escaped_literal, explain_literal, explain_metachar, explain_quantifier,
        explain_repetition, QuantifierStyle,
    },
    lexer::Lexer,
    scanner::find_closing_posix_bracket,
    token::Token,
};

pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(pattern);

    while let Some(current) = lexer.peek_byte(0) {
        match current {
            b'[' => lex_charset(&mut lexer),
            b'\\' if lexer.peek_byte(1).is_some() => lexer.lex_escaping(),
            b'{' => lexer.lex_repetition(),
            b'*' | b'+' | b'?' => lexer.lex_quantifier(None),
            b'(' | b')' | b'|' | b'^' | b'$' | b'.' => lexer.push_span(1),
            _ => lexer.push_literal_char(),
        }
    }

    lexer.finish()
}

fn lex_charset(lexer: &mut Lexer) {
    match find_closing_posix_bracket(lexer.source(), lexer.index()) {
        Some(end) => lexer.push_until_included(end),
        None => {
            // e.g. `[[:alpha]`, scan it as a plain bracket expression
            lexer.lex_charset()
        }
    }
}

pub fn explain(token: &str) -> String {
    if let Some(description) = explain_metachar(token) {
        return description.to_owned();
    }

    if token == "." {
        return "Matches any single character".to_owned();
    }

    if let Some(description) = explain_quantifier(token, QuantifierStyle::Plain) {
        return description;
    }

    if let Some(content) = charset_content(token) {
        return explain_posix_charset(token, content);
    }

    if token.starts_with('\\') {
        return explain_escaping(token);
    }

    if let Some(description) = explain_repetition(token) {
        return description;
    }

    explain_literal(token)
}

fn explain_posix_charset(token: &str, content: &str) -> String {
    let class_names = posix_class_names(content);

    if class_names.is_empty() {
        return explain_charset(token).unwrap_or_else(|| explain_literal(token));
    }

    // a single class, e.g. `[[:alpha:]]`
    if let [name] = class_names.as_slice() {
        if content.len() == name.len() + 4 {
            return explain_posix_class(name);
        }
    }

    let set_description = explain_charset(token).unwrap_or_else(|| explain_literal(token));
    let class_descriptions: Vec<String> = class_names
        .iter()
        .map(|name| format!("[:{}:]: {}", name, explain_posix_class(name)))
        .collect();

    format!("{} ({})", set_description, class_descriptions.join("; "))
}

/// The names of the `[:name:]` markers in a bracket expression content.
fn posix_class_names(content: &str) -> Vec<&str> {
    let mut names = vec![];
    let mut rest = content;

    while let Some(start) = rest.find("[:") {
        let after_opener = &rest[start + 2..];
        match after_opener.find(":]") {
            Some(end) => {
                names.push(&after_opener[..end]);
                rest = &after_opener[end + 2..];
            }
            None => break,
        }
    }

    names
}

fn explain_posix_class(name: &str) -> String {
    let description = match name {
        "alnum" => "Matches any alphanumeric character (a-z, A-Z, 0-9)",
        "alpha" => "Matches any alphabetic character (a-z, A-Z)",
        "ascii" => "Matches any ASCII character (0-127)",
        "blank" => "Matches space and tab characters",
        "cntrl" => "Matches control characters",
        "digit" => "Matches decimal digits (0-9)",
        "graph" => "Matches visible characters (not including space)",
        "lower" => "Matches lowercase letters (a-z)",
        "print" => "Matches visible characters (including space)",
        "punct" => "Matches punctuation characters",
        "space" => "Matches whitespace characters (space, tab, newline, etc.)",
        "upper" => "Matches uppercase letters (A-Z)",
        "word" => "Matches word characters (alphanumeric plus underscore)",
        "xdigit" => "Matches hexadecimal digits (0-9, a-f, A-F)",
        _ => return format!("Unknown POSIX character class '[:{}:]'", name),
    };

    description.to_owned()
}

fn explain_escaping(token: &str) -> String {
    let Some(escaped) = escaped_char(token) else {
        return "Invalid escape sequence".to_owned();
    };

    let description = match escaped {
        'n' => "Matches a newline character",
        't' => "Matches a tab character",
        'r' => "Matches a carriage return character",
        _ => {
            return explain_backreference(escaped)
                .unwrap_or_else(|| explain_escaped_literal(escaped))
        }
    };

    description.to_owned()
}
