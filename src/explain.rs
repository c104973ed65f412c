// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Descriptions shared by the dialect explainers.
//
// Every `explain_*` function recognizes one shape of token and returns
// `None` for any other shape, so a dialect explainer is a chain of these
// functions tried in priority order, ending with `explain_literal`.

/// How the simple quantifiers `*`, `+` and `?` of a dialect are described.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum QuantifierStyle {
    // `*` `+` `?` only
    Plain,

    // `*+` `++` `?+` are possessive
    Possessive,

    // `*?` `+?` `??` are lazy, the single char forms are greedy
    Lazy,
}

/// The fixed group headers and their descriptions, a dialect passes
/// the headers it recognizes to `explain_group_header`.
const GROUP_HEADERS: [(&str, &str); 6] = [
    (
        "(?:",
        "Start of a non-capturing group - groups the expression but doesn't create a capture group",
    ),
    (
        "(?=",
        "Start of a positive lookahead - matches if the pattern inside matches, but doesn't consume characters",
    ),
    (
        "(?!",
        "Start of a negative lookahead - matches if the pattern inside doesn't match, but doesn't consume characters",
    ),
    (
        "(?<=",
        "Start of a positive lookbehind - matches if the pattern inside matches immediately before current position",
    ),
    (
        "(?<!",
        "Start of a negative lookbehind - matches if the pattern inside doesn't match immediately before current position",
    ),
    (
        "(?>",
        "Start of an atomic group - once the group matches, the regex engine doesn't backtrack into it",
    ),
];

/// Anchors, alternation and the plain parentheses.
pub fn explain_metachar(token: &str) -> Option<&'static str> {
    let description = match token {
        "^" => "Matches the start of a line",
        "$" => "Matches the end of a line",
        "|" => "Acts as an OR operator - matches the expression before or after the |",
        "(" => "Start of a capturing group",
        ")" => "End of a capturing group",
        _ => return None,
    };

    Some(description)
}

pub fn explain_quantifier(token: &str, style: QuantifierStyle) -> Option<String> {
    let bytes = token.as_bytes();
    let amount = match bytes.first()? {
        b'*' => "0 or more",
        b'+' => "1 or more",
        b'?' => "0 or 1",
        _ => return None,
    };

    let description = match (bytes.len(), style) {
        (1, QuantifierStyle::Lazy) => {
            format!("Matches {} of the preceding element (greedy)", amount)
        }
        (1, _) => format!("Matches {} of the preceding element", amount),
        (2, QuantifierStyle::Lazy) if bytes[1] == b'?' => {
            format!("Matches {} of the preceding element (non-greedy)", amount)
        }
        (2, QuantifierStyle::Possessive) if bytes[1] == b'+' => format!(
            "Possessive match of {} of the preceding element (never gives up the match)",
            amount
        ),
        _ => return None,
    };

    Some(description)
}

pub fn explain_group_header(token: &str, headers: &[&str]) -> Option<&'static str> {
    if !headers.contains(&token) {
        return None;
    }

    GROUP_HEADERS
        .iter()
        .find(|(header, _)| *header == token)
        .map(|(_, description)| *description)
}

/// Named group headers, e.g. `(?<name>` and `(?P<name>`. The name is the
/// text between the prefix and the trailing `>`.
pub fn explain_named_group(token: &str, prefixes: &[&str]) -> Option<String> {
    let name = prefixes.iter().find_map(|prefix| {
        token
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix('>'))
    })?;

    Some(format!("Start of a named capturing group called '{}'", name))
}

/// Bracket expressions, e.g. `[a-z]` and `[^0-9]`.
pub fn explain_charset(token: &str) -> Option<String> {
    let content = charset_content(token)?;

    let description = match content.strip_prefix('^') {
        Some(negated) => {
            format!("Matches any character NOT in the set: {}", negated)
        }
        _ => format!("Matches any character in the set: {}", content),
    };

    Some(description)
}

/// The text between the outer brackets of a bracket expression.
pub fn charset_content(token: &str) -> Option<&str> {
    if token.len() < 2 {
        return None;
    }

    token.strip_prefix('[')?.strip_suffix(']')
}

/// Brace quantifiers, e.g. `{3}`, `{2,}`, `{2,3}` and `{,3}`.
///
/// A brace expression which bounds are not decimal numbers is not a
/// quantifier in any dialect, it is described as literal text.
pub fn explain_repetition(token: &str) -> Option<String> {
    let content = token.strip_prefix('{')?.strip_suffix('}')?;

    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let description = match content.split_once(',') {
        Some((from, "")) if is_number(from) => format!(
            "Matches at least {} occurrences of the preceding element",
            from
        ),
        Some(("", to)) if is_number(to) => format!(
            "Matches at most {} occurrences of the preceding element",
            to
        ),
        Some((from, to)) if is_number(from) && is_number(to) => format!(
            "Matches between {} and {} occurrences of the preceding element",
            from, to
        ),
        None if is_number(content) => format!(
            "Matches exactly {} occurrences of the preceding element",
            content
        ),
        _ => explain_literal(token),
    };

    Some(description)
}

pub fn explain_literal(token: &str) -> String {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => format!("Matches the character '{}' literally", c),
        _ => format!("Matches the string '{}' literally", token),
    }
}

/// Describe each flag letter with `describe_flag`, e.g.
/// "Flags: g: Global search ..., i: Case-insensitive search".
pub fn explain_flags(flags: &str, describe_flag: fn(char) -> Option<&'static str>) -> String {
    if flags.is_empty() {
        return "No flags specified".to_owned();
    }

    let descriptions: Vec<String> = flags
        .chars()
        .map(|flag| match describe_flag(flag) {
            Some(description) => format!("{}: {}", flag, description),
            None => format!("{}: Unknown flag", flag),
        })
        .collect();

    format!("Flags: {}", descriptions.join(", "))
}

/// The char following the backslash of an escape token.
pub fn escaped_char(token: &str) -> Option<char> {
    token.strip_prefix('\\')?.chars().next()
}

/// The name of a delimited escape such as `\k<name>`, `\p{L}` and `\N{name}`,
/// i.e. the text between `opener` (right after the escaped char) and the
/// first `closer`.
pub fn escape_argument(token: &str, opener: u8, closer: u8) -> Option<&str> {
    if token.as_bytes().get(2) != Some(&opener) {
        return None;
    }

    let rest = &token[3..];
    rest.find(closer as char).map(|end| &rest[..end])
}

/// The `count` hex digits following the escaped char, e.g. `41` of `\x41`.
pub fn escape_hex_digits(token: &str, count: usize) -> Option<&str> {
    let digits = token.get(2..2 + count)?;
    digits
        .bytes()
        .all(|b| b.is_ascii_hexdigit())
        .then_some(digits)
}

/// Escapes that share one description across the Go, PCRE and JavaScript
/// dialects.
pub fn explain_common_escape(escaped: char) -> Option<&'static str> {
    let description = match escaped {
        'd' => "Matches any digit (0-9)",
        'D' => "Matches any non-digit character",
        'w' => "Matches any word character (alphanumeric plus underscore)",
        'W' => "Matches any non-word character",
        's' => "Matches any whitespace character (space, tab, newline, etc.)",
        'S' => "Matches any non-whitespace character",
        'b' => "Matches a word boundary",
        'B' => "Matches a non-word boundary",
        'n' => "Matches a newline character",
        't' => "Matches a tab character",
        'r' => "Matches a carriage return character",
        'f' => "Matches a form feed character",
        'v' => "Matches a vertical tab character",
        '0' => "Matches a null character",
        _ => return None,
    };

    Some(description)
}

pub fn explain_backreference(escaped: char) -> Option<String> {
    matches!(escaped, '1'..='9')
        .then(|| format!("Backreference to capturing group {}", escaped))
}

pub fn explain_escaped_literal(escaped: char) -> String {
    format!("Matches the character '{}' literally", escaped)
}
