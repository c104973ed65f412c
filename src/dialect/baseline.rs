// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The Go `regexp` dialect.
//
// group headers:
//
// - (?:       non-capturing group
// - (?=       positive lookahead
// - (?P<name> named capturing group
//
// quantifiers have no lazy or possessive suffix, an escape sequence is
// always a backslash and one char.

use crate::{
    explain::{
        escaped_char, explain_charset, explain_common_escape, explain_escaped_literal,
        explain_group_header, explain_literal, explain_metachar, explain_named_group,
        explain_quantifier, explain_repetition, QuantifierStyle,
    },
    lexer::Lexer,
    token::Token,
};

const GROUP_HEADERS: [&str; 2] = ["(?:", "(?="];
const NAMED_GROUP_PREFIXES: [&str; 1] = ["(?P<"];

pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(pattern);

    while let Some(current) = lexer.peek_byte(0) {
        match current {
            b'[' => lexer.lex_charset(),
            b'\\' if lexer.peek_byte(1).is_some() => lexer.lex_escaping(),
            b'{' => lexer.lex_repetition(),
            b'*' | b'+' | b'?' => lexer.lex_quantifier(None),
            b'(' => lex_group_header(&mut lexer),
            b')' | b'|' | b'^' | b'$' | b'.' => lexer.push_span(1),
            _ => lexer.push_literal_char(),
        }
    }

    lexer.finish()
}

fn lex_group_header(lexer: &mut Lexer) {
    if GROUP_HEADERS.iter().any(|header| lexer.starts_with(header)) {
        lexer.push_span(3);
    } else if lexer.starts_with("(?P<") {
        lexer.lex_named_group(4);
    } else {
        lexer.push_span(1);
    }
}

pub fn explain(token: &str) -> String {
    if let Some(description) = explain_metachar(token) {
        return description.to_owned();
    }

    if token == "." {
        return "Matches any single character except newline".to_owned();
    }

    if let Some(description) = explain_quantifier(token, QuantifierStyle::Plain) {
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

fn explain_escaping(token: &str) -> String {
    let Some(escaped) = escaped_char(token) else {
        return "Invalid escape sequence".to_owned();
    };

    let description = match escaped {
        'A' => "Matches the start of the string",
        'z' => "Matches the end of the string",
        _ => match explain_common_escape(escaped) {
            Some(description) => description,
            None => return explain_escaped_literal(escaped),
        },
    };

    description.to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{explain, tokenize};

    fn tokenize_to_texts(pattern: &str) -> Vec<&str> {
        tokenize(pattern).iter().map(|token| token.text).collect()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize_to_texts("abc"), vec!["abc"]);
        assert_eq!(tokenize_to_texts("[a-z]"), vec!["[a-z]"]);
        assert_eq!(tokenize_to_texts("^abc+$"), vec!["^", "abc", "+", "$"]);
        assert_eq!(
            tokenize_to_texts("(foo|bar)"),
            vec!["(", "foo", "|", "bar", ")"]
        );
        assert_eq!(tokenize_to_texts(r"\d\w\s"), vec![r"\d", r"\w", r"\s"]);
        assert_eq!(
            tokenize_to_texts("(?P<name>abc)"),
            vec!["(?P<name>", "abc", ")"]
        );
        assert_eq!(tokenize_to_texts("(?:abc)"), vec!["(?:", "abc", ")"]);
        assert_eq!(
            tokenize_to_texts("foo(?=bar)"),
            vec!["foo", "(?=", "bar", ")"]
        );
        assert_eq!(tokenize_to_texts("a{2,3}"), vec!["a", "{2,3}"]);
        assert_eq!(tokenize_to_texts(""), Vec::<&str>::new());
    }

    #[test]
    fn test_tokenize_url() {
        assert_eq!(
            tokenize_to_texts(r"^(https?://)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(/.*)?$"),
            vec![
                "^",
                "(",
                "https",
                "?",
                "://",
                ")",
                "?",
                "[a-zA-Z0-9.-]",
                "+",
                r"\.",
                "[a-zA-Z]",
                "{2,}",
                "(",
                "/",
                ".",
                "*",
                ")",
                "?",
                "$",
            ]
        );
    }

    #[test]
    fn test_tokenize_unsupported_headers() {
        // `(?<name>` is not a Go syntax
        assert_eq!(
            tokenize_to_texts("(?<name>abc)"),
            vec!["(", "?", "<name>abc", ")"]
        );

        // no lazy suffix
        assert_eq!(tokenize_to_texts("a+?"), vec!["a", "+", "?"]);

        // named group without the closing `>`
        assert_eq!(tokenize_to_texts("(?P<name"), vec!["(", "?", "P<name"]);
    }

    #[test]
    fn test_tokenize_malformed() {
        assert_eq!(tokenize_to_texts("ab[cd"), vec!["ab", "[cd"]);
        assert_eq!(tokenize_to_texts("a{2"), vec!["a", "{2"]);
        assert_eq!(tokenize_to_texts(r"ab\"), vec![r"ab\"]);
        assert_eq!(tokenize_to_texts("[]abc]"), vec!["[]abc]"]);
        assert_eq!(tokenize_to_texts(r"\文字"), vec![r"\文", "字"]);
    }

    #[test]
    fn test_tokenize_ranges() {
        let pattern = "a文(?:b)";
        let tokens = tokenize(pattern);

        for token in &tokens {
            assert_eq!(&pattern[token.range.as_range()], token.text);
            assert!(!token.marker);
        }
        assert_eq!(tokens[1].range.index, 4);
    }

    #[test]
    fn test_explain() {
        assert_eq!(explain("^"), "Matches the start of a line");
        assert_eq!(explain("$"), "Matches the end of a line");
        assert_eq!(explain("."), "Matches any single character except newline");
        assert_eq!(explain("*"), "Matches 0 or more of the preceding element");
        assert_eq!(explain("+"), "Matches 1 or more of the preceding element");
        assert_eq!(explain("?"), "Matches 0 or 1 of the preceding element");
        assert_eq!(
            explain("|"),
            "Acts as an OR operator - matches the expression before or after the |"
        );
        assert_eq!(explain("("), "Start of a capturing group");
        assert_eq!(explain(")"), "End of a capturing group");
        assert_eq!(
            explain("(?:"),
            "Start of a non-capturing group - groups the expression but doesn't create a capture group"
        );
        assert_eq!(
            explain("(?="),
            "Start of a positive lookahead - matches if the pattern inside matches, but doesn't consume characters"
        );
        assert_eq!(
            explain("(?P<name>"),
            "Start of a named capturing group called 'name'"
        );
        assert_eq!(explain("[a-z]"), "Matches any character in the set: a-z");
        assert_eq!(explain("[^0-9]"), "Matches any character NOT in the set: 0-9");
        assert_eq!(
            explain("{2,3}"),
            "Matches between 2 and 3 occurrences of the preceding element"
        );
        assert_eq!(explain("a"), "Matches the character 'a' literally");
        assert_eq!(explain("abc"), "Matches the string 'abc' literally");
    }

    #[test]
    fn test_explain_escaping() {
        assert_eq!(explain(r"\d"), "Matches any digit (0-9)");
        assert_eq!(
            explain(r"\w"),
            "Matches any word character (alphanumeric plus underscore)"
        );
        assert_eq!(
            explain(r"\s"),
            "Matches any whitespace character (space, tab, newline, etc.)"
        );
        assert_eq!(explain(r"\A"), "Matches the start of the string");
        assert_eq!(explain(r"\z"), "Matches the end of the string");
        assert_eq!(explain(r"\0"), "Matches a null character");
        assert_eq!(explain(r"\."), "Matches the character '.' literally");
        assert_eq!(explain(r"\文"), "Matches the character '文' literally");

        // no back references in Go
        assert_eq!(explain(r"\1"), "Matches the character '1' literally");

        // a trailing backslash
        assert_eq!(explain(r"\"), "Invalid escape sequence");
    }
}
