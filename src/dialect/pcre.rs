// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The Perl compatible dialect.
//
// group headers:
//
// - (?:       non-capturing group
// - (?= (?!   lookahead
// - (?<= (?<! lookbehind
// - (?>       atomic group
// - (?<name> (?P<name>
//             named capturing group
//
// quantifiers take an optional possessive suffix `+`, e.g. `a*+`.
//
// escape sequences with an argument:
//
// - \k<name>  named back reference
// - \p{..}    unicode property
// - \P{..}    negated unicode property

use crate::{
    explain::{
        escape_argument, escaped_char, explain_backreference, explain_charset,
        explain_common_escape, explain_escaped_literal, explain_group_header, explain_literal,
        explain_metachar, explain_named_group, explain_quantifier, explain_repetition,
        QuantifierStyle,
    },
    lexer::Lexer,
    token::Token,
};

const GROUP_HEADERS: [&str; 6] = ["(?:", "(?=", "(?!", "(?<=", "(?<!", "(?>"];
const NAMED_GROUP_PREFIXES: [&str; 2] = ["(?<", "(?P<"];

pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(pattern);

    while let Some(current) = lexer.peek_byte(0) {
        match current {
            b'[' => lexer.lex_charset(),
            b'\\' if lexer.peek_byte(1).is_some() => lex_escaping(&mut lexer),
            b'{' => lexer.lex_repetition(),
            b'*' | b'+' | b'?' => lexer.lex_quantifier(Some(b'+')),
            b'(' => lex_group_header(&mut lexer),
            b')' | b'|' | b'^' | b'$' | b'.' => lexer.push_span(1),
            _ => lexer.push_literal_char(),
        }
    }

    lexer.finish()
}

fn lex_escaping(lexer: &mut Lexer) {
    match lexer.peek_byte(1) {
        Some(b'k') => lexer.lex_escaping_with_delimiters(b'<', b'>'),
        Some(b'p' | b'P') => lexer.lex_escaping_with_delimiters(b'{', b'}'),
        _ => lexer.lex_escaping(),
    }
}

fn lex_group_header(lexer: &mut Lexer) {
    // the lookbehind headers must be checked before the `(?<name>`
    if let Some(header) = GROUP_HEADERS
        .iter()
        .find(|header| lexer.starts_with(header))
    {
        lexer.push_span(header.len());
    } else if lexer.starts_with("(?<") {
        lexer.lex_named_group(3);
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

    if let Some(description) = explain_quantifier(token, QuantifierStyle::Possessive) {
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
        'Z' => "Matches the end of the string or before the final newline",
        'z' => "Matches the absolute end of the string",
        'G' => "Matches the position where the previous match ended",
        'Q' => "Start of a quoted sequence (everything until \\E is treated as a literal)",
        'E' => "End of a quoted sequence",
        'k' => {
            return match escape_argument(token, b'<', b'>') {
                Some(name) => format!("Backreference to the named group '{}'", name),
                None => "Invalid named backreference".to_owned(),
            }
        }
        'p' | 'P' => {
            let Some(property) = escape_argument(token, b'{', b'}') else {
                return "Invalid unicode property".to_owned();
            };

            return if escaped == 'p' {
                format!(
                    "Matches a character with the unicode property '{}'",
                    property
                )
            } else {
                format!(
                    "Matches a character without the unicode property '{}'",
                    property
                )
            };
        }
        _ => {
            if let Some(description) = explain_backreference(escaped) {
                return description;
            }

            match explain_common_escape(escaped) {
                Some(description) => description,
                None => return explain_escaped_literal(escaped),
            }
        }
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
    fn test_tokenize_groups() {
        assert_eq!(
            tokenize_to_texts("(?<name>abc)"),
            vec!["(?<name>", "abc", ")"]
        );
        assert_eq!(
            tokenize_to_texts("(?P<name>abc)"),
            vec!["(?P<name>", "abc", ")"]
        );
        assert_eq!(tokenize_to_texts("(?:abc)"), vec!["(?:", "abc", ")"]);
        assert_eq!(
            tokenize_to_texts("foo(?=bar)"),
            vec!["foo", "(?=", "bar", ")"]
        );
        assert_eq!(
            tokenize_to_texts("foo(?!bar)"),
            vec!["foo", "(?!", "bar", ")"]
        );
        assert_eq!(
            tokenize_to_texts("(?<=foo)bar"),
            vec!["(?<=", "foo", ")", "bar"]
        );
        assert_eq!(
            tokenize_to_texts("(?<!foo)bar"),
            vec!["(?<!", "foo", ")", "bar"]
        );
        assert_eq!(tokenize_to_texts("(?>atom)"), vec!["(?>", "atom", ")"]);

        // unsupported or unclosed headers
        assert_eq!(tokenize_to_texts("(?#x)"), vec!["(", "?", "#x", ")"]);
        assert_eq!(tokenize_to_texts("(?<ab"), vec!["(", "?", "<ab"]);
        assert_eq!(tokenize_to_texts("(?<"), vec!["(", "?", "<"]);
    }

    #[test]
    fn test_tokenize_quantifiers() {
        assert_eq!(
            tokenize_to_texts("a++b*+c?+"),
            vec!["a", "++", "b", "*+", "c", "?+"]
        );
        assert_eq!(tokenize_to_texts("a+?"), vec!["a", "+", "?"]);
        assert_eq!(tokenize_to_texts("a{2,3}+"), vec!["a", "{2,3}", "+"]);
    }

    #[test]
    fn test_tokenize_escaping() {
        assert_eq!(
            tokenize_to_texts(r"(?<q>.)\k<q>\1"),
            vec!["(?<q>", ".", ")", r"\k<q>", r"\1"]
        );
        assert_eq!(
            tokenize_to_texts(r"\p{Lu}\P{N}\pL"),
            vec![r"\p{Lu}", r"\P{N}", r"\p", "L"]
        );
        assert_eq!(tokenize_to_texts(r"\k<q"), vec![r"\k", "<q"]);
    }

    #[test]
    fn test_tokenize_url() {
        assert_eq!(
            tokenize_to_texts(r"^(?<proto>https?)://(?:www\.)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(/.*)?$"),
            vec![
                "^",
                "(?<proto>",
                "https",
                "?",
                ")",
                "://",
                "(?:",
                "www",
                r"\.",
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
    fn test_explain() {
        assert_eq!(
            explain("*+"),
            "Possessive match of 0 or more of the preceding element (never gives up the match)"
        );
        assert_eq!(
            explain("++"),
            "Possessive match of 1 or more of the preceding element (never gives up the match)"
        );
        assert_eq!(explain("?"), "Matches 0 or 1 of the preceding element");
        assert_eq!(
            explain("(?!"),
            "Start of a negative lookahead - matches if the pattern inside doesn't match, but doesn't consume characters"
        );
        assert_eq!(
            explain("(?<="),
            "Start of a positive lookbehind - matches if the pattern inside matches immediately before current position"
        );
        assert_eq!(
            explain("(?<!"),
            "Start of a negative lookbehind - matches if the pattern inside doesn't match immediately before current position"
        );
        assert_eq!(
            explain("(?>"),
            "Start of an atomic group - once the group matches, the regex engine doesn't backtrack into it"
        );
        assert_eq!(
            explain("(?<name>"),
            "Start of a named capturing group called 'name'"
        );
        assert_eq!(
            explain("(?P<name>"),
            "Start of a named capturing group called 'name'"
        );
        assert_eq!(
            explain("{3}"),
            "Matches exactly 3 occurrences of the preceding element"
        );
    }

    #[test]
    fn test_explain_escaping() {
        assert_eq!(
            explain(r"\G"),
            "Matches the position where the previous match ended"
        );
        assert_eq!(
            explain(r"\Q"),
            r"Start of a quoted sequence (everything until \E is treated as a literal)"
        );
        assert_eq!(explain(r"\E"), "End of a quoted sequence");
        assert_eq!(
            explain(r"\Z"),
            "Matches the end of the string or before the final newline"
        );
        assert_eq!(explain(r"\z"), "Matches the absolute end of the string");
        assert_eq!(explain(r"\3"), "Backreference to capturing group 3");
        assert_eq!(explain(r"\k<q>"), "Backreference to the named group 'q'");
        assert_eq!(explain(r"\k"), "Invalid named backreference");
        assert_eq!(
            explain(r"\p{Lu}"),
            "Matches a character with the unicode property 'Lu'"
        );
        assert_eq!(
            explain(r"\P{N}"),
            "Matches a character without the unicode property 'N'"
        );
        assert_eq!(explain(r"\p"), "Invalid unicode property");
        assert_eq!(explain(r"\d"), "Matches any digit (0-9)");
    }
}
