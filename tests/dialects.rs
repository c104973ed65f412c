// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use pretty_assertions::assert_eq;
use rstest::rstest;
use unregex::{explain, explain_pattern, has_feature_named, resolve_dialect, tokenize, Dialect};

fn texts(pattern: &str, dialect: Dialect) -> Vec<&str> {
    tokenize(pattern, dialect)
        .iter()
        .map(|token| token.text)
        .collect()
}

#[rstest]
#[case(Dialect::Baseline, vec!["(", "?", "<name>abc", ")"])]
#[case(Dialect::Pcre, vec!["(?<name>", "abc", ")"])]
#[case(Dialect::Posix, vec!["(", "?", "<name>abc", ")"])]
#[case(Dialect::Ecma, vec!["(?<name>", "abc", ")"])]
#[case(Dialect::Python, vec!["(?<name>", "abc", ")"])]
fn test_angle_named_group(#[case] dialect: Dialect, #[case] expected: Vec<&str>) {
    assert_eq!(texts("(?<name>abc)", dialect), expected);
}

#[rstest]
#[case(Dialect::Baseline, vec!["a", "+", "?"])]
#[case(Dialect::Pcre, vec!["a", "+", "?"])]
#[case(Dialect::Posix, vec!["a", "+", "?"])]
#[case(Dialect::Ecma, vec!["a", "+?"])]
#[case(Dialect::Python, vec!["a", "+?"])]
fn test_lazy_suffix(#[case] dialect: Dialect, #[case] expected: Vec<&str>) {
    assert_eq!(texts("a+?", dialect), expected);
}

#[rstest]
#[case(Dialect::Baseline, vec!["a", "*", "+"])]
#[case(Dialect::Pcre, vec!["a", "*+"])]
#[case(Dialect::Posix, vec!["a", "*", "+"])]
#[case(Dialect::Ecma, vec!["a", "*", "+"])]
#[case(Dialect::Python, vec!["a", "*", "+"])]
fn test_possessive_suffix(#[case] dialect: Dialect, #[case] expected: Vec<&str>) {
    assert_eq!(texts("a*+", dialect), expected);
}

#[rstest]
fn test_leading_bracket_in_charset(
    #[values(Dialect::Baseline, Dialect::Pcre, Dialect::Ecma, Dialect::Python)] dialect: Dialect,
) {
    assert_eq!(texts("[]abc]", dialect), vec!["[]abc]"]);
}

#[rstest]
#[case("{3}", "Matches exactly 3 occurrences of the preceding element")]
#[case("{2,}", "Matches at least 2 occurrences of the preceding element")]
#[case("{2,5}", "Matches between 2 and 5 occurrences of the preceding element")]
#[case("{,5}", "Matches at most 5 occurrences of the preceding element")]
#[case("{a}", "Matches the string '{a}' literally")]
fn test_repetition(
    #[values(
        Dialect::Baseline,
        Dialect::Pcre,
        Dialect::Posix,
        Dialect::Ecma,
        Dialect::Python
    )]
    dialect: Dialect,
    #[case] token: &str,
    #[case] expected: &str,
) {
    assert_eq!(texts(token, dialect), vec![token]);
    assert_eq!(explain(token, dialect), expected);
}

#[rstest]
fn test_unclosed_constructs(
    #[values(
        Dialect::Baseline,
        Dialect::Pcre,
        Dialect::Posix,
        Dialect::Ecma,
        Dialect::Python
    )]
    dialect: Dialect,
) {
    assert_eq!(texts("ab[cd", dialect), vec!["ab", "[cd"]);
    assert_eq!(texts("ab{2", dialect), vec!["ab", "{2"]);
    assert_eq!(texts("ab\\", dialect), vec!["ab\\"]);
}

#[rstest]
#[case(Dialect::Baseline, "lookahead", true)]
#[case(Dialect::Baseline, "possessive", false)]
#[case(Dialect::Pcre, "recursion", true)]
#[case(Dialect::Posix, "backreference", true)]
#[case(Dialect::Posix, "named-group", false)]
#[case(Dialect::Ecma, "lookbehind", true)]
#[case(Dialect::Ecma, "atomic-group", false)]
#[case(Dialect::Python, "unicode-class", true)]
#[case(Dialect::Python, "conditional", false)]
#[case(Dialect::Pcre, "named_group", false)]
fn test_feature(#[case] dialect: Dialect, #[case] key: &str, #[case] expected: bool) {
    assert_eq!(has_feature_named(dialect, key), expected);
}

#[rstest]
#[case("go", Dialect::Baseline)]
#[case("js", Dialect::Ecma)]
#[case("python", Dialect::Python)]
#[case("javascript", Dialect::Baseline)]
#[case("Python", Dialect::Baseline)]
#[case("", Dialect::Baseline)]
fn test_resolve_dialect(#[case] name: &str, #[case] expected: Dialect) {
    assert_eq!(resolve_dialect(name), expected);
}

#[test]
fn test_explain_python_raw_pattern() {
    let explanations = explain_pattern("r'(?i)\\d+'", Dialect::Python);

    let pairs: Vec<(&str, &str)> = explanations
        .iter()
        .map(|explanation| {
            (
                explanation.token.as_str(),
                explanation.description.as_str(),
            )
        })
        .collect();

    assert_eq!(
        pairs,
        vec![
            (
                "r'",
                "Raw string marker - backslashes are treated literally"
            ),
            ("(?i)", "Flags: i: Case-insensitive matching"),
            ("\\d", "Matches any decimal digit (0-9)"),
            ("+", "Matches 1 or more of the preceding element (greedy)"),
            ("'", "Matches the character ''' literally"),
        ]
    );
    assert!(explanations[0].marker);
    assert_eq!(explanations[4].range, 9..10);
}

#[test]
fn test_explain_ecma_literal() {
    let explanations = explain_pattern("/\\u{1F600}|x/gu", Dialect::Ecma);

    let tokens: Vec<&str> = explanations
        .iter()
        .map(|explanation| explanation.token.as_str())
        .collect();
    assert_eq!(tokens, vec!["/gu", "\\u{1F600}", "|", "x"]);

    assert_eq!(explanations[1].range, 1..10);
    assert_eq!(explanations[3].range, 11..12);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use pretty_assertions::assert_eq;
    use unregex::{explain_pattern, Dialect, FeatureKey};

    #[test]
    fn test_serialize_names() {
        assert_eq!(serde_json::to_string(&Dialect::Ecma).unwrap(), "\"js\"");
        assert_eq!(serde_json::to_string(&Dialect::Baseline).unwrap(), "\"go\"");
        assert_eq!(
            serde_json::to_string(&FeatureKey::NamedGroup).unwrap(),
            "\"named-group\""
        );

        let dialect: Dialect = serde_json::from_str("\"python\"").unwrap();
        assert_eq!(dialect, Dialect::Python);
    }

    #[test]
    fn test_serialize_explanation() {
        let explanations = explain_pattern("a", Dialect::Baseline);
        let json = serde_json::to_value(&explanations[0]).unwrap();

        assert_eq!(json["token"], "a");
        assert_eq!(json["range"]["start"], 0);
        assert_eq!(json["range"]["end"], 1);
        assert_eq!(json["marker"], false);
    }
}
