// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Split a regular expression into tokens and explain each of them in
//! plain language.
//!
//! ```
//! use unregex::{explain_pattern, Dialect};
//!
//! let explanations = explain_pattern("(?<year>\\d{4})", Dialect::Pcre);
//! assert_eq!(explanations[0].token, "(?<year>");
//! assert_eq!(
//!     explanations[0].description,
//!     "Start of a named capturing group called 'year'"
//! );
//! ```
//!
//! Five dialects are supported, see `Dialect`. Malformed patterns never
//! fail, the constructs that can not be recognized are taken as literal
//! text.

mod error;
mod explain;
mod feature;
mod lexer;
mod location;
mod scanner;
mod token;

pub mod dialect;

use std::ops::Range;

pub use dialect::{resolve_dialect, Dialect, Syntax};
pub use error::UnregexError;
pub use feature::{FeatureKey, FeatureTable};
pub use location::Location;
pub use scanner::{find_closing_brace, find_closing_bracket, find_closing_paren};
pub use token::Token;

/// Split `pattern` into tokens in the order they appear.
///
/// Concatenating the texts of the non-marker tokens gives back the pattern,
/// without the regex literal slashes of JavaScript and the raw string prefix
/// of Python.
pub fn tokenize(pattern: &str, dialect: Dialect) -> Vec<Token<'_>> {
    (dialect.syntax().tokenize)(pattern)
}

/// Describe a single token produced by `tokenize` with the same dialect.
///
/// Only the text is known here, so a text shaped like a marker of the
/// dialect is described as the marker. Use `explain_pattern` or
/// `Syntax::explain_token` to keep markers and pattern text apart.
pub fn explain(token: &str, dialect: Dialect) -> String {
    dialect.syntax().explain_text(token)
}

pub fn has_feature(dialect: Dialect, feature: FeatureKey) -> bool {
    dialect.syntax().features.get(feature)
}

/// Like `has_feature`, but takes the feature name, e.g. `named-group`.
/// Unknown names are not supported by any dialect.
pub fn has_feature_named(dialect: Dialect, key: &str) -> bool {
    FeatureKey::from_key(key).is_some_and(|feature| has_feature(dialect, feature))
}

pub fn feature_table(dialect: Dialect) -> &'static FeatureTable {
    dialect.syntax().features
}

/// A token together with its description.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explanation {
    pub token: String,
    pub range: Range<usize>,
    pub marker: bool,
    pub description: String,
}

/// Tokenize `pattern` and explain every token.
pub fn explain_pattern(pattern: &str, dialect: Dialect) -> Vec<Explanation> {
    let syntax = dialect.syntax();

    (syntax.tokenize)(pattern)
        .into_iter()
        .map(|token| Explanation {
            token: token.text.to_owned(),
            range: token.range.as_range(),
            marker: token.marker,
            description: syntax.explain_token(&token),
        })
        .collect()
}
