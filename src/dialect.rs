// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

pub mod baseline;
pub mod ecma;
pub mod pcre;
pub mod posix;
pub mod python;

use std::{fmt::Display, str::FromStr};

use crate::{
    error::UnregexError,
    feature::{
        FeatureTable, BASELINE_FEATURES, ECMA_FEATURES, PCRE_FEATURES, POSIX_FEATURES,
        PYTHON_FEATURES,
    },
    token::Token,
};

/// A regular expression syntax flavor.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// Go `regexp`, also the fallback for unknown names.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "go"))]
    Baseline,

    #[cfg_attr(feature = "serde", serde(rename = "pcre"))]
    Pcre,

    /// POSIX extended regular expressions.
    #[cfg_attr(feature = "serde", serde(rename = "posix"))]
    Posix,

    /// JavaScript `RegExp`.
    #[cfg_attr(feature = "serde", serde(rename = "js"))]
    Ecma,

    /// Python `re`.
    #[cfg_attr(feature = "serde", serde(rename = "python"))]
    Python,
}

/// The tokenizer, explainers and feature table of a dialect.
pub struct Syntax {
    pub tokenize: for<'a> fn(&'a str) -> Vec<Token<'a>>,

    // describes the tokens of the pattern itself
    pub explain_source: fn(&str) -> String,

    // describes the marker tokens, `None` if the text is not a marker
    pub explain_marker: fn(&str) -> Option<String>,

    pub features: &'static FeatureTable,
}

impl Syntax {
    /// Describe a token produced by `tokenize`.
    pub fn explain_token(&self, token: &Token) -> String {
        if token.marker {
            if let Some(description) = (self.explain_marker)(token.text) {
                return description;
            }
        }

        (self.explain_source)(token.text)
    }

    /// Describe a token known only by its text, a text shaped like a
    /// marker of the dialect is taken as the marker.
    pub fn explain_text(&self, text: &str) -> String {
        (self.explain_marker)(text).unwrap_or_else(|| (self.explain_source)(text))
    }
}

fn without_marker(_: &str) -> Option<String> {
    None
}

static BASELINE_SYNTAX: Syntax = Syntax {
    tokenize: baseline::tokenize,
    explain_source: baseline::explain,
    explain_marker: without_marker,
    features: &BASELINE_FEATURES,
};

static PCRE_SYNTAX: Syntax = Syntax {
    tokenize: pcre::tokenize,
    explain_source: pcre::explain,
    explain_marker: without_marker,
    features: &PCRE_FEATURES,
};

static POSIX_SYNTAX: Syntax = Syntax {
    tokenize: posix::tokenize,
    explain_source: posix::explain,
    explain_marker: without_marker,
    features: &POSIX_FEATURES,
};

static ECMA_SYNTAX: Syntax = Syntax {
    tokenize: ecma::tokenize,
    explain_source: ecma::explain,
    explain_marker: ecma::explain_marker,
    features: &ECMA_FEATURES,
};

static PYTHON_SYNTAX: Syntax = Syntax {
    tokenize: python::tokenize,
    explain_source: python::explain,
    explain_marker: python::explain_marker,
    features: &PYTHON_FEATURES,
};

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Baseline,
        Dialect::Pcre,
        Dialect::Posix,
        Dialect::Ecma,
        Dialect::Python,
    ];

    /// The registry name, e.g. `go` and `js`.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Baseline => "go",
            Dialect::Pcre => "pcre",
            Dialect::Posix => "posix",
            Dialect::Ecma => "js",
            Dialect::Python => "python",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialect::Baseline => "Go Regexp",
            Dialect::Pcre => "Perl Compatible Regular Expressions (PCRE)",
            Dialect::Posix => "POSIX Extended Regular Expressions",
            Dialect::Ecma => "JavaScript RegExp",
            Dialect::Python => "Python re",
        }
    }

    pub fn syntax(&self) -> &'static Syntax {
        match self {
            Dialect::Baseline => &BASELINE_SYNTAX,
            Dialect::Pcre => &PCRE_SYNTAX,
            Dialect::Posix => &POSIX_SYNTAX,
            Dialect::Ecma => &ECMA_SYNTAX,
            Dialect::Python => &PYTHON_SYNTAX,
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = UnregexError;

    /// Exact, case-sensitive match of the registry names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s)
            .ok_or_else(|| UnregexError::UnknownDialect(s.to_owned()))
    }
}

/// Look up a dialect by its registry name, unknown and empty names
/// resolve to the default dialect.
pub fn resolve_dialect(name: &str) -> Dialect {
    match name.parse::<Dialect>() {
        Ok(dialect) => dialect,
        Err(e) => {
            log::debug!("{}, fallback to \"{}\"", e, Dialect::default());
            Dialect::default()
        }
    }
}
