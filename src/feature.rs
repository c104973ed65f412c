// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// A regex capability which support differs between dialects.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FeatureKey {
    Lookahead,     // (?=...) (?!...)
    Lookbehind,    // (?<=...) (?<!...)
    NamedGroup,    // (?<name>...) (?P<name>...)
    AtomicGroup,   // (?>...)
    Conditional,   // (?(cond)then|else)
    Possessive,    // a*+ a++ a?+
    UnicodeClass,  // \p{Property}
    Recursion,     // (?R)
    Backreference, // \1
    NamedBackref,  // \k<name>
}

impl FeatureKey {
    pub const COUNT: usize = 10;

    /// All keys, in the order the capability matrix lists them.
    pub const ALL: [FeatureKey; FeatureKey::COUNT] = [
        FeatureKey::Lookahead,
        FeatureKey::Lookbehind,
        FeatureKey::NamedGroup,
        FeatureKey::AtomicGroup,
        FeatureKey::Conditional,
        FeatureKey::Possessive,
        FeatureKey::UnicodeClass,
        FeatureKey::Recursion,
        FeatureKey::Backreference,
        FeatureKey::NamedBackref,
    ];

    /// The name used to query the catalog, e.g. `named-group`.
    pub fn key(&self) -> &'static str {
        match self {
            FeatureKey::Lookahead => "lookahead",
            FeatureKey::Lookbehind => "lookbehind",
            FeatureKey::NamedGroup => "named-group",
            FeatureKey::AtomicGroup => "atomic-group",
            FeatureKey::Conditional => "conditional",
            FeatureKey::Possessive => "possessive",
            FeatureKey::UnicodeClass => "unicode-class",
            FeatureKey::Recursion => "recursion",
            FeatureKey::Backreference => "backreference",
            FeatureKey::NamedBackref => "named-backref",
        }
    }

    /// Exact match of `key()`, `None` for unknown names.
    pub fn from_key(key: &str) -> Option<FeatureKey> {
        FeatureKey::ALL.into_iter().find(|feature| feature.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeatureKey::Lookahead => "Lookahead",
            FeatureKey::Lookbehind => "Lookbehind",
            FeatureKey::NamedGroup => "Named Groups",
            FeatureKey::AtomicGroup => "Atomic Groups",
            FeatureKey::Conditional => "Conditionals",
            FeatureKey::Possessive => "Possessive Quantifiers",
            FeatureKey::UnicodeClass => "Unicode Properties",
            FeatureKey::Recursion => "Recursion",
            FeatureKey::Backreference => "Backreferences",
            FeatureKey::NamedBackref => "Named Backreferences",
        }
    }

    /// A short syntax sample of the feature.
    pub fn syntax(&self) -> &'static str {
        match self {
            FeatureKey::Lookahead => "(?=pattern) or (?!pattern)",
            FeatureKey::Lookbehind => "(?<=pattern) or (?<!pattern)",
            FeatureKey::NamedGroup => "(?P<n>pattern)",
            FeatureKey::AtomicGroup => "(?>pattern)",
            FeatureKey::Conditional => "(?(cond)then|else)",
            FeatureKey::Possessive => "a++, a*+, a?+",
            FeatureKey::UnicodeClass => "\\p{Property}",
            FeatureKey::Recursion => "(?R) or (?0)",
            FeatureKey::Backreference => "\\1, \\2, etc.",
            FeatureKey::NamedBackref => "\\k<n>",
        }
    }
}

impl Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The support of every `FeatureKey` in one dialect.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureTable {
    // indexed by `FeatureKey as usize`
    supported: [bool; FeatureKey::COUNT],
}

impl FeatureTable {
    const fn new(supported: [bool; FeatureKey::COUNT]) -> Self {
        Self { supported }
    }

    pub fn get(&self, feature: FeatureKey) -> bool {
        self.supported[feature as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, bool)> + '_ {
        FeatureKey::ALL
            .into_iter()
            .map(move |feature| (feature, self.get(feature)))
    }
}

// Order of the columns:
// lookahead, lookbehind, named group, atomic group, conditional,
// possessive, unicode class, recursion, backreference, named backreference

// Go regexp, no lookbehind, no atomic groups
pub const BASELINE_FEATURES: FeatureTable = FeatureTable::new([
    true, false, true, false, false, false, true, false, true, true,
]);

// PCRE supports all of them
pub const PCRE_FEATURES: FeatureTable = FeatureTable::new([true; FeatureKey::COUNT]);

// POSIX ERE only has back references
pub const POSIX_FEATURES: FeatureTable = FeatureTable::new([
    false, false, false, false, false, false, false, false, true, false,
]);

// JavaScript, lookbehind and named groups need a recent engine,
// unicode properties need the `u` flag
pub const ECMA_FEATURES: FeatureTable = FeatureTable::new([
    true, true, true, false, false, false, true, false, true, true,
]);

pub const PYTHON_FEATURES: FeatureTable = FeatureTable::new([
    true, true, true, false, false, false, true, false, true, true,
]);
