// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

/// A byte range within the pattern text.
///
/// Ranges always start and end on character boundaries, so
/// `&pattern[location.as_range()]` never panics for a location produced
/// by a tokenizer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub index: usize,  // The byte offset of the first character
    pub length: usize, // The length of the range in bytes
}

impl Location {
    /// Create a new `Location` representing a range of text.
    pub fn new_range(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// The byte offset just past the end of the range.
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    pub fn as_range(&self) -> Range<usize> {
        self.index..self.end()
    }

    /// Move the range forward by `offset` bytes.
    pub fn shift(&self, offset: usize) -> Self {
        Self {
            index: self.index + offset,
            ..*self
        }
    }
}
