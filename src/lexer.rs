// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The cursor shared by the dialect tokenizers.
//
// A tokenizer walks the pattern with a `Lexer`, inspecting the byte under
// the cursor and deciding which construct starts there. Every construct is
// pushed as a token with one of the `push_*` or `lex_*` methods, which
// first flush the pending literal run, so that literal characters between
// two constructs end up in a single token, e.g. `ab` in `ab*`.
//
// Malformed constructs never fail the tokenization. An unclosed `[` or `{`
// starts a new literal run instead, an unclosed group header is pushed as
// a bare `(`.

use crate::{
    location::Location,
    scanner::{find_closing_brace, find_closing_bracket, find_unescaped_byte},
    token::Token,
};

pub struct Lexer<'a> {
    source: &'a str,
    base: usize,                   // offset of `source` within the whole pattern
    index: usize,                  // the cursor, a byte offset within `source`
    literal_start: Option<usize>,  // start of the pending literal run
    token_with_ranges: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_base(source, 0)
    }

    /// Create a lexer over a part of a pattern which starts at byte
    /// offset `base`, e.g. the body of the JavaScript literal `/body/flags`.
    /// The token ranges are relative to the whole pattern.
    pub fn with_base(source: &'a str, base: usize) -> Self {
        Self {
            source,
            base,
            index: 0,
            literal_start: None,
            token_with_ranges: vec![],
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.index + offset).copied()
    }

    pub fn peek_byte_and_equals(&self, offset: usize, expected_byte: u8) -> bool {
        self.peek_byte(offset) == Some(expected_byte)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.source.as_bytes()[self.index..].starts_with(prefix.as_bytes())
    }

    /// Count the ASCII hex digits starting at `offset`, up to `max_count`.
    pub fn count_hex_digits(&self, offset: usize, max_count: usize) -> usize {
        (0..max_count)
            .take_while(|i| matches!(self.peek_byte(offset + i), Some(b) if b.is_ascii_hexdigit()))
            .count()
    }

    // The byte length of the char at `position`, 1 for the end of source.
    fn char_width_at(&self, position: usize) -> usize {
        self.source
            .get(position..)
            .and_then(|s| s.chars().next())
            .map_or(1, char::len_utf8)
    }

    fn range_of(&self, start: usize, end_excluded: usize) -> Location {
        Location::new_range(start, end_excluded - start).shift(self.base)
    }

    fn flush_literal(&mut self) {
        if let Some(start) = self.literal_start.take() {
            let token = Token::new(
                &self.source[start..self.index],
                self.range_of(start, self.index),
            );
            self.token_with_ranges.push(token);
        }
    }

    /// Append the char under the cursor to the pending literal run.
    pub fn push_literal_char(&mut self) {
        if self.literal_start.is_none() {
            self.literal_start = Some(self.index);
        }
        self.index += self.char_width_at(self.index);
    }

    /// Push the next `length` bytes as one token.
    pub fn push_span(&mut self, length: usize) {
        self.flush_literal();

        let start = self.index;
        let end = start + length;
        let token = Token::new(&self.source[start..end], self.range_of(start, end));
        self.token_with_ranges.push(token);
        self.index = end;
    }

    /// Push everything from the cursor to `end_included` as one token.
    pub fn push_until_included(&mut self, end_included: usize) {
        self.push_span(end_included - self.index + 1);
    }

    /// Push the next `length` bytes as a marker token.
    pub fn push_marker(&mut self, length: usize) {
        self.flush_literal();

        let start = self.index;
        let end = start + length;
        let token = Token::new_marker(&self.source[start..end], self.range_of(start, end));
        self.token_with_ranges.push(token);
        self.index = end;
    }

    /// Flush the pending literal run and start a new one with the char
    /// under the cursor, it is used when a construct can not be closed.
    pub fn restart_literal(&mut self) {
        self.flush_literal();
        self.push_literal_char();
    }

    pub fn finish(mut self) -> Vec<Token<'a>> {
        self.flush_literal();
        self.token_with_ranges
    }
}

impl Lexer<'_> {
    pub fn lex_charset(&mut self) {
        // [.....]?  //
        // ^      ^__// to here
        // |_________// current char, validated

        match find_closing_bracket(self.source, self.index) {
            Some(end) => self.push_until_included(end),
            None => {
                log::trace!("unclosed charset at {}", self.base + self.index);
                self.restart_literal();
            }
        }
    }

    pub fn lex_repetition(&mut self) {
        // {...}?  //
        // ^    ^__// to here
        // |_______// current char, validated

        match find_closing_brace(self.source, self.index) {
            Some(end) => self.push_until_included(end),
            None => {
                log::trace!("unclosed repetition at {}", self.base + self.index);
                self.restart_literal();
            }
        }
    }

    /// Push a backslash and the char following it, the char may be a
    /// multi-byte one.
    pub fn lex_escaping(&mut self) {
        // \x?  //
        // ^ ^__// to here
        // |____// current char, validated

        let width = 1 + self.char_width_at(self.index + 1);
        self.push_span(width);
    }

    /// Push `\` + `initial` + the text up to and including the first
    /// unescaped `closer` after the `opener`, e.g. `\k<name>` and `\p{L}`,
    /// or the plain two chars escape when the closer is missing.
    pub fn lex_escaping_with_delimiters(&mut self, opener: u8, closer: u8) {
        // \k<name>?  //
        // ^^^     ^__// to here
        // |||________// opener
        // ||_________// initial
        // |__________// current char, validated

        if self.peek_byte_and_equals(2, opener) {
            if let Some(end) = find_unescaped_byte(self.source, self.index + 3, closer) {
                self.push_until_included(end);
                return;
            }
        }

        log::trace!("incomplete escape sequence at {}", self.base + self.index);
        self.lex_escaping();
    }

    /// Push a simple quantifier (`*`, `+` or `?`), absorbing the following
    /// `suffix` char if there is one, e.g. the lazy `*?` or possessive `*+`.
    pub fn lex_quantifier(&mut self, suffix: Option<u8>) {
        match suffix {
            Some(b) if self.peek_byte_and_equals(1, b) => self.push_span(2),
            _ => self.push_span(1),
        }
    }

    /// Push a named group header which name begins at `name_offset`,
    /// e.g. `(?<name>` (offset 3) and `(?P<name>` (offset 4),
    /// or a bare `(` when the closing `>` is missing.
    pub fn lex_named_group(&mut self, name_offset: usize) {
        // (?P<name>?  //
        // ^        ^__// to here
        // |___________// current char, validated

        match find_unescaped_byte(self.source, self.index + name_offset, b'>') {
            Some(end) => self.push_until_included(end),
            None => {
                log::trace!("incomplete named group at {}", self.base + self.index);
                self.push_span(1);
            }
        }
    }
}
