// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub enum UnregexError {
    // The name does not match any of the registry names.
    UnknownDialect(String),
}

impl Display for UnregexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnregexError::UnknownDialect(name) => write!(
                f,
                "Unsupported regex dialect \"{}\", supported dialects: go, pcre, posix, js, python.",
                name
            ),
        }
    }
}

impl std::error::Error for UnregexError {}
