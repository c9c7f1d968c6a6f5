// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines the error returned when parsing malformed decimal text.

use std::fmt;
use std::fmt::Display;

/// An error returned by [`BigInt::from_decimal_str`](super::BigInt::from_decimal_str).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseBigIntError {
    /// The input had no digits (either empty, or a lone sign character).
    Empty,
    /// A non-decimal-digit character was found.
    InvalidDigit(char),
}

impl Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBigIntError::Empty => write!(f, "cannot parse integer from empty string"),
            ParseBigIntError::InvalidDigit(c) => {
                write!(f, "invalid digit found in string: {c:?}")
            }
        }
    }
}

impl std::error::Error for ParseBigIntError {}
