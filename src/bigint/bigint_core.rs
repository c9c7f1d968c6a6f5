// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `BigInt`.

use super::digit::Digit;

/// An arbitrary-precision signed integer.
///
/// Digits are stored in little-endian order, e.g., the "least significant
/// digit" is stored at position 0. Every live digit is a decimal digit in
/// `0..=9`; the buffer carries no leading (most-significant) zeros except
/// for the canonical representation of zero itself, which is the single
/// digit `0`.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) digits_storage: Vec<Digit>,
    pub(crate) digits_len: usize, // The length of digits stored in `digits_storage`
    pub(crate) sign: Sign,
}

impl BigInt {
    pub(crate) fn is_sign_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

/// Denotes the sign of a big integer.
///
/// A big integer, including 0, can be denoted as either positive or
/// negative internally, but canonical zero is always normalized to
/// `Positive` (there is no negative zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}
