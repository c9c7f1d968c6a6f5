// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements sign and parity predicates.

use super::bigint_core::{BigInt, Sign};

impl BigInt {
    /// Returns the raw sign bit: true iff `self` is negative.
    ///
    /// Unlike [`is_negative`](BigInt::is_negative), this does not assert
    /// `self` is non-zero — canonical zero reports `false`.
    pub fn sign(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true iff `self` is strictly greater than zero.
    ///
    /// Panics if `self` is zero.
    pub fn is_positive(&self) -> bool {
        assert!(!self.is_zero(), "is_positive called on zero");
        self.sign == Sign::Positive
    }

    /// Returns true iff `self` is strictly less than zero.
    ///
    /// Panics if `self` is zero.
    pub fn is_negative(&self) -> bool {
        assert!(!self.is_zero(), "is_negative called on zero");
        self.sign == Sign::Negative
    }

    /// Returns true iff `|self| == 1`.
    pub fn is_unit(&self) -> bool {
        self.as_digits() == [1]
    }

    /// Returns true iff `self` is divisible by two.
    pub fn is_even(&self) -> bool {
        self.as_digits()[0] % 2 == 0
    }

    /// Returns true iff `self` is not divisible by two.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns the number of decimal digits in `self`'s magnitude.
    pub fn size(&self) -> usize {
        self.digits_len
    }
}
