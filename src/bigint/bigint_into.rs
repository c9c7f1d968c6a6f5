// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements truncating conversions from `BigInt` to the standard integer
//! types.
//!
//! Conversions never fail or panic: values that don't fit the target width
//! are truncated with wrapping (two's-complement) semantics, the same
//! convention as the standard library's `as` casts between integers.

use super::bigint_core::{BigInt, Sign};

impl BigInt {
    /// Truncates `self` to a `u128`, wrapping on overflow.
    pub fn to_u128(&self) -> u128 {
        let magnitude = self
            .as_digits()
            .iter()
            .rev()
            .fold(0u128, |acc, &digit| acc.wrapping_mul(10).wrapping_add(digit as u128));
        if self.sign == Sign::Negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    /// Truncates `self` to an `i128`, wrapping on overflow.
    pub fn to_i128(&self) -> i128 {
        self.to_u128() as i128
    }

    /// Truncates `self` to a `u64`, wrapping on overflow.
    pub fn to_u64(&self) -> u64 {
        self.to_u128() as u64
    }

    /// Truncates `self` to an `i64`, wrapping on overflow.
    pub fn to_i64(&self) -> i64 {
        self.to_u128() as i64
    }

    /// Truncates `self` to a `u32`, wrapping on overflow.
    pub fn to_u32(&self) -> u32 {
        self.to_u128() as u32
    }

    /// Truncates `self` to an `i32`, wrapping on overflow.
    pub fn to_i32(&self) -> i32 {
        self.to_u128() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_i64_roundtrip() {
        for n in [0i64, 1, -1, 123456789, -123456789, i64::MAX, i64::MIN] {
            assert_eq!(BigInt::from(n).to_i64(), n);
        }
    }

    #[test]
    fn test_to_u64_roundtrip() {
        for n in [0u64, 1, 123456789, u64::MAX] {
            assert_eq!(BigInt::from(n).to_u64(), n);
        }
    }

    #[test]
    fn test_wrapping_truncation() {
        // `u64::MAX as u128 + 1` overflows a `u64` and wraps to 0.
        let value = BigInt::from(u64::MAX) + BigInt::one();
        assert_eq!(value.to_u64(), 0);
    }
}
