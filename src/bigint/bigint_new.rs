// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements constructors of `BigInt`.

use super::bigint_core::{BigInt, Sign};
use super::bigint_vec::DigitVec;
use super::digit::Digit;
use super::error::ParseBigIntError;
use super::len::len_digits;
use super::zero::is_zero_digits;

impl BigInt {
    /// Creates a `BigInt` out of `digits_storage`, trusting that only the
    /// first `digits_len` digits are live (the rest, if any, is
    /// unspecified capacity left over from the caller's scratch buffer).
    ///
    /// Canonical zero is always normalized to [`Sign::Positive`], regardless
    /// of the `sign` passed in.
    pub(crate) fn new(mut digits_storage: DigitVec, digits_len: usize, sign: Sign) -> BigInt {
        debug_assert!(digits_len > 0);
        debug_assert!(digits_len <= digits_storage.len());
        debug_assert_eq!(len_digits(&digits_storage[..digits_len]), digits_len);

        digits_storage.truncate(digits_len);
        let sign = if is_zero_digits(&digits_storage) {
            Sign::Positive
        } else {
            sign
        };

        BigInt {
            digits_storage,
            digits_len,
            sign,
        }
    }

    /// Returns the canonical zero.
    pub fn zero() -> BigInt {
        BigInt::new(vec![0], 1, Sign::Positive)
    }

    /// Returns the canonical one.
    pub fn one() -> BigInt {
        BigInt::new(vec![1], 1, Sign::Positive)
    }

    /// Parses a `BigInt` from a decimal string.
    ///
    /// The string may carry a leading `+` or `-`; the remainder must be one
    /// or more ASCII decimal digits. Leading zeros are accepted and
    /// silently trimmed (e.g. `"007"` parses to the same value as `"7"`).
    pub fn from_decimal_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        let mut chars = s.chars().peekable();

        let sign = match chars.peek() {
            None => return Err(ParseBigIntError::Empty),
            Some('+') => {
                chars.next();
                Sign::Positive
            }
            Some('-') => {
                chars.next();
                Sign::Negative
            }
            Some(_) => Sign::Positive,
        };

        let mut digits: Vec<Digit> = Vec::with_capacity(s.len());
        for c in chars {
            match c.to_digit(10) {
                Some(d) => digits.push(d as Digit),
                None => return Err(ParseBigIntError::InvalidDigit(c)),
            }
        }
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        // The input is big-endian text; this crate's internal storage is
        // little-endian.
        digits.reverse();

        let digits_len = len_digits(&digits);
        Ok(BigInt::new(digits, digits_len, sign))
    }
}
