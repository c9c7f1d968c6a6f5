// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication operations.

use super::bigint_core::{BigInt, Sign};
use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::bigint_vec::{digitvec_with_len, DigitVec};
use super::digit::{Digit, DoubleDigit};
use super::karatsuba::mul_digits_karatsuba;
use super::len::len_digits;
use super::ntt::mul_digits_ntt;
use std::ops::Mul;

/// Below this digit count (for both operands), `Auto` picks schoolbook
/// multiplication over Karatsuba.
pub(crate) const KARATSUBA_THRESHOLD_DIGITS: usize = 750;

/// Selects which multiplication algorithm to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiplyStrategy {
    /// Picks schoolbook or Karatsuba based on operand size. Never picks
    /// NTT; that path must be chosen explicitly.
    Auto,
    /// `O(n*m)` long multiplication.
    Schoolbook,
    /// Recursive three-multiplication divide-and-conquer.
    Karatsuba,
    /// Number-theoretic-transform convolution.
    Ntt,
}

/// Multiplies magnitudes `a` and `b` with schoolbook (long) multiplication,
/// filling the output into `result` and returning the length of the output
/// digits.
///
/// `result` must have a length no less than `a.len() + b.len()`.
pub(crate) fn mul_digits(a: &BigUintSlice, b: &BigUintSlice, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));
    debug_assert!(result.len() >= a.len() + b.len());

    result.fill(0);

    // For every digit of `a`, accumulates `a_digit * b` shifted into the
    // running output window, propagating a base-10 carry across the window.
    for (i, &a_digit) in a.iter().enumerate() {
        if a_digit == 0 {
            continue;
        }
        let mut carry: DoubleDigit = 0;
        for (j, &b_digit) in b.iter().enumerate() {
            let position = &mut result[i + j];
            let product = a_digit as DoubleDigit * b_digit as DoubleDigit
                + *position as DoubleDigit
                + carry;
            *position = (product % 10) as Digit;
            carry = product / 10;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let position = &mut result[k];
            let sum = *position as DoubleDigit + carry;
            *position = (sum % 10) as Digit;
            carry = sum / 10;
            k += 1;
        }
    }

    len_digits(&result[..a.len() + b.len()])
}

/// Creates a `DigitVec` which can be used as output of a multiplication
/// operation: a * b.
#[inline]
pub(crate) fn digitvec_multiplying_output(a_len: usize, b_len: usize) -> DigitVec {
    digitvec_with_len(a_len + b_len)
}

/// Multiplies `a` and `b` using the given `strategy`.
pub fn multiply_with_strategy(a: &BigInt, b: &BigInt, strategy: MultiplyStrategy) -> BigInt {
    let a_digits = a.as_digits();
    let b_digits = b.as_digits();

    let strategy = match strategy {
        MultiplyStrategy::Auto => {
            if a_digits.len() < KARATSUBA_THRESHOLD_DIGITS
                && b_digits.len() < KARATSUBA_THRESHOLD_DIGITS
            {
                MultiplyStrategy::Schoolbook
            } else {
                MultiplyStrategy::Karatsuba
            }
        }
        other => other,
    };

    let (output, output_len) = match strategy {
        MultiplyStrategy::Schoolbook => {
            let mut output = digitvec_multiplying_output(a_digits.len(), b_digits.len());
            let output_len = mul_digits(a_digits, b_digits, &mut output);
            (output, output_len)
        }
        MultiplyStrategy::Karatsuba => mul_digits_karatsuba(a_digits, b_digits),
        MultiplyStrategy::Ntt => mul_digits_ntt(a_digits, b_digits),
        MultiplyStrategy::Auto => unreachable!("resolved above"),
    };

    let sign = if a.sign == b.sign {
        Sign::Positive
    } else {
        Sign::Negative
    };
    BigInt::new(output, output_len, sign)
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        multiply_with_strategy(self, rhs, MultiplyStrategy::Auto)
    }
}

impl<'a> Mul<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &Self) -> Self::Output {
        (&self).mul(rhs)
    }
}

impl<'a> Mul<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> Self::Output {
        self.mul(&rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul(&rhs)
    }
}
