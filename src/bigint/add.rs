// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition operations.

use super::bigint_core::{BigInt, Sign};
use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::bigint_vec::{digitvec_with_len, DigitVec};
use super::cmp::cmp_digits;
use super::digit::Digit;
use super::helper_methods::carrying_add;
use super::sub::{digitvec_subtracting_output, sub_digits};
use std::cmp;
use std::cmp::Ordering;
use std::ops::Add;

/// Adds magnitudes `a` and `b`, filling the output into `result` and
/// returning the length of the output digits.
///
/// - `result` must have a length no less than the return value of
///   [`adding_output_max_len`].
/// - `result` will be filled with 0 first, and then the output digits.
#[inline]
pub(crate) fn add_digits(a: &BigUintSlice, b: &BigUintSlice, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));
    debug_assert!(result.len() >= adding_output_max_len(a.len(), b.len()));

    result.fill(0);

    // Employs the "long addition" algorithm: adding digits from the least
    // significant position to the most significant, and propagating the
    // resulting carry upwards.
    let (greater, smaller) = if cmp_digits(a, b) == cmp::Ordering::Less {
        (b, a)
    } else {
        (a, b)
    };
    let greater_digits_len = greater.len();
    let smaller_digits_len = smaller.len();

    let mut carry = false;
    let mut result_iter_mut = result.iter_mut();
    let mut result_digits_len = greater_digits_len;

    for (&smaller_digit, &greater_digit) in smaller.iter().zip(greater.iter()) {
        let digit_result = carrying_add(greater_digit, smaller_digit, carry);
        *result_iter_mut.next().unwrap() = digit_result.0;
        carry = digit_result.1;
    }

    if carry {
        for &digit in &greater[smaller_digits_len..] {
            let digit_result = carrying_add(digit, 0, carry);
            *result_iter_mut.next().unwrap() = digit_result.0;
            carry = digit_result.1;
        }
        if carry {
            *result_iter_mut.next().unwrap() = 1;
            result_digits_len += 1
        }
    } else {
        result[smaller_digits_len..greater_digits_len]
            .copy_from_slice(&greater[smaller_digits_len..]);
    }

    result_digits_len
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        let a = self.as_digits();
        let b = rhs.as_digits();

        match (self.sign, rhs.sign) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
                let mut output = digitvec_adding_output(a.len(), b.len());
                let output_len = add_digits(a, b, &mut output);
                BigInt::new(output, output_len, self.sign)
            }
            // Differing signs: addition reduces to subtracting the smaller
            // magnitude from the greater, keeping the sign of whichever
            // operand has the greater magnitude.
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => {
                match cmp_digits(a, b) {
                    Ordering::Less => {
                        let mut output = digitvec_subtracting_output(b.len());
                        let output_len = sub_digits(b, a, &mut output);
                        BigInt::new(output, output_len, rhs.sign)
                    }
                    _ => {
                        let mut output = digitvec_subtracting_output(a.len());
                        let output_len = sub_digits(a, b, &mut output);
                        BigInt::new(output, output_len, self.sign)
                    }
                }
            }
        }
    }
}

impl<'a> Add<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: &Self) -> Self::Output {
        (&self).add(rhs)
    }
}

impl<'a> Add<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> Self::Output {
        self.add(&rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        (&self).add(&rhs)
    }
}

/// Returns the length of the largest possible output of an addition
/// operation: a + b.
#[inline]
fn adding_output_max_len(a_len: usize, b_len: usize) -> usize {
    cmp::max(a_len, b_len) + 1
}

/// Creates a `DigitVec` which can be used as output of an addition
/// operation: a + b.
#[inline]
pub(crate) fn digitvec_adding_output(a_len: usize, b_len: usize) -> DigitVec {
    let max_len = adding_output_max_len(a_len, b_len);
    digitvec_with_len(max_len)
}

/// Same as [`digitvec_adding_output`], except the resulting `DigitVec` will
/// be filled with 1 instead of 0.
///
/// Can be used to test that the addition operations will first reset the
/// output state.
#[cfg(test)]
#[inline]
fn digitvec_adding_output_filled_1(a_len: usize, b_len: usize) -> DigitVec {
    let mut vec = digitvec_adding_output(a_len, b_len);
    vec.fill(1);
    vec
}
