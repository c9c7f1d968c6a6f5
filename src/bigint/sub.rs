// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements subtraction operations.

use super::add::{add_digits, digitvec_adding_output};
use super::bigint_core::{BigInt, Sign};
use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::bigint_vec::{digitvec_with_len, DigitVec};
use super::cmp::cmp_digits;
use super::digit::Digit;
use super::helper_methods::borrowing_sub;
use std::cmp::Ordering;
use std::ops::Sub;

/// Subtracts magnitude `b` from magnitude `a`, filling the output into
/// `result` and returning the length of the output digits.
///
/// - `a` must be greater than or equal to `b` (as magnitudes).
/// - `result` must have a length no less than `a.len()`.
/// - `result` will be filled with 0 first, and then the output digits.
#[inline]
pub(crate) fn sub_digits(a: &BigUintSlice, b: &BigUintSlice, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));
    debug_assert_ne!(cmp_digits(a, b), Ordering::Less);
    debug_assert!(result.len() >= a.len());

    result.fill(0);

    // Employs the "long subtraction" algorithm: subtracting digits from the
    // least significant position to the most significant, and propagating
    // the resulting borrow upwards.
    let b_digits_len = b.len();

    let mut borrow = false;
    let mut result_iter_mut = result.iter_mut();

    for (&a_digit, &b_digit) in a.iter().zip(b.iter()) {
        let digit_result = borrowing_sub(a_digit, b_digit, borrow);
        *result_iter_mut.next().unwrap() = digit_result.0;
        borrow = digit_result.1;
    }

    for &a_digit in &a[b_digits_len..] {
        let digit_result = borrowing_sub(a_digit, 0, borrow);
        *result_iter_mut.next().unwrap() = digit_result.0;
        borrow = digit_result.1;
    }
    debug_assert!(!borrow, "a must be no less than b");

    super::len::len_digits(&result[..a.len()])
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        let a = self.as_digits();
        let b = rhs.as_digits();

        match (self.sign, rhs.sign) {
            // Differing signs: subtraction reduces to adding the magnitudes,
            // keeping the sign of the minuend (`self`).
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => {
                let mut output = digitvec_adding_output(a.len(), b.len());
                let output_len = add_digits(a, b, &mut output);
                BigInt::new(output, output_len, self.sign)
            }
            // Same signs: subtracting the smaller magnitude from the greater
            // one. When the subtrahend's magnitude is greater, the result's
            // sign flips relative to the minuend's.
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
                match cmp_digits(a, b) {
                    Ordering::Less => {
                        let mut output = digitvec_subtracting_output(b.len());
                        let output_len = sub_digits(b, a, &mut output);
                        BigInt::new(output, output_len, flip(self.sign))
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

impl<'a> Sub<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &Self) -> Self::Output {
        (&self).sub(rhs)
    }
}

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> Self::Output {
        self.sub(&rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        (&self).sub(&rhs)
    }
}

#[inline]
fn flip(sign: Sign) -> Sign {
    match sign {
        Sign::Positive => Sign::Negative,
        Sign::Negative => Sign::Positive,
    }
}

/// Creates a `DigitVec` which can be used as output of a subtraction
/// operation: a - b, where a is no less than b.
#[inline]
pub(crate) fn digitvec_subtracting_output(a_len: usize) -> DigitVec {
    digitvec_with_len(a_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::bigint_vec::digits_be;

    #[test]
    fn test_sub_digits() {
        // `data`: [(a, b, result)]
        let data = [
            // no borrowing
            (digits_be!(4, 5, 6), digits_be!(1, 2, 3), digits_be!(3, 3, 3)),
            // borrowing without propagating
            (digits_be!(4, 5, 3), digits_be!(1, 2, 9), digits_be!(3, 2, 4)),
            // borrowing with propagating
            (digits_be!(5, 0, 0), digits_be!(1, 0, 1), digits_be!(3, 9, 9)),
            // most significant digit becomes zero and trims away
            (digits_be!(1, 0, 0), digits_be!(9, 9), digits_be!(1)),
            // equal operands
            (digits_be!(5, 5, 5), digits_be!(5, 5, 5), digits_be!(0)),
        ];

        for (a, b, result) in data {
            let mut output = digitvec_subtracting_output(a.len());
            let output_len = sub_digits(&a, &b, &mut output);
            assert_eq!(result.len(), output_len);
            assert_eq!(result, output[..output_len]);
        }
    }

    mod properties {
        use super::super::*;
        use ::quickcheck_macros::quickcheck;

        #[quickcheck]
        fn subtractive_identity(x: i64) -> bool {
            let x = BigInt::from(x);
            &x - BigInt::zero() == x
        }

        #[quickcheck]
        fn self_subtraction_is_zero(x: i64) -> bool {
            let x = BigInt::from(x);
            (&x - &x).is_zero()
        }
    }

    #[test]
    fn test_signed_sub() {
        let data: Vec<(i64, i64)> = vec![
            (0, 0),
            (2, 1),
            (1, 2),
            (1, 1),
            (-2, -1),
            (-1, -2),
            (-1, -1),
            (2, -1),
            (-2, 1),
            (1, -2),
            (-1, 2),
            (1, -1),
            (-1, 1),
        ];
        for (a, b) in data {
            let c = BigInt::from(a - b);
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            assert_eq!(a - b, c)
        }
    }
}
