// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements Euclidean division: schoolbook long division driven by a slow
//! subtractive single-digit quotient primitive.
//!
//! Deliberately not Knuth's Algorithm D (digit-guess-and-correct): the
//! slower `O(q')` subtractive primitive (`q' <= 9` per call) is what this
//! crate's division contract calls for, at the cost of the asymptotic speed
//! Algorithm D would give on the teacher crate's own binary-limb division.

use super::bigint_core::{BigInt, Sign};
use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::cmp::cmp_digits;
use super::digit::Digit;
use super::len::len_digits;
use super::sub::sub_digits;
use std::cmp::Ordering;
use std::ops::{Div, Rem};

/// Divides magnitude `a` by magnitude `b` (`b` must not be the canonical
/// zero), returning `(quotient, remainder)` as little-endian magnitudes
/// with `remainder < b`.
fn divide_magnitudes(a: &BigUintSlice, b: &BigUintSlice) -> (Vec<Digit>, Vec<Digit>) {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));
    debug_assert!(!(b.len() == 1 && b[0] == 0), "division by zero");

    if cmp_digits(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }

    // Most-significant-first view of the dividend, to walk it one digit at
    // a time the way long division is taught.
    let a_be: Vec<Digit> = a.iter().rev().copied().collect();
    let mut quotient_be: Vec<Digit> = Vec::with_capacity(a_be.len());
    // "current", also kept most-significant-first; grows by one pulled-down
    // digit per iteration.
    let mut current_be: Vec<Digit> = Vec::new();

    for &digit in &a_be {
        current_be.push(digit);
        while current_be.len() > 1 && current_be[0] == 0 {
            current_be.remove(0);
        }

        let current_le: Vec<Digit> = current_be.iter().rev().copied().collect();
        if cmp_digits(&current_le, b) == Ordering::Less {
            quotient_be.push(0);
            continue;
        }

        // The slow single-digit quotient primitive: repeatedly subtract
        // `b` from `current`, counting, until `current < b`. Bounded by 9
        // iterations since `current < 10 * b` by construction (it grew by
        // pulling down exactly one more digit than fit the previous
        // remainder).
        let mut q: Digit = 0;
        let mut remainder_le = current_le;
        while cmp_digits(&remainder_le, b) != Ordering::Less {
            let mut scratch = vec![0; remainder_le.len()];
            let scratch_len = sub_digits(&remainder_le, b, &mut scratch);
            scratch.truncate(scratch_len);
            remainder_le = scratch;
            q += 1;
        }
        quotient_be.push(q);

        current_be = remainder_le.iter().rev().copied().collect();
        if current_be.is_empty() {
            current_be = vec![0];
        }
    }

    let mut quotient_le: Vec<Digit> = quotient_be.iter().rev().copied().collect();
    let quotient_len = len_digits(&quotient_le);
    quotient_le.truncate(quotient_len);

    let mut remainder_le: Vec<Digit> = current_be.iter().rev().copied().collect();
    if remainder_le.is_empty() {
        remainder_le = vec![0];
    }
    let remainder_len = len_digits(&remainder_le);
    remainder_le.truncate(remainder_len);

    (quotient_le, remainder_le)
}

/// Returns `a / b` and the "mathematician's" remainder of `a / b` (whose
/// sign always aligns with `b`'s sign, or is zero), satisfying
/// `quotient * b + remainder == a`. Panics if `b` is zero.
fn quotient_and_remainder(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    assert!(!b.is_zero(), "division by zero");

    let (raw_quotient_digits, raw_remainder_digits) =
        divide_magnitudes(a.as_digits(), b.as_digits());
    let raw_quotient_len = len_digits(&raw_quotient_digits);
    let raw_quotient = BigInt::new(raw_quotient_digits, raw_quotient_len, Sign::Positive);
    let raw_remainder_len = len_digits(&raw_remainder_digits);
    let raw_remainder = BigInt::new(raw_remainder_digits, raw_remainder_len, Sign::Positive);

    let same_sign = a.sign == b.sign;

    if same_sign || raw_remainder.is_zero() {
        let quotient = if same_sign {
            raw_quotient
        } else {
            raw_quotient.negate()
        };
        let remainder = match (a.is_sign_negative(), b.is_sign_negative()) {
            (true, true) => raw_remainder.negate(),
            _ => raw_remainder,
        };
        return (quotient, remainder);
    }

    // Mixed signs with a non-zero raw remainder: the truncating quotient
    // undershoots the mathematician's-remainder convention by one; bump
    // its magnitude and flip the remainder over to the divisor's side.
    let quotient = raw_quotient.increment().negate();
    let remainder = if a.is_sign_negative() {
        b - &raw_remainder
    } else {
        b + &raw_remainder
    };
    (quotient, remainder)
}

/// Returns `a / b` (floored so that `quotient * b + remainder == a` holds
/// for [`remainder`]'s mathematician's-remainder convention). Panics if `b`
/// is zero.
pub fn quotient(a: &BigInt, b: &BigInt) -> BigInt {
    quotient_and_remainder(a, b).0
}

/// Returns the "mathematician's" remainder of `a / b`: its sign always
/// aligns with `b`'s sign (or is zero). Panics if `b` is zero.
pub fn remainder(a: &BigInt, b: &BigInt) -> BigInt {
    quotient_and_remainder(a, b).1
}

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        quotient(self, rhs)
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        quotient(&self, &rhs)
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        remainder(self, rhs)
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        remainder(&self, &rhs)
    }
}
