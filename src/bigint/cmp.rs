// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements comparing operations.

use super::bigint_core::{BigInt, Sign};
use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use std::cmp::Ordering;

/// Returns true if `a` and `b` are equal (as magnitudes).
fn eq_digits(a: &BigUintSlice, b: &BigUintSlice) -> bool {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));

    a == b
}

/// Returns an `Ordering` between the magnitudes `a` and `b`.
pub(crate) fn cmp_digits(a: &BigUintSlice, b: &BigUintSlice) -> Ordering {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));

    let a_digits_len = a.len();
    let b_digits_len = b.len();
    match a_digits_len.cmp(&b_digits_len) {
        Ordering::Greater => Ordering::Greater,
        Ordering::Less => Ordering::Less,
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
    }
}

impl PartialEq<Self> for BigInt {
    fn eq(&self, other: &Self) -> bool {
        // Canonical zero is always `Sign::Positive` (see the §3 invariant),
        // so a plain sign-and-magnitude comparison is exact here.
        self.sign == other.sign && eq_digits(self.as_digits(), other.as_digits())
    }
}

impl Eq for BigInt {}

impl PartialOrd<Self> for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Total order over signed values: non-negative sorts above negative;
    /// among equal-sign values, larger magnitude is greater for
    /// non-negative values and lesser for negative values.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => cmp_digits(self.as_digits(), other.as_digits()),
            (Sign::Negative, Sign::Negative) => {
                cmp_digits(self.as_digits(), other.as_digits()).reverse()
            }
        }
    }
}

/// Returns an `i32` whose sign encodes the ordering between `a` and `b`
/// (negative, zero, or positive), mirroring the ported API's three-valued
/// `compare` contract.
pub fn compare(a: &BigInt, b: &BigInt) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::bigint_vec::digits_be;

    #[test]
    fn test_eq() {
        let a = digits_be!(3, 2, 1);
        let b = digits_be!(3, 2, 1);
        assert_eq!(&a, &b);
        assert_eq!(cmp_digits(&a, &b), Ordering::Equal);

        // least significant digits are zeros
        let a = digits_be!(3, 2, 1, 0);
        let b = digits_be!(3, 2, 1, 0);
        assert_eq!(&a, &b);
        assert_eq!(cmp_digits(&a, &b), Ordering::Equal);

        // zero
        let a = digits_be!(0);
        let b = digits_be!(0);
        assert_eq!(&a, &b);
        assert_eq!(cmp_digits(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_not_eq() {
        let a = digits_be!(0);
        let b = digits_be!(1);
        assert_ne!(&a, &b);

        let a = digits_be!(3, 7, 1);
        let b = digits_be!(3, 2, 1);
        assert_ne!(&a, &b);

        // least significant digits are zeros
        let a = digits_be!(3, 2, 1);
        let b = digits_be!(3, 2, 1, 0);
        assert_ne!(&a, &b);
    }

    #[test]
    fn test_less() {
        let a = digits_be!(3, 2, 1);
        let b = digits_be!(3, 2, 2);
        assert_eq!(cmp_digits(&a, &b), Ordering::Less);

        let a = digits_be!(3, 2, 1);
        let b = digits_be!(1, 3, 2, 1);
        assert_eq!(cmp_digits(&a, &b), Ordering::Less);

        let a = digits_be!(0);
        let b = digits_be!(1);
        assert_eq!(cmp_digits(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_greater() {
        let a = digits_be!(3, 2, 2);
        let b = digits_be!(3, 2, 1);
        assert_eq!(cmp_digits(&a, &b), Ordering::Greater);

        let a = digits_be!(1, 3, 2, 1);
        let b = digits_be!(3, 2, 1);
        assert_eq!(cmp_digits(&a, &b), Ordering::Greater);

        let a = digits_be!(1, 1);
        let b = digits_be!(1, 0);
        assert_eq!(cmp_digits(&a, &b), Ordering::Greater);

        let a = digits_be!(1);
        let b = digits_be!(0);
        assert_eq!(cmp_digits(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_signed_total_order() {
        use crate::bigint::BigInt;

        let mut values: Vec<i64> = vec![5, -5, 0, 3, -3, 100, -100, 1, -1];
        let mut bigints: Vec<BigInt> = values.iter().map(|&n| BigInt::from(n)).collect();

        values.sort();
        bigints.sort();

        let from_sorted_bigints: Vec<i64> = bigints.iter().map(|b| b.to_i64()).collect();
        assert_eq!(values, from_sorted_bigints);
    }

    mod properties {
        use super::super::*;
        use ::quickcheck_macros::quickcheck;
        use crate::bigint::BigInt;

        #[quickcheck]
        fn antisymmetric(a: i32, b: i32) -> bool {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            compare(&a, &b) * compare(&b, &a) <= 0
        }

        #[quickcheck]
        fn equal_iff_compare_zero(a: i32, b: i32) -> bool {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            (compare(&a, &b) == 0) == (a == b)
        }

        #[quickcheck]
        fn transitive(a: i32, b: i32, c: i32) -> bool {
            let (a, b, c) = (BigInt::from(a), BigInt::from(b), BigInt::from(c));
            !(a <= b && b <= c) || a <= c
        }
    }

    #[test]
    fn test_compare() {
        use crate::bigint::BigInt;

        assert_eq!(compare(&BigInt::from(1), &BigInt::from(2)), -1);
        assert_eq!(compare(&BigInt::from(2), &BigInt::from(2)), 0);
        assert_eq!(compare(&BigInt::from(3), &BigInt::from(2)), 1);
    }
}
