// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements greatest common divisor via subtractive Euclid.
//!
//! Deliberately not the teacher crate's own Lehmer/extended-Euclidean GCD
//! (used there for modular inverses); this crate calls only for the
//! simpler, asymptotically slower subtractive primitive.

use super::bigint_core::BigInt;
use super::cmp::cmp_digits;
use std::cmp::Ordering;

/// Returns `gcd(a, b)`, always non-negative. `gcd(a, 0) == |a|` for
/// `a != 0`; `gcd(0, 0) == 0` by convention.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut x = a.clone().abs();
    let mut y = b.clone().abs();

    while !x.is_zero() && !y.is_zero() && x != y {
        match cmp_digits(x.as_digits(), y.as_digits()) {
            Ordering::Greater => x = x - &y,
            _ => y = y - &x,
        }
    }

    if x.is_zero() {
        y
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&BigInt::from(462), &BigInt::from(1071)), BigInt::from(21));
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(5)), BigInt::from(5));
        assert_eq!(gcd(&BigInt::from(5), &BigInt::from(0)), BigInt::from(5));
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(0)), BigInt::zero());
    }

    #[test]
    fn test_gcd_ignores_sign() {
        assert_eq!(gcd(&BigInt::from(-462), &BigInt::from(1071)), BigInt::from(21));
        assert_eq!(gcd(&BigInt::from(-462), &BigInt::from(-1071)), BigInt::from(21));
    }

    #[test]
    fn test_gcd_divides_both() {
        let a = BigInt::from(8184);
        let b = BigInt::from(23496);
        let g = gcd(&a, &b);
        assert!(super::super::divrem::remainder(&a, &g).is_zero());
        assert!(super::super::divrem::remainder(&b, &g).is_zero());
    }

    mod properties {
        use super::super::*;
        use crate::bigint::divrem::remainder;
        use ::quickcheck_macros::quickcheck;

        #[quickcheck]
        fn gcd_divides_both(a: i32, b: i32) -> bool {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let g = gcd(&a, &b);
            if g.is_zero() {
                return a.is_zero() && b.is_zero();
            }
            remainder(&a, &g).is_zero() && remainder(&b, &g).is_zero()
        }

        #[quickcheck]
        fn gcd_with_zero_is_abs(a: i32) -> bool {
            if a == 0 {
                return true;
            }
            let a = BigInt::from(a);
            gcd(&a, &BigInt::zero()) == a.clone().abs()
        }
    }
}
