// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements exponentiation and decimal left-shift (multiply by a power of
//! ten).

use super::bigint_core::BigInt;
use super::bigint_vec::DigitVec;
use super::digit::Digit;
use super::half::half;
use super::len::len_digits;

/// Prepends `p` zero digits at the low end of a little-endian magnitude
/// (a decimal left shift by `p` places).
pub(crate) fn shift_digits_left(digits: &[Digit], p: usize) -> DigitVec {
    let mut output = Vec::with_capacity(digits.len() + p);
    output.resize(p, 0);
    output.extend_from_slice(digits);
    output
}

/// Returns `n * 10^p`.
pub fn multiply_by_pow10(n: &BigInt, p: usize) -> BigInt {
    if n.is_zero() || p == 0 {
        return n.clone();
    }
    let shifted = shift_digits_left(n.as_digits(), p);
    let shifted_len = len_digits(&shifted);
    BigInt::new(shifted, shifted_len, n.sign)
}

/// Returns `base ^ exp` via right-to-left binary exponentiation.
///
/// Panics if `exp` is negative.
pub fn power(base: &BigInt, exp: &BigInt) -> BigInt {
    assert!(!exp.is_sign_negative(), "power: exp must be non-negative");

    let mut result = BigInt::one();
    let mut a = base.clone();
    let mut e = exp.clone();

    while !e.is_zero() {
        if e.is_odd() {
            result = result * a.clone();
            e = e.decrement();
        }
        e = half(&e);
        a = a.clone() * a;
    }

    result
}
