// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements Karatsuba multiplication over decimal magnitudes.

use super::add::add_digits;
use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::bigint_vec::DigitVec;
use super::len::len_digits;
use super::math::shift_digits_left;
use super::mul::{digitvec_multiplying_output, mul_digits};
use super::sub::sub_digits;
use std::cmp;

/// Splits a little-endian magnitude `x` into `(low, high)` at digit
/// position `m`, such that `x == low + high * 10^m`. Both halves are
/// trimmed to a valid (zero-padding-free) magnitude.
fn split(x: &BigUintSlice, m: usize) -> (DigitVec, DigitVec) {
    if x.len() <= m {
        return (x.to_vec(), vec![0]);
    }

    let low_raw = &x[..m];
    let low_len = len_digits(low_raw);
    let low = low_raw[..low_len].to_vec();

    let high_raw = &x[m..];
    let high_len = len_digits(high_raw);
    let high = high_raw[..high_len].to_vec();

    (low, high)
}

/// Multiplies magnitudes `a` and `b` via recursive Karatsuba
/// divide-and-conquer, falling back to schoolbook multiplication for
/// single-digit operands. Returns `(digits, digits_len)`.
pub(crate) fn mul_digits_karatsuba(a: &BigUintSlice, b: &BigUintSlice) -> (DigitVec, usize) {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));

    if a.len() == 1 || b.len() == 1 {
        let mut output = digitvec_multiplying_output(a.len(), b.len());
        let output_len = mul_digits(a, b, &mut output);
        return (output, output_len);
    }

    let m = (cmp::max(a.len(), b.len()) + 1) / 2;
    let (a_low, a_high) = split(a, m);
    let (b_low, b_high) = split(b, m);

    let (z2, z2_len) = mul_digits_karatsuba(&a_high, &b_high);
    let (z0, z0_len) = mul_digits_karatsuba(&a_low, &b_low);

    let sum_a = add_magnitudes(&a_low, &a_high);
    let sum_b = add_magnitudes(&b_low, &b_high);
    let (z1_raw, z1_raw_len) = mul_digits_karatsuba(&sum_a, &sum_b);

    // z1 = (low1+high1)*(low2+high2) - z2 - z0; both subtractions are of a
    // smaller-or-equal magnitude from a larger-or-equal one, since the
    // cross terms this strips out are non-negative.
    let z1_minus_z2 = sub_magnitudes(&z1_raw[..z1_raw_len], &z2[..z2_len]);
    let z1 = sub_magnitudes(&z1_minus_z2, &z0[..z0_len]);

    let z2_shifted = shift_digits_left(&z2[..z2_len], 2 * m);
    let z1_shifted = shift_digits_left(&z1, m);

    let sum = add_magnitudes(&z1_shifted, &z0[..z0_len]);
    let total = add_magnitudes(&sum, &z2_shifted);

    let total_len = len_digits(&total);
    (total, total_len)
}

fn add_magnitudes(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    let mut output = vec![0; cmp::max(a.len(), b.len()) + 1];
    let output_len = add_digits(a, b, &mut output);
    output.truncate(output_len);
    output
}

fn sub_magnitudes(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    let mut output = vec![0; a.len()];
    let output_len = sub_digits(a, b, &mut output);
    output.truncate(output_len);
    output
}
