// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication via a number-theoretic transform (NTT): a
//! fast-convolution technique reachable only through an explicit
//! [`MultiplyStrategy::Ntt`](super::mul::MultiplyStrategy) choice.

use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::bigint_vec::DigitVec;
use super::digit::Digit;
use super::len::len_digits;

/// A standard NTT-friendly prime: `119 * 2^23 + 1`.
const MODULUS: u64 = 998_244_353;
/// A primitive root of `MODULUS`.
const PRIMITIVE_ROOT: u64 = 3;

fn modpow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1u64;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result
}

fn modinv(a: u64, modulus: u64) -> u64 {
    modpow(a, modulus - 2, modulus)
}

/// Runs an in-place NTT (or its inverse) on `a`, whose length must be a
/// power of two. The root of unity for the current transform length is
/// derived at runtime from [`PRIMITIVE_ROOT`], rather than hard-coded per
/// size.
fn ntt(a: &mut [u64], invert: bool) {
    let n = a.len();
    if n == 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());

    // Bit-reversal permutation.
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            a.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let root = if invert {
            modinv(PRIMITIVE_ROOT, MODULUS)
        } else {
            PRIMITIVE_ROOT
        };
        let w_len = modpow(root, (MODULUS - 1) / len as u64, MODULUS);
        let mut i = 0;
        while i < n {
            let mut w = 1u64;
            for k in 0..len / 2 {
                let u = a[i + k];
                let v = a[i + k + len / 2] * w % MODULUS;
                a[i + k] = (u + v) % MODULUS;
                a[i + k + len / 2] = (u + MODULUS - v) % MODULUS;
                w = w * w_len % MODULUS;
            }
            i += len;
        }
        len <<= 1;
    }

    if invert {
        let n_inv = modinv(n as u64, MODULUS);
        for x in a.iter_mut() {
            *x = *x * n_inv % MODULUS;
        }
    }
}

/// Multiplies magnitudes `a` and `b` via NTT-based convolution. Returns
/// `(digits, digits_len)`.
pub(crate) fn mul_digits_ntt(a: &BigUintSlice, b: &BigUintSlice) -> (DigitVec, usize) {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));

    let transform_len = (a.len() + b.len()).next_power_of_two();

    let mut fa: Vec<u64> = a.iter().map(|&d| d as u64).collect();
    fa.resize(transform_len, 0);
    let mut fb: Vec<u64> = b.iter().map(|&d| d as u64).collect();
    fb.resize(transform_len, 0);

    ntt(&mut fa, false);
    ntt(&mut fb, false);
    for (x, y) in fa.iter_mut().zip(fb.iter()) {
        *x = *x * *y % MODULUS;
    }
    ntt(&mut fa, true);

    // Each convolution coefficient is a sum of at most `transform_len`
    // products of decimal digits (each `<= 81`), far below `MODULUS`, so
    // the rounded transform output is exact; only the final base-10
    // carry propagation remains.
    let mut output = Vec::with_capacity(transform_len + 8);
    let mut carry: u64 = 0;
    for &coefficient in &fa {
        let value = coefficient + carry;
        output.push((value % 10) as Digit);
        carry = value / 10;
    }
    while carry > 0 {
        output.push((carry % 10) as Digit);
        carry /= 10;
    }
    if output.is_empty() {
        output.push(0);
    }

    let output_len = len_digits(&output);
    (output, output_len)
}
