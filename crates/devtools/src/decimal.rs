// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num_bigint::BigInt as ReferenceBigInt;
use quickcheck::Gen;

/// Generates a random well-formed decimal string of `digit_len` digits.
///
/// The leading digit is never '0' unless `digit_len == 1`.
pub fn random_decimal(digit_len: usize) -> String {
    const DIGIT_CHARS: &[u8] = b"0123456789";
    const NONZERO_DIGIT_CHARS: &[u8] = b"123456789";

    let mut gen = Gen::new(0);
    let mut s = String::with_capacity(digit_len.max(1));

    if digit_len == 0 {
        return "0".to_string();
    }

    s.push(*gen.choose(NONZERO_DIGIT_CHARS).unwrap() as char);
    for _ in 1..digit_len {
        s.push(*gen.choose(DIGIT_CHARS).unwrap() as char);
    }
    s
}

/// Cross-checks a decimal string against the `num-bigint` reference
/// implementation, returning its canonical decimal form.
///
/// Used by differential tests to confirm this crate's arithmetic against an
/// independently-implemented bignum library.
pub fn reference_decimal(decimal: &str) -> String {
    let n: ReferenceBigInt = decimal.parse().expect("invalid decimal string");
    n.to_string()
}
