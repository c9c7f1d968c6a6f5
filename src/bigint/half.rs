// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements decimal halving (`floor(n / 2)`), used by exponentiation by
//! squaring's divide-by-two step.

use super::bigint_core::{BigInt, Sign};
use super::digit::Digit;
use super::len::len_digits;

/// Lookup table keyed by `(next_digit, previous_digit_is_odd)`, giving the
/// output digit of one step of most-significant-to-least-significant
/// decimal halving.
const fn half_digit(next: Digit, previous_was_odd: bool) -> Digit {
    let base = next / 2;
    if previous_was_odd {
        base + 5
    } else {
        base
    }
}

/// Returns `floor(n / 2)`. Panics if `n` is negative.
pub fn half(n: &BigInt) -> BigInt {
    assert!(!n.is_sign_negative(), "half: n must be non-negative");

    // Scans most-significant to least-significant (the stored order is
    // little-endian, so this means right-to-left over `as_digits()`).
    let digits = n.as_digits();
    let mut output = vec![0 as Digit; digits.len()];
    let mut previous_was_odd = false;
    for (i, &digit) in digits.iter().enumerate().rev() {
        output[i] = half_digit(digit, previous_was_odd);
        previous_was_odd = digit % 2 == 1;
    }

    let output_len = len_digits(&output);
    BigInt::new(output, output_len, Sign::Positive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half() {
        assert_eq!(half(&BigInt::from(0)), BigInt::from(0));
        assert_eq!(half(&BigInt::from(4)), BigInt::from(2));
        assert_eq!(half(&BigInt::from(5)), BigInt::from(2));
        assert_eq!(half(&BigInt::from(10)), BigInt::from(5));
        assert_eq!(half(&BigInt::from(11)), BigInt::from(5));
        assert_eq!(
            half(&BigInt::from_decimal_str("123456789").unwrap()),
            BigInt::from_decimal_str("61728394").unwrap()
        );
    }

    mod properties {
        use super::super::*;
        use ::quickcheck_macros::quickcheck;

        #[quickcheck]
        fn halving_reconstructs_even_values(x: u32) -> bool {
            let n = BigInt::from(x) * BigInt::from(2);
            let h = half(&n);
            &h + &h == n
        }

        #[quickcheck]
        fn halving_odd_values(x: u32) -> bool {
            let n = BigInt::from(x) * BigInt::from(2) + BigInt::one();
            let h = half(&n);
            &h + &h == n.decrement()
        }
    }

    #[test]
    #[should_panic]
    fn test_half_negative_panics() {
        half(&BigInt::from(-4));
    }
}
