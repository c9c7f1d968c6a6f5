// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements `From<integer>` for `BigInt`, for every standard integer
//! width.

use super::bigint_core::{BigInt, Sign};
use super::digit::Digit;

/// Builds a non-negative `BigInt` out of a magnitude already widened to
/// `u128`, the widest standard unsigned integer.
fn from_magnitude(mut value: u128) -> BigInt {
    if value == 0 {
        return BigInt::zero();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push((value % 10) as Digit);
        value /= 10;
    }
    let digits_len = digits.len();
    BigInt::new(digits, digits_len, Sign::Positive)
}

macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> BigInt {
                    from_magnitude(value as u128)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> BigInt {
                    // `unsigned_abs` is exact even for `<type>::MIN`, whose
                    // magnitude does not fit back into the signed type.
                    let mut result = from_magnitude(value.unsigned_abs() as u128);
                    if value < 0 {
                        result.sign = Sign::Negative;
                    }
                    result
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
