// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements functions required for creating big integer implementations.
//!
//! Follows the shape of the Rust nightly feature [`bigint_helper_methods`][1],
//! adapted to decimal (base 10) digits rather than a binary limb.
//!
//! [1]: https://github.com/rust-lang/rust/issues/85532

use super::digit::{Digit, DoubleDigit, BASE};

/// Calculates `lhs + rhs + carry` in base 10, without the ability to
/// overflow: both `lhs` and `rhs` are single decimal digits, so the sum
/// never exceeds `2 * 9 + 1 = 19`.
#[inline]
pub(crate) fn carrying_add(lhs: Digit, rhs: Digit, carry: bool) -> (Digit, bool) {
    let sum = lhs as DoubleDigit + rhs as DoubleDigit + carry as DoubleDigit;
    if sum >= BASE {
        ((sum - BASE) as Digit, true)
    } else {
        (sum as Digit, false)
    }
}

/// Calculates `lhs - rhs - borrow` in base 10, without the ability to
/// underflow: borrows a full `BASE` from the next higher digit when needed.
#[inline]
pub(crate) fn borrowing_sub(lhs: Digit, rhs: Digit, borrow: bool) -> (Digit, bool) {
    let lhs = lhs as i16;
    let rhs = rhs as i16 + borrow as i16;
    if lhs < rhs {
        ((lhs + BASE as i16 - rhs) as Digit, true)
    } else {
        ((lhs - rhs) as Digit, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrying_add() {
        assert_eq!(carrying_add(5, 2, false), (7, false));
        assert_eq!(carrying_add(5, 2, true), (8, false));
        assert_eq!(carrying_add(9, 1, false), (0, true));
        assert_eq!(carrying_add(9, 9, true), (9, true));
    }

    #[test]
    fn test_borrowing_sub() {
        assert_eq!(borrowing_sub(5, 2, false), (3, false));
        assert_eq!(borrowing_sub(5, 2, true), (2, false));
        assert_eq!(borrowing_sub(0, 1, false), (9, true));
        assert_eq!(borrowing_sub(0, 1, true), (8, true));
    }
}
