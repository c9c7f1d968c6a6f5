// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements negation.

use super::bigint_core::{BigInt, Sign};
use std::ops::Neg;

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().negate()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl BigInt {
    /// Returns `-self`. Canonical zero negates to itself.
    pub fn negate(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }

    /// Returns `|self|`.
    pub fn abs(mut self) -> BigInt {
        self.sign = Sign::Positive;
        self
    }
}
