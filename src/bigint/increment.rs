// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements increment/decrement by one.

use super::bigint_core::BigInt;

impl BigInt {
    /// Returns `self + 1`.
    pub fn increment(&self) -> BigInt {
        self + &BigInt::one()
    }

    /// Adds one to `self` in place.
    pub fn increment_mut(&mut self) {
        *self = self.increment();
    }

    /// Returns `self - 1`.
    pub fn decrement(&self) -> BigInt {
        self - &BigInt::one()
    }

    /// Subtracts one from `self` in place.
    pub fn decrement_mut(&mut self) {
        *self = self.decrement();
    }
}
