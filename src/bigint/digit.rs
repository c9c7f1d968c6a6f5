// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines "base" of multiple precision integers (big integers).
//!
//! Big integers are implemented as base 10 numbers: every limb is a single
//! decimal digit in `0..=9`. This matches the documented textual form
//! directly, at the cost of storing one digit per byte rather than packing
//! many bits per limb.
//!
//! For the digit type chosen, a larger type exists and is used as
//! "double-digit" during carry/borrow propagation and multiplication.

pub type Digit = u8;
pub(crate) type DoubleDigit = u16;

/// The base of the digit representation: every live [`Digit`] lies in
/// `0..BASE`.
pub(crate) const BASE: DoubleDigit = 10;
