// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An arbitrary-precision signed decimal integer library.
//!
//! The crate exposes a single value type, [`bigint::BigInt`], together with
//! construction, conversion, comparison, and arithmetic operations
//! (addition, subtraction, multiplication with multiple strategies,
//! Euclidean division, exponentiation, and GCD).

pub mod bigint;

#[cfg(test)]
mod testing_tools;
