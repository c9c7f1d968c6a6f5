// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements digits length related functions (trimming of leading zeros).

use super::digit::Digit;

/// Returns the length of the digits stored in `digits`, i.e., the position
/// one past the most significant non-zero digit.
pub(crate) fn len_digits(digits: &[Digit]) -> usize {
    assert!(!digits.is_empty());

    // Searches for the first non-zero digit from the right, for digits are
    // stored in little-endian order (the most significant digit is at the
    // highest index).
    if let Some(index) = digits.iter().rposition(|&x| x != 0) {
        index + 1
    } else {
        1
    }
}
