// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements `Display` for `BigInt`.

use super::bigint_core::{BigInt, Sign};
use std::fmt;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        // Digits are stored least-significant-first; the text form is
        // most-significant-first.
        for &digit in self.as_digits().iter().rev() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
