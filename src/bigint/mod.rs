// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An arbitrary-precision signed integer, stored as decimal digits.

mod add;
mod bigint_core;
mod bigint_display;
mod bigint_from;
mod bigint_into;
mod bigint_new;
mod bigint_slice;
mod bigint_vec;
mod cmp;
mod digit;
mod divrem;
mod error;
mod gcd;
mod half;
mod helper_methods;
mod increment;
mod karatsuba;
mod len;
mod math;
mod mul;
mod neg;
mod ntt;
mod predicates;
mod sequence;
mod sub;
mod zero;

pub use bigint_core::BigInt;
pub use digit::Digit;
pub use divrem::{quotient, remainder};
pub use error::ParseBigIntError;
pub use gcd::gcd;
pub use half::half;
pub use math::{multiply_by_pow10, power};
pub use mul::{multiply_with_strategy, MultiplyStrategy};
pub use sequence::{
    add_sequence, free_sequence, max, min, multiply_sequence, size_max, size_min,
    subtract_sequence,
};

pub use cmp::compare;
