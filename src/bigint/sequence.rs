// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements variadic fold helpers over a sequence of `BigInt`s, for API
//! parity with the ported library's non-method, non-binary operations.

use super::bigint_core::BigInt;

/// Left-to-right fold of [`Add`](std::ops::Add) over `items`. Panics if
/// `items` is empty.
pub fn add_sequence(items: &[BigInt]) -> BigInt {
    assert!(!items.is_empty(), "add_sequence: items must not be empty");
    items
        .iter()
        .skip(1)
        .fold(items[0].clone(), |acc, item| acc + item)
}

/// Left-to-right fold of [`Sub`](std::ops::Sub) over `items`. Fold order
/// matters: subtraction is not commutative or associative. Panics if
/// `items` is empty.
pub fn subtract_sequence(items: &[BigInt]) -> BigInt {
    assert!(
        !items.is_empty(),
        "subtract_sequence: items must not be empty"
    );
    items
        .iter()
        .skip(1)
        .fold(items[0].clone(), |acc, item| acc - item)
}

/// Left-to-right fold of [`Mul`](std::ops::Mul) over `items`. Panics if
/// `items` is empty.
pub fn multiply_sequence(items: &[BigInt]) -> BigInt {
    assert!(
        !items.is_empty(),
        "multiply_sequence: items must not be empty"
    );
    items
        .iter()
        .skip(1)
        .fold(items[0].clone(), |acc, item| acc * item)
}

/// Returns a clone of the smallest value in `items` by the total order of
/// `Ord`. Panics if `items` is empty.
pub fn min(items: &[BigInt]) -> BigInt {
    items
        .iter()
        .min()
        .expect("min: items must not be empty")
        .clone()
}

/// Returns a clone of the largest value in `items` by the total order of
/// `Ord`. Panics if `items` is empty.
pub fn max(items: &[BigInt]) -> BigInt {
    items
        .iter()
        .max()
        .expect("max: items must not be empty")
        .clone()
}

/// Returns the smallest digit count (`size`) among `items`. Panics if
/// `items` is empty.
pub fn size_min(items: &[BigInt]) -> usize {
    items
        .iter()
        .map(BigInt::size)
        .min()
        .expect("size_min: items must not be empty")
}

/// Returns the largest digit count (`size`) among `items`. Panics if
/// `items` is empty.
pub fn size_max(items: &[BigInt]) -> usize {
    items
        .iter()
        .map(BigInt::size)
        .max()
        .expect("size_max: items must not be empty")
}

/// Drops an owned vector of `BigInt`s. Present only for API parity with the
/// ported library's explicit bulk-free call; Rust's ownership model makes
/// this a plain `drop`.
pub fn free_sequence(items: Vec<BigInt>) {
    drop(items);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sequence() {
        let items = vec![
            BigInt::from(1),
            BigInt::from(-2),
            BigInt::from_decimal_str("18446744073709551617").unwrap(),
        ];
        assert_eq!(
            add_sequence(&items),
            BigInt::from_decimal_str("18446744073709551616").unwrap()
        );
    }

    #[test]
    fn test_subtract_sequence_order_matters() {
        let items = vec![BigInt::from(10), BigInt::from(3), BigInt::from(2)];
        assert_eq!(subtract_sequence(&items), BigInt::from(5));
    }

    #[test]
    fn test_multiply_sequence() {
        let items = vec![BigInt::from(2), BigInt::from(3), BigInt::from(4)];
        assert_eq!(multiply_sequence(&items), BigInt::from(24));
    }

    #[test]
    fn test_min_max() {
        let items = vec![BigInt::from(5), BigInt::from(-10), BigInt::from(3)];
        assert_eq!(min(&items), BigInt::from(-10));
        assert_eq!(max(&items), BigInt::from(5));
    }

    #[test]
    fn test_size_min_max() {
        let items = vec![BigInt::from(5), BigInt::from(12345), BigInt::from(-12)];
        assert_eq!(size_min(&items), 1);
        assert_eq!(size_max(&items), 5);
    }

    #[test]
    #[should_panic]
    fn test_add_sequence_empty_panics() {
        add_sequence(&[]);
    }

    #[test]
    fn test_free_sequence() {
        free_sequence(vec![BigInt::from(1), BigInt::from(2)]);
    }
}
