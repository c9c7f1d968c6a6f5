// Copyright 2026 Developers of the decimal_bigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use quickcheck::{Arbitrary, Gen};

#[derive(Debug)]
struct DecimalChar(u8);

impl Clone for DecimalChar {
    fn clone(&self) -> Self {
        DecimalChar(self.0)
    }
}

const DECIMAL_CHARS_BYTES: &[u8] = "0123456789".as_bytes();
impl Arbitrary for DecimalChar {
    fn arbitrary(g: &mut Gen) -> Self {
        DecimalChar(*g.choose(DECIMAL_CHARS_BYTES).unwrap())
    }
}

/// An arbitrary well-formed, unsigned decimal string (no leading zeros
/// unless the value is exactly `"0"`).
#[derive(Debug)]
pub(crate) struct DecimalString(pub(crate) String);

impl Clone for DecimalString {
    fn clone(&self) -> Self {
        DecimalString(self.0.clone())
    }
}

impl Arbitrary for DecimalString {
    fn arbitrary(g: &mut Gen) -> Self {
        use std::str::from_utf8;

        let mut v = Vec::<DecimalChar>::arbitrary(g);
        if v.is_empty() {
            v.push(DecimalChar::arbitrary(g));
        }
        // Strip generated leading zeros so the string stays canonical,
        // unless every digit was a zero (then it collapses to "0").
        while v.len() > 1 && v[0].0 == b'0' {
            v.remove(0);
        }

        let v_char: Vec<u8> = v.iter().map(|x| x.0).collect();
        Self(String::from(from_utf8(&v_char).unwrap()))
    }
}

/// Like [`DecimalString`], but with an arbitrary leading sign character
/// prepended when the magnitude is non-zero.
#[derive(Debug)]
pub(crate) struct SignedDecimalString(pub(crate) String);

impl Clone for SignedDecimalString {
    fn clone(&self) -> Self {
        SignedDecimalString(self.0.clone())
    }
}

const SIGN_CHARS_BYTES: &[u8] = "+-".as_bytes();
impl Arbitrary for SignedDecimalString {
    fn arbitrary(g: &mut Gen) -> Self {
        let DecimalString(magnitude) = DecimalString::arbitrary(g);
        if magnitude == "0" {
            return Self(magnitude);
        }
        let sign = *g.choose(SIGN_CHARS_BYTES).unwrap() as char;
        Self(format!("{sign}{magnitude}"))
    }
}
