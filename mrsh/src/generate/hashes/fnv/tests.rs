// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors
// SPDX-FileCopyrightText: FNV-1a test vectors are based on a PD work by Landon Curt Noll.

//! Tests: [`crate::generate::hashes::fnv`].

#![cfg(test)]

use crate::test_utils::test_recommended_default;

use super::{fnv1a_64, Fnv1aHash};

#[test]
fn basic_impls() {
    test_recommended_default!(Fnv1aHash);
}

#[test]
fn initial_state() {
    assert_eq!(Fnv1aHash::new().value(), 0xcbf29ce484222325);
    // An empty chunk keeps the offset basis.
    assert_eq!(fnv1a_64(b""), Fnv1aHash::OFFSET_BASIS);
}

#[rustfmt::skip]
#[test]
fn test_vectors() {
    assert_eq!(fnv1a_64(b"a"),                0xaf63dc4c8601ec8c);
    assert_eq!(fnv1a_64(b"foobar"),           0x85944171f73967e8);
    assert_eq!(fnv1a_64(b"Hello, World!\n"),  0x07e86db086d253ba);
}

#[test]
fn usage() {
    const STR: &[u8] = b"Hello, World!\n";
    let expected = fnv1a_64(STR);

    let mut hash = Fnv1aHash::new();
    for &ch in STR {
        hash.update_by_byte(ch);
    }
    assert_eq!(hash.value(), expected);

    let mut hash = Fnv1aHash::new();
    let h = hash.update(b"Hello, ").update(b"World!").update_by_byte(b'\n');
    assert_eq!(h.value(), expected);
}

#[test]
fn order_sensitive() {
    assert_ne!(fnv1a_64(b"ab"), fnv1a_64(b"ba"));
    assert_ne!(fnv1a_64(b"\0"), fnv1a_64(b""));
}
