// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Tests: [`crate`].

#![cfg(test)]

#[cfg(not(mrsh_tests_without_debug_assertions))]
#[test]
fn test_prerequisites() {
    assert!(cfg!(debug_assertions), "\
        The tests in this crate require debug assertions to be enabled (by default).  \
        To test this crate without debug assertions, add rustc flags \"--cfg mrsh_tests_without_debug_assertions\".\
    ");
}

#[test]
fn reexported_internal_hashes() {
    use crate::internal_hashes::{Chunker, Fnv1aHash, RollingHash};
    let data = b"Hello, World!\n";
    assert_eq!(Chunker::new(data).count(), 1);
    assert_eq!(Fnv1aHash::new().update(data).value(), crate::generate::hashes::fnv::fnv1a_64(data));
    assert_eq!(RollingHash::new().value(), 0);
}
