// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Tests: [`crate::macros`].

#![cfg(test)]

#[forbid(unsafe_code)]
#[cfg(not(mrsh_tests_without_debug_assertions))]
#[test]
#[should_panic]
fn violation_invariant() {
    // On tests, an invariant is just a debug_assert,
    // that should work outside an unsafe block.
    super::invariant!(false);
}

#[test]
fn satisfied_invariant() {
    let index = 3usize;
    let array = [0u8; 4];
    super::invariant!(index < array.len());
    assert_eq!(array[index], 0);
}
