// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Tests: [`crate::test_utils`].

#![cfg(test)]

use crate::test_utils::{cover_auto_debug, random_buffer, test_auto_clone, test_recommended_default};

#[test]
fn auto_clone_valid() {
    #[derive(PartialEq, Eq, Clone, Debug)]
    struct Example(u8);
    test_auto_clone(&Example(1));
    cover_auto_debug(&Example(2));
}

#[test]
#[should_panic]
fn auto_clone_counterexample() {
    #[derive(PartialEq, Eq, Debug)]
    struct Counterexample(u8);
    impl Clone for Counterexample {
        // BROKEN: returns fixed value rather than itself.
        fn clone(&self) -> Self {
            Self(0)
        }
    }
    test_auto_clone(&Counterexample(1));
}

#[test]
fn recommended_default_valid() {
    #[derive(PartialEq, Eq, Debug, Default)]
    struct Example(u8);
    impl Example {
        fn new() -> Self {
            Self(0)
        }
    }
    test_recommended_default!(Example);
}

#[test]
fn random_buffer_is_reproducible() {
    assert_eq!(random_buffer(1, 1000), random_buffer(1, 1000));
    assert_ne!(random_buffer(1, 1000), random_buffer(2, 1000));
    assert_eq!(random_buffer(3, 0).len(), 0);
    assert_eq!(random_buffer(3, 12345).len(), 12345);
}

#[test]
fn lcg_buffer_first_bytes() {
    use crate::test_utils::lcg_buffer;
    let buf = lcg_buffer(3);
    // state: 1103527590, 2524885223, 662824084
    assert_eq!(buf, [(1103527590u32 >> 16) as u8, (2524885223u32 >> 16) as u8, (662824084u32 >> 16) as u8]);
    assert_eq!(lcg_buffer(100)[..3], buf[..]);
}
