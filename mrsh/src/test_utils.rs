// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Test-only utilities.

#![cfg(test)]

/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}

/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}

/// Generates a reproducible pseudo-random buffer.
///
/// Different seeds give unrelated buffers.
pub(crate) fn random_buffer(seed: u64, len: usize) -> Vec<u8> {
    use rand::{rngs::StdRng, RngCore, SeedableRng};
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

/// Generates a buffer from a fixed 32-bit linear congruential generator.
///
/// Unlike [`random_buffer()`], the contents are fixed by this function alone
/// so that tests may check exact chunk boundaries.
pub(crate) fn lcg_buffer(len: usize) -> Vec<u8> {
    let mut state = 1u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            (state >> 16) as u8
        })
        .collect()
}

/// Test recommended [`Default`] implementation.
#[doc(alias = "test_recommended_default")]
macro_rules! test_recommended_default_impl {
    ($ty: ty) => {{
        let value1 = <$ty>::new();
        let value2 = <$ty>::default();
        assert_eq!(value1, value2);
    }};
}

pub(crate) use test_recommended_default_impl as test_recommended_default;

mod tests;
