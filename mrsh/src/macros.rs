// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Internal macros.

/// Declare an invariant for optimization.
///
/// When the feature `unsafe` is disabled, it only places [`debug_assert!()`].
/// If `unsafe` is enabled, [`core::hint::assert_unchecked()`] is used
/// so that the optimizer may remove redundant bound checks.
///
/// Optimization behaviors are disabled on tests.
#[doc(alias = "invariant")]
macro_rules! invariant_impl {
    ($expr: expr) => {
        cfg_if::cfg_if! {
            if #[cfg(all(feature = "unsafe", not(test)))] {
                #[allow(unsafe_code)]
                unsafe {
                    core::hint::assert_unchecked($expr);
                }
            }
            else {
                debug_assert!($expr);
            }
        }
    };
}
pub(crate) use invariant_impl as invariant;

mod tests;
