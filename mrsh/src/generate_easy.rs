// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

#![cfg(feature = "easy-functions")]

use crate::digest::Digest;
use crate::generate::{Generator, GeneratorError};

/// Generates an unnamed digest from a given buffer.
///
/// # Example
///
/// ```
/// let digest = mrsh::hash_buf(b"Hello, World!\n").unwrap();
/// assert!(digest.to_string().starts_with(":14:0:1:"));
/// ```
pub fn hash_buf(buffer: &[u8]) -> Result<Digest, GeneratorError> {
    hash_buf_named("", buffer)
}

/// Generates a named digest from a given buffer.
///
/// # Example
///
/// ```
/// let digest = mrsh::hash_buf_named("hello.txt", b"Hello, World!\n").unwrap();
/// assert!(digest.to_string().starts_with("hello.txt:14:0:1:"));
/// ```
pub fn hash_buf_named(name: &str, buffer: &[u8]) -> Result<Digest, GeneratorError> {
    Generator::new().hash(name, buffer)
}

#[cfg(test)]
mod tests;
