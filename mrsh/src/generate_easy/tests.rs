// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Tests: [`crate::generate_easy`].

#![cfg(test)]

use crate::generate::{Generator, GeneratorError};
use crate::test_utils::lcg_buffer;

use super::{hash_buf, hash_buf_named};

#[test]
fn hash_buf_usage() {
    let buf = lcg_buffer(10000);
    let digest = hash_buf(&buf).unwrap();
    assert_eq!(digest.name(), "");
    assert_eq!(digest.segments(), Generator::new().hash("x", &buf).unwrap().segments());
    assert_eq!(hash_buf(b""), Err(GeneratorError::EmptyInput));
}

#[test]
fn hash_buf_named_usage() {
    let buf = lcg_buffer(10000);
    let digest = hash_buf_named("file.bin", &buf).unwrap();
    assert_eq!(digest, Generator::new().hash("file.bin", &buf).unwrap());
    assert_eq!(hash_buf_named("file.bin", b""), Err(GeneratorError::EmptyInput));
}
