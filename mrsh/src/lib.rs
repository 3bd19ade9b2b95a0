// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Generate, parse and compare mrsh-v2 similarity digests.
//!
//! An mrsh-v2 digest is a sequence of fixed-size Bloom filters
//! ("segments").  The input is split into content-defined chunks by a
//! rolling hash, each chunk is hashed with 64-bit FNV-1a and the hash is
//! inserted into the current segment.  After [`params::MAX_BLOCKS`] chunks a
//! new segment is started.
//!
//! Two digests are compared by finding, for every segment of the smaller
//! digest, the best-matching segment of the larger one.  The result is a
//! similarity score between `0` and `100`.
//!
//! # Example
//!
//! ```
//! use mrsh::{CompareOptions, Generator};
//!
//! let data: Vec<u8> = (0u32..20000).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
//! let generator = Generator::new();
//! let a = generator.hash("a.bin", &data).unwrap();
//! let b = generator.hash("b.bin", &data).unwrap();
//! assert_eq!(a.compare(&b, &CompareOptions::default()), 100);
//!
//! // Digests can be stored as text lines and parsed back.
//! let line = a.to_string();
//! let parsed: mrsh::Digest = line.parse().unwrap();
//! assert_eq!(parsed, a);
//! ```
// unsafe code is *only* allowed on enabling the "unsafe" feature.
#![cfg_attr(not(feature = "unsafe"), forbid(unsafe_code))]
#![cfg_attr(not(test), warn(missing_docs))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]

mod bloom;
mod collection;
mod compare;
mod compare_easy;
mod digest;
mod encoding;
mod generate;
mod generate_easy;
mod generate_easy_std;
mod macros;
pub mod params;
mod test_utils;
mod utils;

pub use bloom::BloomFilter;
pub use collection::{DigestList, LineError, Match};
pub use compare::{bloom_max_score, compare_digests, compute_e_min, CompareOptions, ConfigError, ScoreNormalization};
#[cfg(feature = "easy-functions")]
pub use compare_easy::{compare, ParseErrorEither, ParseErrorSide};
pub use digest::parser::{ParseError, ParseErrorField, ParseErrorKind};
pub use digest::Digest;
pub use encoding::SegmentEncoding;
pub use generate::{ChunkMode, Generator, GeneratorError};
#[cfg(feature = "easy-functions")]
pub use generate_easy::{hash_buf, hash_buf_named};
#[cfg(feature = "easy-functions")]
pub use generate_easy_std::{hash_file, hash_stream, GeneratorOrIOError};

/// Module containing internal hash functions.
pub mod internal_hashes {
    pub use super::generate::chunker::Chunker;
    pub use super::generate::hashes::fnv::Fnv1aHash;
    pub use super::generate::hashes::rolling_hash::RollingHash;
}

mod tests;
