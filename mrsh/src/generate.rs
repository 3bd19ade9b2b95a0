// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! mrsh-v2 digest generator.

use tracing::debug;

use crate::digest::Digest;

pub mod chunker;
pub mod hashes;

pub use chunker::ChunkMode;
use chunker::Chunker;
use hashes::fnv::fnv1a_64;

/// The error type for the digest generator.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The input buffer is empty.
    #[error("input is empty")]
    EmptyInput,
}

/// mrsh-v2 digest generator.
///
/// The generator splits the input into content-defined chunks (see
/// [`Chunker`](crate::internal_hashes::Chunker)), hashes each chunk with
/// 64-bit FNV-1a and adds the result to the digest.
///
/// It only holds the [`ChunkMode`] and can be shared freely.
///
/// # Example
///
/// ```
/// use mrsh::{ChunkMode, Digest, Generator};
///
/// // Hash a whole input at once.
/// let digest = Generator::new().hash("hello.txt", b"Hello, World!\n").unwrap();
/// assert_eq!(digest.size(), 14);
///
/// // Hash packets (or blocks of a stream) into one digest.
/// let generator = Generator::with_mode(ChunkMode::Packet);
/// let mut digest = Digest::new("stream");
/// for packet in [&b"first packet"[..], &b"second packet"[..]] {
///     generator.update_digest(&mut digest, packet).unwrap();
/// }
/// assert_eq!(digest.size(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generator {
    mode: ChunkMode,
}

impl Generator {
    /// Creates a generator hashing whole inputs.
    pub const fn new() -> Self {
        Generator {
            mode: ChunkMode::WholeInput,
        }
    }

    /// Creates a generator with the specified chunking mode.
    pub const fn with_mode(mode: ChunkMode) -> Self {
        Generator { mode }
    }

    /// Returns the chunking mode.
    pub fn mode(&self) -> ChunkMode {
        self.mode
    }

    /// Generates a digest of a buffer.
    ///
    /// The buffer must not be empty.
    pub fn hash(&self, name: &str, buf: &[u8]) -> Result<Digest, GeneratorError> {
        let mut digest = Digest::new(name);
        self.update_digest(&mut digest, buf)?;
        debug!(
            name = digest.name(),
            size = digest.size(),
            segments = digest.segments().len(),
            "generated a digest"
        );
        Ok(digest)
    }

    /// Adds all chunks of a buffer to an existing digest.
    ///
    /// Each call chunks `buf` on its own (the rolling hash starts over)
    /// and adds `buf.len()` to the input length of the digest.  On error,
    /// the digest is left unchanged.
    pub fn update_digest(&self, digest: &mut Digest, buf: &[u8]) -> Result<(), GeneratorError> {
        if buf.is_empty() {
            return Err(GeneratorError::EmptyInput);
        }
        for range in Chunker::with_mode(buf, self.mode) {
            digest.add_hash(fnv1a_64(&buf[range]));
        }
        digest.add_size(buf.len() as u64);
        Ok(())
    }
}
