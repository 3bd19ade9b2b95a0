// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

#![cfg(feature = "easy-functions")]

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::digest::Digest;
use crate::generate::{Generator, GeneratorError};
use crate::macros::invariant;

/// The error type describing either a generator error or an I/O error.
///
/// This type contains either:
/// *   A digest generator error ([`GeneratorError`]),
/// *   An I/O error ([`std::io::Error`]) or
/// *   A failure to allocate memory to buffer the input.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorOrIOError {
    /// An error caused by the digest generator.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// An error caused by an internal I/O operation.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The input is too large to be buffered in memory.
    #[error("cannot allocate memory to buffer the input")]
    OutOfMemory,
}

/// Constant temporary buffer size for "easy" functions.
const BUFFER_SIZE: usize = 32768;

/// Reads the whole stream into memory.
///
/// Allocation failures are reported as
/// [`GeneratorOrIOError::OutOfMemory`] instead of aborting.
fn read_all<R: Read>(reader: &mut R, size_hint: Option<u64>) -> Result<Vec<u8>, GeneratorOrIOError> {
    let mut data = Vec::new();
    if let Some(size) = size_hint {
        let size = usize::try_from(size).map_err(|_| GeneratorOrIOError::OutOfMemory)?;
        data.try_reserve_exact(size)
            .map_err(|_| GeneratorOrIOError::OutOfMemory)?;
    }
    let mut buffer = [0u8; BUFFER_SIZE];
    loop {
        let len = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(len) => len,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        invariant!(len <= buffer.len());
        data.try_reserve(len)
            .map_err(|_| GeneratorOrIOError::OutOfMemory)?;
        data.extend_from_slice(&buffer[..len]);
    }
    Ok(data)
}

/// Generates a digest from a given reader stream.
///
/// The whole stream is read into memory before hashing.
///
/// # Example
///
/// ```
/// fn main() -> Result<(), mrsh::GeneratorOrIOError> {
///     let mut stream = std::io::Cursor::new(b"Hello, World!\n");
///     let digest = mrsh::hash_stream("hello.txt", &mut stream)?;
///     assert_eq!(digest.size(), 14);
///     Ok(())
/// }
/// ```
pub fn hash_stream<R: Read>(name: &str, reader: &mut R) -> Result<Digest, GeneratorOrIOError> {
    let data = read_all(reader, None)?;
    Ok(Generator::new().hash(name, &data)?)
}

/// Generates a digest from a given file.
///
/// The digest is named after the path.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), mrsh::GeneratorOrIOError> {
///     let digest = mrsh::hash_file("/bin/ls")?;
///     println!("{}", digest);
///     Ok(())
/// }
/// ```
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Digest, GeneratorOrIOError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();
    let data = read_all(&mut file, Some(size))?;
    Ok(Generator::new().hash(&path.to_string_lossy(), &data)?)
}
