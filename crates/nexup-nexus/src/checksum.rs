//! Checksum sidecar generation (MD5, SHA-1).
//!
//! Nexus expects a `.md5` and a `.sha1` sidecar next to every published
//! file, each containing the lowercase hex digest of the main content.

use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};
use sha1::Sha1;

use nexup_util::errors::NexupError;

/// Digest algorithm for a checksum sidecar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha1,
}

impl ChecksumAlgorithm {
    /// Sidecar file extension, appended to the artifact URL.
    pub fn extension(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Md5 => "md5",
            ChecksumAlgorithm::Sha1 => "sha1",
        }
    }

    /// Length of the rendered hex digest.
    pub fn hex_len(&self) -> usize {
        match self {
            ChecksumAlgorithm::Md5 => 32,
            ChecksumAlgorithm::Sha1 => 40,
        }
    }
}

/// Compute the digest of a file, returning a lowercase hex string.
///
/// The file is streamed through the hash in fixed-size chunks and is never
/// loaded into memory as a whole. Only I/O can fail here.
pub fn checksum_file(path: &Path, algorithm: ChecksumAlgorithm) -> Result<String, NexupError> {
    let file = std::fs::File::open(path)?;
    match algorithm {
        ChecksumAlgorithm::Md5 => digest_reader::<Md5>(file),
        ChecksumAlgorithm::Sha1 => digest_reader::<Sha1>(file),
    }
}

fn digest_reader<D: Digest>(mut reader: impl Read) -> Result<String, NexupError> {
    let mut hasher = D::new();
    let mut buffer = [0u8; 8192];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// MD5 of a byte slice as lowercase hex.
pub fn hex_md5(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// SHA-1 of a byte slice as lowercase hex.
pub fn hex_sha1(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
