//! Evidence fingerprinting.
//!
//! Investigators ask for content hashes of images and videos so a file can
//! later be shown untampered. This module computes BLAKE3 fingerprints for
//! files going into an evidence pack.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Compute the BLAKE3 fingerprint of a file's content.
///
/// Returns the lowercase hex digest.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn fingerprint_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut file = std::fs::File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    std::io::copy(&mut file, &mut hasher)?;
    let digest = hasher.finalize().to_hex().to_string();
    debug!("Fingerprinted {} -> {}", path.display(), &digest[..16]);
    Ok(digest)
}

/// Compute the BLAKE3 fingerprint of a byte slice.
#[must_use]
pub fn fingerprint_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
