//! Hex-encoded SHA-256 helpers over bytes and files.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::sha256::{self, Sha256};

/// Length of the abbreviated digest form, in hex characters.
pub(crate) const SHORT_HASH_LEN: usize = 8;

/// Hash raw bytes and return the full lowercase hex digest.
pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha256::digest(bytes))
}

/// Hash a file by reading it in chunks and return the full lowercase hex digest.
pub(crate) fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Hash a file and return the abbreviated digest (first 4 bytes, hex-encoded).
pub(crate) fn short_sha256_file(path: &Path) -> io::Result<String> {
    let mut digest = sha256_file(path)?;
    digest.truncate(SHORT_HASH_LEN);
    Ok(digest)
}
