//! SHA-256 digests for fingerprinting sequences.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 hash of in-memory data as lowercase hex.
pub fn sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// The first `len` hex characters of the SHA-256 digest.
///
/// Handy for labelling a sequence in a report. `len` is clamped to the
/// full digest length (64).
pub fn short_sha256(data: &[u8], len: usize) -> String {
    let mut digest = sha256(data);
    digest.truncate(len.min(64));
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let hash = sha256(b"hello world");
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_sha256_empty() {
        let hash = sha256(b"");
        assert_eq!(
            hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn short_digest_is_prefix() {
        let full = sha256(b"ACGT");
        let short = short_sha256(b"ACGT", 12);
        assert_eq!(short.len(), 12);
        assert!(full.starts_with(&short));
    }

    #[test]
    fn short_digest_clamps() {
        assert_eq!(short_sha256(b"ACGT", 1000).len(), 64);
    }
}
