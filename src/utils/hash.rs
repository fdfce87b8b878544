//! Unified hashing utilities using FxHash.
//!
//! Uses `rustc_hash::FxHasher` for fast, deterministic hashing of small
//! data. Fingerprints feed cache-busting asset filenames.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Useful for cache-busting filenames (e.g. `site-a1b2c3d4.css`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    format!("{:016x}", compute(value))[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_deterministic() {
        assert_eq!(compute("content"), compute("content"));
        assert_ne!(compute("content"), compute("other"));
    }

    #[test]
    fn test_fingerprint_format() {
        let fp = fingerprint("body { margin: 0 }");
        assert_eq!(fp.len(), 8);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_stable() {
        assert_eq!(fingerprint("x"), fingerprint("x"));
    }
}
