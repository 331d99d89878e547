//! Cryptographic hash functions
//!
//! Only SHA-256 is provided; it drives key derivation, nonce derivation,
//! answer hashing and public key fingerprints.

pub mod sha2;

pub use sha2::Sha256;

/// Common interface for incremental hash functions
pub trait HashFunction: Sized {
    /// Size of the digest in bytes
    const OUTPUT_SIZE: usize;

    /// Size of the internal block in bytes
    const BLOCK_SIZE: usize;

    /// Digest type returned by [`HashFunction::finalize`]
    type Output: AsRef<[u8]>;

    /// Creates a fresh hashing context
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Consumes the context and returns the digest
    fn finalize(self) -> Self::Output;

    /// One-shot convenience wrapper
    fn digest(data: &[u8]) -> Self::Output {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Human-readable algorithm name
    fn name() -> &'static str;
}
