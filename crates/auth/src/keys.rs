//! Key derivation, public key handles and key checks

use core::fmt;

use recrypto_algorithms::ec::p192::{self as ec, Point, Scalar, P192_SCALAR_SIZE};
use recrypto_algorithms::hash::{HashFunction, Sha256};
use recrypto_common::security::EphemeralSecret;
use recrypto_internal::constant_time::ct_eq;
use recrypto_params::auth::KEYGEN_DOMAIN;
use subtle::{Choice, ConstantTimeEq};
use tracing::{debug, instrument};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::encoding::{decode_point, decode_private_key, encode_point, encode_private_key};
use crate::error::Result;
use crate::fingerprint::{fingerprint, Fingerprint};

/// Textual private key, wiped from memory when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeyString(String);

impl PrivateKeyString {
    /// The 48-character lowercase hex encoding
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PrivateKeyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ConstantTimeEq for PrivateKeyString {
    fn ct_eq(&self, other: &Self) -> Choice {
        recrypto_internal::constant_time::ct_eq_choice(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl PartialEq for PrivateKeyString {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKeyString {}

impl fmt::Debug for PrivateKeyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKeyString([REDACTED])")
    }
}

/// A freshly derived key pair in textual form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    /// Secret half; keep it with its owner
    pub private_key: PrivateKeyString,
    /// Public half; safe to publish
    pub public_key: String,
}

/// Hash-then-reduce a scalar from `domain ‖ counter ‖ parts…`.
///
/// The counter starts at 0 and only advances when the truncated digest
/// reduces to zero, so the result is total and deterministic.
pub(crate) fn derive_scalar(domain: &[u8], parts: &[&[u8]]) -> Scalar {
    let mut counter: u32 = 0;
    loop {
        let mut h = Sha256::new();
        h.update(domain).update(&counter.to_be_bytes());
        for part in parts {
            h.update(part);
        }
        let digest = EphemeralSecret::new(h.finalize());

        let mut bytes = [0u8; P192_SCALAR_SIZE];
        bytes.copy_from_slice(&digest[..P192_SCALAR_SIZE]);
        let scalar = Scalar::new(bytes);
        bytes.zeroize();
        if let Ok(scalar) = scalar {
            return scalar;
        }
        counter = counter.wrapping_add(1);
    }
}

/// Derive a key pair deterministically from `seed`.
///
/// The same seed always yields the same pair; any seed, including an empty
/// one, is accepted.
#[instrument(level = "debug", skip(seed), fields(seed_len = seed.len()))]
pub fn derive_private_key(seed: &[u8]) -> KeyPair {
    let scalar = derive_scalar(KEYGEN_DOMAIN, &[seed]);
    let public_key = encode_point(&ec::scalar_mult_base_g(&scalar));
    debug!(public_key = %public_key, "derived key pair");
    KeyPair {
        private_key: PrivateKeyString(encode_private_key(&scalar)),
        public_key,
    }
}

/// Compute the public key string belonging to a private key string
#[instrument(level = "debug", skip_all)]
pub fn public_key_from_private(private_key: &str) -> Result<String> {
    let scalar = decode_private_key(private_key)?;
    Ok(encode_point(&ec::scalar_mult_base_g(&scalar)))
}

/// Check that `private_key` is the secret half of `public_key`.
///
/// Both strings must decode; the comparison itself is constant time.
#[instrument(level = "debug", skip(private_key))]
pub fn keys_match(private_key: &str, public_key: &str) -> Result<bool> {
    let claimed = parse_public_key(public_key)?;
    let derived = public_key_from_private(private_key)?;
    let matched = ct_eq(derived.as_bytes(), claimed.as_str().as_bytes());
    debug!(matched, "checked key pair");
    Ok(matched)
}

/// Decoded public key, ready to issue challenges against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
    encoded: String,
}

impl PublicKey {
    /// Canonical textual encoding
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Fingerprint of the canonical encoding, at most `max_len` characters
    pub fn fingerprint(&self, max_len: usize) -> Fingerprint {
        fingerprint(self.encoded.as_bytes(), max_len)
    }

    /// Release the handle
    pub fn release(self) {}

    pub(crate) fn point(&self) -> &Point {
        &self.point
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Decode a public key string into a handle
#[instrument(level = "debug")]
pub fn parse_public_key(public_key: &str) -> Result<PublicKey> {
    let point = decode_point(public_key, "public key")?;
    let encoded = encode_point(&point);
    Ok(PublicKey { point, encoded })
}

/// Release a public key handle
pub fn release_public_key(public_key: PublicKey) {
    public_key.release()
}
