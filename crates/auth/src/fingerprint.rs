//! Printable fingerprints of arbitrary strings

use core::fmt;

use recrypto_algorithms::hash::{HashFunction, Sha256};
use recrypto_params::auth::FINGERPRINT_TEXT_LEN;
use tracing::instrument;

use crate::error::{validate, Error, Result};

/// Lowercase hex SHA-256 digest, possibly shortened by the caller
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fingerprint {
    digest: String,
    truncated: bool,
}

impl Fingerprint {
    /// The (possibly truncated) hex digest
    pub fn as_str(&self) -> &str {
        &self.digest
    }

    /// True when all 64 characters are present
    pub fn is_complete(&self) -> bool {
        !self.truncated
    }

    /// True when `max_len` cut the digest short
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Consume into the digest string
    pub fn into_string(self) -> String {
        self.digest
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digest)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.digest
    }
}

/// Fingerprint `input`, keeping at most `max_len` characters
#[instrument(level = "debug", skip(input), fields(input_len = input.as_ref().len()))]
pub fn fingerprint(input: impl AsRef<[u8]>, max_len: usize) -> Fingerprint {
    let mut digest = hex::encode(Sha256::digest(input.as_ref()));
    let truncated = max_len < FINGERPRINT_TEXT_LEN;
    if truncated {
        digest.truncate(max_len);
    }
    Fingerprint { digest, truncated }
}

/// Write the full 64-character fingerprint of `input` into `out`.
///
/// Returns the number of bytes written. `out` is left untouched when it is
/// too small.
#[instrument(level = "debug", skip(input, out), fields(input_len = input.as_ref().len(), available = out.len()))]
pub fn fingerprint_into(input: impl AsRef<[u8]>, out: &mut [u8]) -> Result<usize> {
    validate::buffer("fingerprint", FINGERPRINT_TEXT_LEN, out.len())?;
    let digest = Sha256::digest(input.as_ref());
    hex::encode_to_slice(digest, &mut out[..FINGERPRINT_TEXT_LEN])
        .map_err(|e| Error::Internal {
            context: "fingerprint",
            message: e.to_string(),
        })?;
    Ok(FINGERPRINT_TEXT_LEN)
}
