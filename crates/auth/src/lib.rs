//! Public-key identity and challenge-response authentication
//!
//! A party derives a key pair from a seed, publishes the public key (or its
//! fingerprint), and later proves possession of the private key by answering
//! a one-time challenge issued against that public key:
//!
//! ```
//! use recrypto_auth::{
//!     answer_challenge, check_challenge, derive_private_key, issue_challenge,
//!     parse_public_key,
//! };
//!
//! let keys = derive_private_key(b"correct horse battery staple");
//!
//! // Verifier
//! let public_key = parse_public_key(&keys.public_key)?;
//! let (mut challenge, text) = issue_challenge(&public_key, b"fresh random seed");
//!
//! // Claimant
//! let answer = answer_challenge(keys.private_key.as_str(), &text)?;
//!
//! // Verifier
//! assert!(check_challenge(&answer, &mut challenge));
//! # Ok::<(), recrypto_auth::Error>(())
//! ```
//!
//! All values exchanged between parties are short printable strings; see
//! [`encoding`] for their formats.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod challenge;
pub mod encoding;
pub mod error;
pub mod fingerprint;
pub mod keys;

pub use challenge::{
    answer_challenge, check_challenge, issue_challenge, issue_challenge_with_rng,
    release_challenge, Challenge, ChallengeState,
};
pub use error::{Error, Result};
pub use fingerprint::{fingerprint, fingerprint_into, Fingerprint};
pub use keys::{
    derive_private_key, keys_match, parse_public_key, public_key_from_private,
    release_public_key, KeyPair, PrivateKeyString, PublicKey,
};
