//! # recrypto
//!
//! Public-key identity and challenge-response authentication over NIST P-192.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! recrypto = "0.2"
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std` support for the re-exported `rand`
//! - `rand`: re-export `rand` so callers can reach `OsRng` for
//!   [`auth::issue_challenge_with_rng`]
//! - `serde`: `Serialize`/`Deserialize` for fingerprints and challenge states
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `recrypto-auth`: keys, fingerprints and the challenge-response exchange
//! - `recrypto-algorithms`: P-192 arithmetic and SHA-256
//! - `recrypto-api`: the public error type
//! - `recrypto-common`, `recrypto-internal`, `recrypto-params`:
//!   secret containers, constant-time helpers and constants
//!
//! ## Example
//!
//! ```
//! use recrypto::prelude::*;
//!
//! let keys = derive_private_key(b"my seed");
//! let public_key = parse_public_key(&keys.public_key)?;
//! println!("fingerprint: {}", public_key.fingerprint(16));
//!
//! let (mut challenge, text) = issue_challenge(&public_key, b"nonce seed");
//! let answer = answer_challenge(keys.private_key.as_str(), &text)?;
//! assert!(check_challenge(&answer, &mut challenge));
//! # Ok::<(), recrypto::prelude::Error>(())
//! ```

#![forbid(unsafe_code)]

pub use recrypto_algorithms as algorithms;
pub use recrypto_api as api;
pub use recrypto_auth as auth;
pub use recrypto_common as common;
pub use recrypto_internal as internal;
pub use recrypto_params as params;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for recrypto users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Protocol operations
    pub use crate::auth::{
        answer_challenge, check_challenge, derive_private_key, fingerprint, fingerprint_into,
        issue_challenge, issue_challenge_with_rng, keys_match, parse_public_key,
        public_key_from_private, release_challenge, release_public_key,
    };

    // Handles and values
    pub use crate::auth::{
        Challenge, ChallengeState, Fingerprint, KeyPair, PrivateKeyString, PublicKey,
    };

    // Security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};
}
