//! Single-use challenge-response exchange
//!
//! The verifier picks a nonce r, sends R = r·G and keeps
//! H(R ‖ r·Q) for the claimant's public key Q. The claimant holding k with
//! Q = k·G answers H(R ‖ k·R), which matches because r·Q = k·R.

use core::fmt;

use rand::{CryptoRng, RngCore};
use recrypto_algorithms::ec::p192::{self as ec, Point};
use recrypto_algorithms::hash::{HashFunction, Sha256};
use recrypto_common::security::{EphemeralSecret, SecretBuffer};
use recrypto_internal::constant_time::ct_eq;
use recrypto_params::auth::{ANSWER_DOMAIN, CHALLENGE_SEED_SIZE, NONCE_DOMAIN};
use recrypto_params::utils::hash::SHA256_OUTPUT_SIZE;
use tracing::{debug, instrument, warn};
use zeroize::Zeroize;

use crate::encoding::{decode_answer, decode_point, decode_private_key, encode_answer, encode_point};
use crate::error::Result;
use crate::keys::{derive_scalar, PublicKey};

/// Where a challenge is in its single-use lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChallengeState {
    /// Sent out, no answer checked yet
    Issued,
    /// The first checked answer was correct
    Verified,
    /// The first checked answer was wrong or malformed
    Rejected,
}

/// Verifier-side state of one authentication attempt
pub struct Challenge {
    challenge: String,
    public_key: String,
    expected: SecretBuffer<SHA256_OUTPUT_SIZE>,
    state: ChallengeState,
}

impl Challenge {
    /// Current lifecycle state
    pub fn state(&self) -> ChallengeState {
        self.state
    }

    /// The challenge string that was sent to the claimant
    pub fn as_str(&self) -> &str {
        &self.challenge
    }

    /// Encoding of the public key this challenge is bound to
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Check a claimed answer.
    ///
    /// Only the first call can succeed; it moves the challenge to
    /// `Verified` or `Rejected`. Every later call returns `false`.
    pub fn check(&mut self, answer: &str) -> bool {
        if self.state != ChallengeState::Issued {
            warn!(
                challenge = %self.challenge,
                state = ?self.state,
                "challenge already checked"
            );
            return false;
        }

        let accepted = match decode_answer(answer) {
            Some(digest) => ct_eq(&digest[..], self.expected.as_ref()),
            None => false,
        };

        self.state = if accepted {
            ChallengeState::Verified
        } else {
            ChallengeState::Rejected
        };

        if accepted {
            debug!(challenge = %self.challenge, "challenge verified");
        } else {
            warn!(challenge = %self.challenge, "challenge rejected");
        }
        accepted
    }

    /// Release the challenge, wiping the expected answer
    pub fn release(self) {}
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Challenge")
            .field("challenge", &self.challenge)
            .field("public_key", &self.public_key)
            .field("expected", &"[REDACTED]")
            .field("state", &self.state)
            .finish()
    }
}

/// H(ANSWER_DOMAIN ‖ enc(R) ‖ enc(S))
fn answer_digest(challenge: &str, shared: &Point) -> [u8; SHA256_OUTPUT_SIZE] {
    let mut shared_text = encode_point(shared);
    let mut h = Sha256::new();
    h.update(ANSWER_DOMAIN)
        .update(challenge.as_bytes())
        .update(shared_text.as_bytes());
    shared_text.zeroize();
    h.finalize()
}

/// Issue a challenge against `public_key`, drawing the nonce from `seed`.
///
/// The seed is the only entropy source: reusing a seed for the same key
/// reproduces the same challenge. Returns the verifier handle and the
/// challenge string to send.
#[instrument(level = "debug", skip_all, fields(public_key = %public_key, seed_len = seed.len()))]
pub fn issue_challenge(public_key: &PublicKey, seed: &[u8]) -> (Challenge, String) {
    let nonce = derive_scalar(NONCE_DOMAIN, &[public_key.as_str().as_bytes(), seed]);
    let challenge = encode_point(&ec::scalar_mult_base_g(&nonce));
    let shared = ec::scalar_mult(&nonce, public_key.point());
    drop(nonce);

    let expected = SecretBuffer::new(answer_digest(&challenge, &shared));
    debug!(challenge = %challenge, "issued challenge");

    let handle = Challenge {
        challenge: challenge.clone(),
        public_key: public_key.as_str().to_owned(),
        expected,
        state: ChallengeState::Issued,
    };
    (handle, challenge)
}

/// Issue a challenge with a fresh seed drawn from `rng`
pub fn issue_challenge_with_rng<R: CryptoRng + RngCore>(
    public_key: &PublicKey,
    rng: &mut R,
) -> (Challenge, String) {
    let mut seed = EphemeralSecret::new([0u8; CHALLENGE_SEED_SIZE]);
    rng.fill_bytes(&mut seed[..]);
    issue_challenge(public_key, &seed[..])
}

/// Compute the answer to `challenge` with `private_key`
#[instrument(level = "debug", skip(private_key))]
pub fn answer_challenge(private_key: &str, challenge: &str) -> Result<String> {
    let scalar = decode_private_key(private_key)?;
    let point = decode_point(challenge, "challenge")?;
    let shared = ec::scalar_mult(&scalar, &point);
    drop(scalar);

    let mut digest = answer_digest(challenge, &shared);
    let answer = encode_answer(&digest);
    digest.zeroize();
    Ok(answer)
}

/// Check `answer` against `challenge`; see [`Challenge::check`]
pub fn check_challenge(answer: &str, challenge: &mut Challenge) -> bool {
    challenge.check(answer)
}

/// Release a challenge handle
pub fn release_challenge(challenge: Challenge) {
    challenge.release()
}
