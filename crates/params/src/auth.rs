//! Constants for the challenge-response authentication protocol

/// Length of a textual private key: 24 scalar bytes as lowercase hex
pub const PRIVATE_KEY_TEXT_LEN: usize = 48;

/// Length of a textual point (public key or challenge):
/// one parity sign followed by the x-coordinate as lowercase hex
pub const POINT_TEXT_LEN: usize = 49;

/// Sign prefix for a point whose y-coordinate is even
pub const POINT_SIGN_EVEN: char = '+';

/// Sign prefix for a point whose y-coordinate is odd
pub const POINT_SIGN_ODD: char = '-';

/// Length of a textual answer: a SHA-256 digest as lowercase hex
pub const ANSWER_TEXT_LEN: usize = 64;

/// Length of a full fingerprint: a SHA-256 digest as lowercase hex
pub const FINGERPRINT_TEXT_LEN: usize = 64;

/// Number of seed bytes drawn from an RNG when issuing a challenge
pub const CHALLENGE_SEED_SIZE: usize = 32;

/// Domain-separation tag for deriving a private scalar from a seed
pub const KEYGEN_DOMAIN: &[u8] = b"recrypto/p192/keygen/v1";

/// Domain-separation tag for deriving a challenge nonce from a seed
pub const NONCE_DOMAIN: &[u8] = b"recrypto/p192/nonce/v1";

/// Domain-separation tag for hashing the shared point into an answer
pub const ANSWER_DOMAIN: &[u8] = b"recrypto/p192/answer/v1";
