//! Shared fixtures for the recrypto integration tests

use std::sync::Once;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use recrypto_auth::{derive_private_key, KeyPair};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honours `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic RNG for reproducible test runs
pub fn seeded_rng(seed: u8) -> ChaCha20Rng {
    ChaCha20Rng::from_seed([seed; 32])
}

/// `count` distinct key pairs derived from `label`
pub fn keypairs(label: &str, count: usize) -> Vec<KeyPair> {
    (0..count)
        .map(|i| derive_private_key(format!("{}-{}", label, i).as_bytes()))
        .collect()
}

/// Replace the character at `index` with a different lowercase hex digit
pub fn flip_hex_char(text: &str, index: usize) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars[index] = if chars[index] == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}
