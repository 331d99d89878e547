//! Recomputes the exchanged strings from the primitives they are built on

use recrypto_algorithms::ec::p192::{self, Point, Scalar, P192_POINT_COMPRESSED_SIZE};
use recrypto_algorithms::hash::{HashFunction, Sha256};
use recrypto_auth::{answer_challenge, derive_private_key, issue_challenge, parse_public_key};
use recrypto_params::auth::{ANSWER_DOMAIN, KEYGEN_DOMAIN, NONCE_DOMAIN};
use recrypto_tests::keypairs;

/// First 24 bytes of SHA-256(domain ‖ 0u32 ‖ parts…), reduced mod n
fn first_try_scalar(domain: &[u8], parts: &[&[u8]]) -> Scalar {
    let mut h = Sha256::new();
    h.update(domain).update(&0u32.to_be_bytes());
    for part in parts {
        h.update(part);
    }
    let digest = h.finalize();
    let mut bytes = [0u8; 24];
    bytes.copy_from_slice(&digest[..24]);
    Scalar::new(bytes).unwrap()
}

fn point_text(point: &Point) -> String {
    let sign = if point.y_is_odd() { '-' } else { '+' };
    format!("{}{}", sign, hex::encode(point.x_coordinate_bytes()))
}

fn point_from_text(text: &str) -> Point {
    let mut sec1 = [0u8; P192_POINT_COMPRESSED_SIZE];
    sec1[0] = if text.starts_with('-') { 0x03 } else { 0x02 };
    hex::decode_to_slice(&text[1..], &mut sec1[1..]).unwrap();
    Point::deserialize_compressed(&sec1).unwrap()
}

#[test]
fn test_key_derivation_layout() {
    for seed in [&b""[..], &b"alice"[..], &b"a much longer seed with spaces"[..]] {
        let keys = derive_private_key(seed);
        let k = first_try_scalar(KEYGEN_DOMAIN, &[seed]);

        assert_eq!(keys.private_key.as_str(), hex::encode(k.as_secret_buffer()));
        assert_eq!(keys.public_key, point_text(&p192::scalar_mult_base_g(&k)));
    }
}

#[test]
fn test_challenge_layout() {
    let keys = derive_private_key(b"challenge layout");
    let public_key = parse_public_key(&keys.public_key).unwrap();
    let seed: &[u8] = b"verifier seed";

    let (_, text) = issue_challenge(&public_key, seed);
    let r = first_try_scalar(NONCE_DOMAIN, &[keys.public_key.as_bytes(), seed]);
    assert_eq!(text, point_text(&p192::scalar_mult_base_g(&r)));
}

#[test]
fn test_answer_layout() {
    for keys in keypairs("answer layout", 4) {
        let public_key = parse_public_key(&keys.public_key).unwrap();
        let (_, text) = issue_challenge(&public_key, b"seed");
        let answer = answer_challenge(keys.private_key.as_str(), &text).unwrap();

        let mut k_bytes = [0u8; 24];
        hex::decode_to_slice(keys.private_key.as_str(), &mut k_bytes).unwrap();
        let k = Scalar::from_canonical_bytes(&k_bytes).unwrap();
        let shared = p192::scalar_mult(&k, &point_from_text(&text));

        let mut h = Sha256::new();
        h.update(ANSWER_DOMAIN)
            .update(text.as_bytes())
            .update(point_text(&shared).as_bytes());
        assert_eq!(answer, hex::encode(h.finalize()));
    }
}
