//! Malformed-input and fingerprint tests for the textual interface

use recrypto_api::Error;
use recrypto_auth::{
    answer_challenge, derive_private_key, fingerprint, fingerprint_into, issue_challenge,
    keys_match, parse_public_key, public_key_from_private,
};
use recrypto_params::auth::{FINGERPRINT_TEXT_LEN, POINT_TEXT_LEN, PRIVATE_KEY_TEXT_LEN};
use recrypto_tests::seeded_rng;
use rand::RngCore;

fn assert_invalid_encoding<T: std::fmt::Debug>(result: Result<T, Error>) {
    match result {
        Err(Error::InvalidEncoding { .. }) => {}
        other => panic!("expected InvalidEncoding, got {:?}", other),
    }
}

#[test]
fn test_truncated_inputs() {
    let keys = derive_private_key(b"truncated");
    assert_invalid_encoding(parse_public_key(&keys.public_key[..POINT_TEXT_LEN - 1]));
    assert_invalid_encoding(public_key_from_private(
        &keys.private_key.as_str()[..PRIVATE_KEY_TEXT_LEN - 2],
    ));
    assert_invalid_encoding(parse_public_key(""));
    assert_invalid_encoding(public_key_from_private(""));
}

#[test]
fn test_wrong_scheme_inputs() {
    let keys = derive_private_key(b"scheme");
    // A private key is never a public key and the reverse
    assert_invalid_encoding(parse_public_key(keys.private_key.as_str()));
    assert_invalid_encoding(public_key_from_private(&keys.public_key));
    // Uppercase hex is not canonical
    assert_invalid_encoding(parse_public_key(&format!("{}A", &keys.public_key[..POINT_TEXT_LEN - 1])));
    assert_invalid_encoding(public_key_from_private(&format!(
        "{}A",
        &keys.private_key.as_str()[..PRIVATE_KEY_TEXT_LEN - 1]
    )));
}

#[test]
fn test_out_of_range_values() {
    // x = p is not a field element
    let x_is_p = format!("+{}fffffffe{}", "ffffffff".repeat(3), "ffffffff".repeat(2));
    assert_eq!(x_is_p.len(), POINT_TEXT_LEN);
    assert_invalid_encoding(parse_public_key(&x_is_p));

    // Zero and the group order are not private keys
    assert_invalid_encoding(public_key_from_private(&"0".repeat(PRIVATE_KEY_TEXT_LEN)));
    assert_invalid_encoding(public_key_from_private(
        "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    ));
    // n − 1 is fine
    assert!(public_key_from_private("ffffffffffffffffffffffff99def836146bc9b1b4d22830").is_ok());
}

#[test]
fn test_random_garbage_never_panics() {
    let mut rng = seeded_rng(99);
    let mut on_curve = 0;
    let mut not_on_curve = 0;
    for _ in 0..200 {
        let mut x = [0u8; 24];
        rng.fill_bytes(&mut x);
        let sign = if rng.next_u32() & 1 == 0 { '+' } else { '-' };
        let text = format!("{}{}", sign, hex::encode(x));
        match parse_public_key(&text) {
            Ok(pk) => {
                assert!(pk.fingerprint(64).is_complete());
                on_curve += 1;
            }
            Err(Error::PointNotOnCurve { context }) => {
                assert_eq!(context, "public key");
                not_on_curve += 1;
            }
            Err(Error::InvalidEncoding { .. }) => {}
            Err(other) => panic!("unexpected error {:?}", other),
        }
    }
    // About half of all x have a curve point
    assert!(on_curve > 50);
    assert!(not_on_curve > 50);
}

#[test]
fn test_answer_challenge_rejects_bad_challenge() {
    let keys = derive_private_key(b"bad challenge");
    let pk = parse_public_key(&keys.public_key).unwrap();
    let (_, text) = issue_challenge(&pk, b"seed");

    let err = answer_challenge(keys.private_key.as_str(), &text[..10]).unwrap_err();
    assert!(err.is_decode_error());
    assert!(matches!(err, Error::InvalidEncoding { context: "challenge", .. }));

    let err = answer_challenge(keys.private_key.as_str(), &format!("?{}", &text[1..])).unwrap_err();
    assert!(matches!(err, Error::InvalidEncoding { context: "challenge", .. }));
}

#[test]
fn test_keys_match_propagates_decode_errors() {
    let keys = derive_private_key(b"km");
    assert_invalid_encoding(keys_match("", &keys.public_key));
    assert_invalid_encoding(keys_match(keys.private_key.as_str(), ""));
}

#[test]
fn test_fingerprint_stability_and_truncation() {
    let a = fingerprint("abc", 16);
    let b = fingerprint("abc", 16);
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "ba7816bf8f01cfea");
    assert!(a.is_truncated());

    let short = fingerprint("some key", 4);
    assert_eq!(short.as_str().len(), 4);
    assert!(!short.is_complete());

    let full = fingerprint("abc", FINGERPRINT_TEXT_LEN);
    assert!(full.is_complete());
    assert!(full.as_str().starts_with(a.as_str()));
}

#[test]
fn test_public_key_fingerprint_matches_free_function() {
    let keys = derive_private_key(b"fp");
    let pk = parse_public_key(&keys.public_key).unwrap();
    assert_eq!(pk.fingerprint(20), fingerprint(keys.public_key.as_bytes(), 20));
}

#[test]
fn test_fingerprint_into_buffer_sizes() {
    let mut exact = [0u8; FINGERPRINT_TEXT_LEN];
    assert_eq!(fingerprint_into("abc", &mut exact).unwrap(), FINGERPRINT_TEXT_LEN);
    assert_eq!(
        std::str::from_utf8(&exact).unwrap(),
        fingerprint("abc", FINGERPRINT_TEXT_LEN).as_str()
    );

    let mut small = [7u8; FINGERPRINT_TEXT_LEN - 1];
    match fingerprint_into("abc", &mut small) {
        Err(Error::BufferTooSmall {
            required,
            available,
            ..
        }) => {
            assert_eq!(required, FINGERPRINT_TEXT_LEN);
            assert_eq!(available, FINGERPRINT_TEXT_LEN - 1);
        }
        other => panic!("expected BufferTooSmall, got {:?}", other),
    }
    assert!(small.iter().all(|&b| b == 7));
}
