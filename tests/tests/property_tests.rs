//! Property-based tests for key derivation and the challenge exchange

use proptest::prelude::*;
use recrypto_auth::{
    answer_challenge, check_challenge, derive_private_key, fingerprint, issue_challenge,
    keys_match, parse_public_key, public_key_from_private,
};
use recrypto_params::auth::{ANSWER_TEXT_LEN, POINT_TEXT_LEN, PRIVATE_KEY_TEXT_LEN};

fn seed() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn derivation_is_deterministic_and_well_formed(seed in seed()) {
        let a = derive_private_key(&seed);
        let b = derive_private_key(&seed);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.private_key.as_str().len(), PRIVATE_KEY_TEXT_LEN);
        prop_assert_eq!(a.public_key.len(), POINT_TEXT_LEN);
        prop_assert!(a.public_key.starts_with('+') || a.public_key.starts_with('-'));
        prop_assert_eq!(public_key_from_private(a.private_key.as_str()).unwrap(), a.public_key.clone());
        prop_assert!(keys_match(a.private_key.as_str(), &a.public_key).unwrap());
    }

    #[test]
    fn negated_public_key_parses_but_does_not_match(seed in seed()) {
        let keys = derive_private_key(&seed);
        let sign = if keys.public_key.starts_with('+') { "-" } else { "+" };
        let negated = format!("{}{}", sign, &keys.public_key[1..]);

        let pk = parse_public_key(&negated).unwrap();
        prop_assert_eq!(pk.as_str(), negated.as_str());
        prop_assert!(!keys_match(keys.private_key.as_str(), &negated).unwrap());
    }

    #[test]
    fn honest_answers_verify(key_seed in seed(), nonce_seed in seed()) {
        let keys = derive_private_key(&key_seed);
        let pk = parse_public_key(&keys.public_key).unwrap();
        let (mut challenge, text) = issue_challenge(&pk, &nonce_seed);
        let answer = answer_challenge(keys.private_key.as_str(), &text).unwrap();
        prop_assert_eq!(answer.len(), ANSWER_TEXT_LEN);
        prop_assert!(check_challenge(&answer, &mut challenge));
        prop_assert!(!check_challenge(&answer, &mut challenge));
    }

    #[test]
    fn other_keys_are_rejected(a in seed(), b in seed(), nonce_seed in seed()) {
        prop_assume!(a != b);
        let owner = derive_private_key(&a);
        let other = derive_private_key(&b);
        let pk = parse_public_key(&owner.public_key).unwrap();
        let (mut challenge, text) = issue_challenge(&pk, &nonce_seed);
        let forged = answer_challenge(other.private_key.as_str(), &text).unwrap();
        prop_assert!(!check_challenge(&forged, &mut challenge));
    }

    #[test]
    fn arbitrary_strings_never_panic(text in ".{0,80}") {
        let _ = parse_public_key(&text);
        let _ = public_key_from_private(&text);
        let _ = answer_challenge(&text, &text);
    }

    #[test]
    fn wrong_length_strings_are_rejected(text in "[0-9a-f]{0,47}") {
        prop_assert!(public_key_from_private(&text).is_err());
        let signed = format!("+{}", text);
        prop_assert!(parse_public_key(&signed).is_err());
    }

    #[test]
    fn fingerprints_are_prefixes(input in ".*", len in 0usize..80) {
        let full = fingerprint(&input, 64);
        let short = fingerprint(&input, len);
        prop_assert!(full.as_str().starts_with(short.as_str()));
        prop_assert_eq!(short.as_str().len(), len.min(64));
    }
}
