//! End-to-end challenge-response tests across crates

use std::thread;

use recrypto_api::Result;
use recrypto_auth::{
    answer_challenge, check_challenge, derive_private_key, issue_challenge,
    issue_challenge_with_rng, keys_match, parse_public_key, public_key_from_private,
    release_challenge, release_public_key, ChallengeState,
};
use recrypto_tests::{flip_hex_char, init_tracing, keypairs, seeded_rng};

#[test]
fn test_honest_claimant_is_verified() -> Result<()> {
    init_tracing();
    let keys = derive_private_key(b"honest claimant");
    let public_key = parse_public_key(&keys.public_key)?;

    let (mut challenge, text) = issue_challenge(&public_key, b"verifier seed");
    let answer = answer_challenge(keys.private_key.as_str(), &text)?;

    assert!(check_challenge(&answer, &mut challenge));
    assert_eq!(challenge.state(), ChallengeState::Verified);

    release_challenge(challenge);
    release_public_key(public_key);
    Ok(())
}

#[test]
fn test_many_keys_many_nonces() -> Result<()> {
    init_tracing();
    let mut rng = seeded_rng(11);
    for keys in keypairs("many", 8) {
        let public_key = parse_public_key(&keys.public_key)?;
        for _ in 0..4 {
            let (mut challenge, text) = issue_challenge_with_rng(&public_key, &mut rng);
            let answer = answer_challenge(keys.private_key.as_str(), &text)?;
            assert!(check_challenge(&answer, &mut challenge));
        }
    }
    Ok(())
}

#[test]
fn test_forgery_with_other_keys_is_rejected() -> Result<()> {
    init_tracing();
    let victim = derive_private_key(b"victim");
    let public_key = parse_public_key(&victim.public_key)?;

    for attacker in keypairs("attacker", 10) {
        let (mut challenge, text) = issue_challenge(&public_key, b"seed");
        let forged = answer_challenge(attacker.private_key.as_str(), &text)?;
        assert!(!check_challenge(&forged, &mut challenge));
        assert_eq!(challenge.state(), ChallengeState::Rejected);
    }
    Ok(())
}

#[test]
fn test_tampered_answer_is_rejected() -> Result<()> {
    let keys = derive_private_key(b"tamper");
    let public_key = parse_public_key(&keys.public_key)?;
    let (_, text) = issue_challenge(&public_key, b"seed");
    let answer = answer_challenge(keys.private_key.as_str(), &text)?;

    for index in [0, 17, 63] {
        let (mut challenge, _) = issue_challenge(&public_key, b"seed");
        assert!(!check_challenge(&flip_hex_char(&answer, index), &mut challenge));
    }
    Ok(())
}

#[test]
fn test_answer_to_other_challenge_is_rejected() -> Result<()> {
    let keys = derive_private_key(b"replay");
    let public_key = parse_public_key(&keys.public_key)?;

    let (_, first) = issue_challenge(&public_key, b"first attempt");
    let replayed = answer_challenge(keys.private_key.as_str(), &first)?;

    let (mut second, second_text) = issue_challenge(&public_key, b"second attempt");
    assert_ne!(first, second_text);
    assert!(!check_challenge(&replayed, &mut second));
    Ok(())
}

#[test]
fn test_challenge_accepts_at_most_one_check() -> Result<()> {
    let keys = derive_private_key(b"single use");
    let public_key = parse_public_key(&keys.public_key)?;
    let (mut challenge, text) = issue_challenge(&public_key, b"seed");
    let answer = answer_challenge(keys.private_key.as_str(), &text)?;

    assert!(check_challenge(&answer, &mut challenge));
    for _ in 0..3 {
        assert!(!check_challenge(&answer, &mut challenge));
    }
    assert_eq!(challenge.state(), ChallengeState::Verified);
    Ok(())
}

#[test]
fn test_challenge_bound_to_its_key() -> Result<()> {
    let alice = derive_private_key(b"alice");
    let bob = derive_private_key(b"bob");
    let alice_pk = parse_public_key(&alice.public_key)?;

    let (mut challenge, text) = issue_challenge(&alice_pk, b"seed");
    assert_eq!(challenge.public_key(), alice.public_key);

    // Bob answering correctly for himself still fails Alice's challenge
    let bob_answer = answer_challenge(bob.private_key.as_str(), &text)?;
    assert!(!check_challenge(&bob_answer, &mut challenge));
    Ok(())
}

#[test]
fn test_key_helpers_agree() -> Result<()> {
    for keys in keypairs("helpers", 5) {
        let recomputed = public_key_from_private(keys.private_key.as_str())?;
        assert_eq!(recomputed, keys.public_key);
        assert!(keys_match(keys.private_key.as_str(), &keys.public_key)?);
    }
    let pairs = keypairs("cross", 2);
    assert!(!keys_match(pairs[0].private_key.as_str(), &pairs[1].public_key)?);
    Ok(())
}

#[test]
fn test_parallel_attempts() {
    init_tracing();
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            thread::spawn(move || {
                let keys = derive_private_key(&[i; 16]);
                let public_key = parse_public_key(&keys.public_key).unwrap();
                let mut rng = seeded_rng(i);
                let (mut challenge, text) = issue_challenge_with_rng(&public_key, &mut rng);
                let answer = answer_challenge(keys.private_key.as_str(), &text).unwrap();
                check_challenge(&answer, &mut challenge)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_challenge_moves_between_threads() -> Result<()> {
    let keys = derive_private_key(b"moving");
    let public_key = parse_public_key(&keys.public_key)?;
    let (challenge, text) = issue_challenge(&public_key, b"seed");
    let answer = answer_challenge(keys.private_key.as_str(), &text)?;

    let verified = thread::spawn(move || {
        let mut challenge = challenge;
        check_challenge(&answer, &mut challenge)
    })
    .join()
    .unwrap();
    assert!(verified);
    Ok(())
}
