// tests/integration.rs

//! Integration tests for the cryptographic constructions.
//!
//! Each test follows one panel end to end, crossing module boundaries
//! where the panel does (hash feeding HMAC and commitments, DH feeding AES).

use cryptoplay_crypto::*;
use cryptoplay_crypto::{classical, hash, kex, mac, modes, rsa, signature, symmetric};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_hash_panel_every_algorithm() {
    for algorithm in HashAlgorithm::ALL {
        let hex_digest = algorithm.hex_digest("hello");
        assert_eq!(hex_digest.len(), 2 * algorithm.output_size());
        // Avalanche: one character changes the output
        assert_ne!(hex_digest, algorithm.hex_digest("hellp"));
        let parsed: HashAlgorithm = algorithm.name().parse().unwrap();
        assert_eq!(parsed, algorithm);
    }
    assert!("MD5".parse::<HashAlgorithm>().is_err());
}

#[test]
fn test_mac_tampered_message() {
    let key = b"shared secret key";
    let tag = mac::hmac::<hash::Sha256>(key, b"Transfer $100 to Alice");
    assert_eq!(tag, mac::hmac_sha256_reference(key, b"Transfer $100 to Alice").unwrap());
    assert!(mac::verify::<hash::Sha256>(key, b"Transfer $100 to Alice", &tag));
    assert!(!mac::verify::<hash::Sha256>(key, b"Transfer $900 to Alice", &tag));
    assert!(!mac::verify::<hash::Sha256>(b"other key", b"Transfer $100 to Alice", &tag));
}

#[test]
fn test_commitment_coin_flip() {
    let mut rng = StdRng::seed_from_u64(99);
    let scheme = HashCommitment::<hash::Sha3_256>::new();
    let nonce = HashCommitment::<hash::Sha3_256>::random_nonce(&mut rng);
    let commitment = scheme.commit(b"heads", &nonce);
    assert!(scheme.open(&commitment, b"heads", &nonce));
    assert!(!scheme.open(&commitment, b"tails", &nonce));

    let pedersen = Pedersen::new(3, 5, 23).unwrap();
    let c1 = pedersen.commit(7, 13).unwrap();
    let c2 = pedersen.commit(11, 17).unwrap();
    assert_eq!(c1, 19);
    assert_eq!(pedersen.combine(c1, c2).unwrap(), pedersen.commit(18, 30).unwrap());
}

#[test]
fn test_caesar_break_by_frequency() {
    let plaintext = "MEET ME AT THE PARK AT SEVEN THE PLAN IS SET";
    let ciphertext = classical::caesar_encrypt(plaintext, 7);
    let (top, _) = classical::frequency_analysis(&ciphertext, 1)[0];
    // The most common letter is E, so its shift reveals the key
    let guessed = (top as u8 - b'E') as u32;
    assert_eq!(guessed, 7);
    let candidates = classical::caesar_brute_force(&ciphertext);
    assert_eq!(candidates[guessed as usize].1, plaintext);
}

#[test]
fn test_xor_key_reuse_exposes_plaintext_xor() {
    let mut rng = StdRng::seed_from_u64(4);
    let key = classical::random_printable_key(16, &mut rng);
    let (p1, p2) = (b"attack at dawn!!", b"retreat at nine!");
    let c1 = classical::otp_encrypt(p1, &key).unwrap();
    let c2 = classical::otp_encrypt(p2, &key).unwrap();
    let leak = classical::key_reuse_leak(&c1, &c2);
    // Knowing p1 recovers p2 without the key
    let recovered: Vec<u8> = leak.iter().zip(p1.iter()).map(|(l, p)| l ^ p).collect();
    assert_eq!(recovered, p2);
}

#[test]
fn test_ecb_versus_cbc() {
    let pattern: Vec<u8> = b"BLOCK".repeat(13);
    let block_aligned: Vec<u8> = b"AAAAAAAA".repeat(6);
    let key = b"8bytekey";

    let ecb = modes::ecb_encrypt(&block_aligned, key).unwrap();
    let cbc = modes::cbc_encrypt(&block_aligned, key, b"ivivivIV").unwrap();
    assert_eq!(modes::repeated_blocks(&ecb), 5);
    assert_eq!(modes::repeated_blocks(&cbc), 0);

    assert_eq!(modes::ecb_decrypt(&modes::ecb_encrypt(&pattern, key).unwrap(), key).unwrap(), pattern);
}

#[test]
fn test_dh_then_aes() {
    let mut rng = StdRng::seed_from_u64(2024);
    let alice = X25519KeyPair::generate(&mut rng);
    let bob = X25519KeyPair::generate(&mut rng);
    let shared = alice.diffie_hellman(&bob.public()).unwrap();

    let key = SymmetricKey::from_slice(&hash::blake3_hash(&shared)).unwrap();
    let ciphertext = symmetric::encrypt(b"meet at noon", &key, &mut rng).unwrap();

    let bob_shared = bob.diffie_hellman(&alice.public()).unwrap();
    let bob_key = SymmetricKey::from_slice(&hash::blake3_hash(&bob_shared)).unwrap();
    assert_eq!(symmetric::decrypt(&ciphertext, &bob_key).unwrap(), b"meet at noon");
}

#[test]
fn test_toy_dh_defaults() {
    let params = DhParams::new(DEFAULT_DH_PRIME, DEFAULT_DH_GENERATOR).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let (a, b) = (params.generate_private(&mut rng), params.generate_private(&mut rng));
    let (pa, pb) = (params.public(a).unwrap(), params.public(b).unwrap());
    assert_eq!(params.shared_secret(a, pb).unwrap(), params.shared_secret(b, pa).unwrap());

    let (x, y) = kex::x25519_reference(&mut rng).unwrap();
    assert_eq!(x, y);
}

#[test]
fn test_rsa_and_ed25519_signatures() {
    let key = rsa::RsaKeyPair::generate(61, 53, 17).unwrap();
    let message = 1234;
    let s = key.sign(message).unwrap();
    assert!(key.public.verify(message, s).unwrap());
    assert!(matches!(key.encrypt(4000), Err(CryptoError::MessageTooLarge { .. })));

    let mut rng = StdRng::seed_from_u64(77);
    let signer = SigningKeyPair::generate(&mut rng);
    let sig = signer.sign(b"I owe you 10");
    assert!(signature::verify(&signer.public_key(), b"I owe you 10", &sig).unwrap());
    assert!(!signature::verify(&signer.public_key(), b"I owe you 99", &sig).unwrap());
}

#[test]
fn test_errors_display_and_source() {
    let err: CryptoError = cryptoplay_math::MathError::InvalidModulus(0).into();
    assert!(err.to_string().starts_with("Math error"));
    assert!(std::error::Error::source(&err).is_some());
}
