// src/panels/crypto.rs

use super::{join, yes_no};
use crate::config::{
    CipherConfig, CommitmentConfig, DhConfig, HashConfig, MacConfig, RsaConfig, SignatureConfig,
};
use crate::errors::{CliError, Result};
use crate::report::Report;
use cryptoplay_crypto::classical::{self, to_printable_ascii, to_spaced_hex};
use cryptoplay_crypto::hash::{hash_to_hex, HashAlgorithm, Sha256, ToyRolling32};
use cryptoplay_crypto::kex::{self, DhParams};
use cryptoplay_crypto::{mac, modes, signature, symmetric, HashCommitment, Pedersen, RsaKeyPair};
use rand::Rng;

/// Letters shown by the frequency analysis
const TOP_LETTERS: usize = 3;

/// Every supported hash applied to the same input
pub fn hash(config: &HashConfig) -> Result<Report> {
    let selected = config.algorithm()?;
    let mut report = Report::new("Hash Functions").entry("Input", &config.input);
    for algorithm in HashAlgorithm::ALL {
        report = report.entry(algorithm.name(), algorithm.hex_digest(&config.input));
    }

    let altered = format!("{}.", config.input);
    let before = selected.digest(config.input.as_bytes());
    let after = selected.digest(altered.as_bytes());
    let flipped: u32 = before.iter().zip(&after).map(|(a, b)| (a ^ b).count_ones()).sum();

    Ok(report
        .entry("Selected", selected)
        .entry("Cryptographic", yes_no(selected.is_cryptographic()))
        .entry(
            format!("Bits changed by appending \".\" ({} bits)", before.len() * 8),
            flipped,
        ))
}

/// HMAC-SHA-256 tag, verification and a tampered message
pub fn mac(config: &MacConfig) -> Result<Report> {
    let (key, message) = (config.key.as_bytes(), config.message.as_bytes());
    let trace = mac::hmac_traced::<Sha256>(key, message);
    let reference = mac::hmac_sha256_reference(key, message)?;
    let tampered_ok = mac::verify::<Sha256>(key, config.tampered_message.as_bytes(), &trace.tag);
    let toy = mac::hmac::<ToyRolling32>(key, message);

    Ok(Report::new("Message Authentication")
        .entry("Message", &config.message)
        .entry("HMAC-SHA-256", hash_to_hex(&trace.tag))
        .entry("Matches hmac crate", yes_no(reference == trace.tag))
        .entry("Verifies", yes_no(mac::verify::<Sha256>(key, message, &trace.tag)))
        .entry(format!("Verifies \"{}\"", config.tampered_message), yes_no(tampered_ok))
        .entry("HMAC over toy hash", hash_to_hex(&toy))
        .steps([
            format!("K' = key zero-padded to 64 bytes = {}", hash_to_hex(&trace.block_key)),
            format!("inner = H((K' ⊕ ipad) ‖ m) = {}", hash_to_hex(&trace.inner_hash)),
            format!("tag = H((K' ⊕ opad) ‖ inner) = {}", hash_to_hex(&trace.tag)),
        ]))
}

/// Hash commitment with a random nonce, then Pedersen and its homomorphism
pub fn commitment<R: Rng + ?Sized>(config: &CommitmentConfig, rng: &mut R) -> Result<Report> {
    let scheme = HashCommitment::<Sha256>::new();
    let nonce = HashCommitment::<Sha256>::random_nonce(rng);
    let secret = config.secret.as_bytes();
    let commitment = scheme.commit(secret, &nonce);
    let wrong = format!("{}0", config.secret);

    let pedersen = Pedersen::new(config.g, config.h, config.p)?;
    let c1 = pedersen.commit(config.message, config.randomness)?;
    let c2 = pedersen.commit(config.message2, config.randomness2)?;
    let combined = pedersen.combine(c1, c2)?;
    let overflow = || CliError::InvalidArgument("commitment sums overflow i64".to_string());
    let message_sum = config.message.checked_add(config.message2).ok_or_else(overflow)?;
    let randomness_sum = config.randomness.checked_add(config.randomness2).ok_or_else(overflow)?;
    let direct = pedersen.commit(message_sum, randomness_sum)?;

    Ok(Report::new("Commitments")
        .entry("Nonce", hex::encode(nonce))
        .entry("H(secret ‖ nonce)", hash_to_hex(&commitment))
        .entry("Opens to secret", yes_no(scheme.open(&commitment, secret, &nonce)))
        .entry(format!("Opens to \"{}\"", wrong), yes_no(scheme.open(&commitment, wrong.as_bytes(), &nonce)))
        .entry(
            "Pedersen parameters",
            format!("g = {}, h = {}, p = {}", pedersen.g, pedersen.h, pedersen.p),
        )
        .entry(format!("C({}, {})", config.message, config.randomness), c1)
        .entry(format!("C({}, {})", config.message2, config.randomness2), c2)
        .entry("C1 · C2 mod p", combined)
        .entry(
            format!("C({}, {})", message_sum, randomness_sum),
            direct,
        )
        .entry("Homomorphic", yes_no(combined == direct)))
}

/// Caesar with brute force, repeating-key XOR with key reuse, one-time pad
pub fn ciphers<R: Rng + ?Sized>(config: &CipherConfig, rng: &mut R) -> Result<Report> {
    let caesar = classical::caesar_encrypt(&config.caesar_plaintext, config.caesar_shift);
    let caesar_back = classical::caesar_decrypt(&caesar, config.caesar_shift);
    let frequencies = classical::frequency_analysis(&caesar, TOP_LETTERS);

    let key = config.xor_key.as_bytes();
    let xored = classical::xor_encrypt(config.xor_plaintext.as_bytes(), key)?;
    let xor_back = classical::xor_decrypt(&xored, key)?;
    let second = classical::xor_encrypt(config.xor_second_message.as_bytes(), key)?;
    let leak = classical::key_reuse_leak(&xored, &second);

    let otp_plain = config.otp_plaintext.as_bytes();
    let pad = classical::random_printable_key(otp_plain.len(), rng);
    let otp = classical::otp_encrypt(otp_plain, &pad)?;
    let otp_back = classical::otp_decrypt(&otp, &pad)?;

    Ok(Report::new("Classical Ciphers")
        .entry(format!("Caesar shift {}", config.caesar_shift), &caesar)
        .entry("Caesar decrypted", caesar_back)
        .entry(
            "Most frequent letters",
            join(frequencies.iter().map(|(c, n)| format!("{}×{}", c, n))),
        )
        .entry("XOR ciphertext", to_spaced_hex(&xored))
        .entry("XOR decrypted", String::from_utf8_lossy(&xor_back))
        .entry("Same key, second message", to_spaced_hex(&second))
        .entry("c1 ⊕ c2 = p1 ⊕ p2", to_printable_ascii(&leak))
        .entry("One-time pad key", String::from_utf8_lossy(&pad))
        .entry("One-time pad ciphertext", to_spaced_hex(&otp))
        .entry("One-time pad decrypted", String::from_utf8_lossy(&otp_back))
        .steps(
            classical::caesar_brute_force(&caesar)
                .into_iter()
                .map(|(shift, text)| format!("shift {:>2}: {}", shift, text)),
        ))
}

/// The same repeating plaintext under ECB and CBC
pub fn modes<R: Rng + ?Sized>(config: &CipherConfig, rng: &mut R) -> Result<Report> {
    let plaintext = config.block_plaintext.as_bytes();
    let key = config.block_key.as_bytes();
    let iv: [u8; modes::TOY_BLOCK_SIZE] = rng.gen();

    let ecb = modes::ecb_encrypt(plaintext, key)?;
    let cbc = modes::cbc_encrypt(plaintext, key, &iv)?;
    let ecb_ok = modes::ecb_decrypt(&ecb, key)? == plaintext;
    let cbc_ok = modes::cbc_decrypt(&cbc, key, &iv)? == plaintext;

    let block_lines = |label: &str, bytes: &[u8]| -> Vec<String> {
        bytes
            .chunks(modes::TOY_BLOCK_SIZE)
            .enumerate()
            .map(|(i, block)| format!("{} block {}: {}", label, i, to_spaced_hex(block)))
            .collect()
    };

    Ok(Report::new("Block Cipher Modes")
        .entry("Plaintext", &config.block_plaintext)
        .entry("IV", to_spaced_hex(&iv))
        .entry("ECB repeated blocks", modes::repeated_blocks(&ecb))
        .entry("CBC repeated blocks", modes::repeated_blocks(&cbc))
        .entry("ECB round trip", yes_no(ecb_ok))
        .entry("CBC round trip", yes_no(cbc_ok))
        .steps(block_lines("ECB", &ecb))
        .steps(block_lines("CBC", &cbc)))
}

/// AES-256-GCM encryption, decryption and tamper detection
pub fn aes<R: Rng + ?Sized>(config: &CipherConfig, rng: &mut R) -> Result<Report> {
    let key = symmetric::generate_key(rng);
    let plaintext = config.aes_plaintext.as_bytes();
    let sealed = symmetric::encrypt(plaintext, &key, rng)?;
    let opened = symmetric::decrypt(&sealed, &key)?;

    let mut tampered = sealed.clone();
    if let Some(last) = tampered.last_mut() {
        *last ^= 0x01;
    }
    let tamper_result = match symmetric::decrypt(&tampered, &key) {
        Ok(_) => "accepted".to_string(),
        Err(e) => format!("rejected ({})", e),
    };

    let (nonce, body) = sealed.split_at(cryptoplay_crypto::AES_NONCE_SIZE);
    Ok(Report::new("AES-256-GCM")
        .entry("Key", hex::encode(key.as_bytes()))
        .entry("Nonce", hex::encode(nonce))
        .entry("Ciphertext + tag", hex::encode(body))
        .entry("Decrypted", String::from_utf8_lossy(&opened))
        .entry("Flipped last tag bit", tamper_result))
}

/// Finite-field exchange with toy numbers, then X25519
pub fn dh<R: Rng + ?Sized>(config: &DhConfig, rng: &mut R) -> Result<Report> {
    let params = DhParams::new(config.p, config.g)?;
    let a = config.alice_private.unwrap_or_else(|| params.generate_private(rng));
    let b = config.bob_private.unwrap_or_else(|| params.generate_private(rng));
    let alice_public = params.public(a)?;
    let bob_public = params.public(b)?;
    let alice_shared = params.shared_secret(a, bob_public)?;
    let bob_shared = params.shared_secret(b, alice_public)?;
    let (x_alice, x_bob) = kex::x25519_reference(rng)?;

    Ok(Report::new("Diffie-Hellman")
        .entry("Parameters", format!("p = {}, g = {}", params.p, params.g))
        .entry("Alice private a", a)
        .entry("Bob private b", b)
        .entry("A = g^a mod p", alice_public)
        .entry("B = g^b mod p", bob_public)
        .entry("Alice computes B^a mod p", alice_shared)
        .entry("Bob computes A^b mod p", bob_shared)
        .entry("Secrets agree", yes_no(alice_shared == bob_shared))
        .entry("X25519 shared secret", hex::encode(x_alice))
        .entry("X25519 secrets agree", yes_no(x_alice == x_bob)))
}

/// Key generation, encryption and signing with small primes
pub fn rsa(config: &RsaConfig) -> Result<Report> {
    let keys = RsaKeyPair::generate(config.p, config.q, config.e)?;
    let m = config.message;
    let c = keys.encrypt(m)?;
    let decrypted = keys.decrypt(c)?;
    let signature = keys.sign(m)?;

    Ok(Report::new("Textbook RSA")
        .entry("Public key (n, e)", format!("({}, {})", keys.public.n, keys.public.e))
        .entry("Private exponent d", keys.private_exponent())
        .entry("Message m", m)
        .entry("c = m^e mod n", c)
        .entry("c^d mod n", decrypted)
        .entry("Signature m^d mod n", signature)
        .entry("Signature verifies", yes_no(keys.verify(m, signature)?))
        .steps(keys.key_generation_steps()))
}

/// Ed25519 with a fresh key pair
pub fn sign<R: Rng + ?Sized>(config: &SignatureConfig, rng: &mut R) -> Result<Report> {
    let keys = cryptoplay_crypto::SigningKeyPair::generate(rng);
    let public = keys.public_key();
    let message = config.message.as_bytes();
    let sig = keys.sign(message);
    let tampered = format!("{} ", config.message);

    Ok(Report::new("Ed25519 Signatures")
        .entry("Public key", hex::encode(public))
        .entry("Signature", hex::encode(sig))
        .entry("Verifies", yes_no(signature::verify(&public, message, &sig)?))
        .entry(
            "Verifies with trailing space",
            yes_no(signature::verify(&public, tampered.as_bytes(), &sig)?),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaygroundConfig;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_hash_panel() {
        let report = hash(&HashConfig::default()).unwrap();
        assert_eq!(
            report.value("SHA-256"),
            Some("315f5bdb76d078c43b8ac0064e4a0164612b1fce77c869345bfc94c75894edd3")
        );
        assert_eq!(report.value("Cryptographic"), Some("yes"));
        let flipped: u32 = report
            .value("Bits changed by appending \".\" (256 bits)")
            .unwrap()
            .parse()
            .unwrap();
        assert!(flipped > 64 && flipped < 192);
    }

    #[test]
    fn test_mac_panel() {
        let report = mac(&MacConfig::default()).unwrap();
        assert_eq!(report.value("Matches hmac crate"), Some("yes"));
        assert_eq!(report.value("Verifies"), Some("yes"));
        assert_eq!(report.value("Verifies \"Hello, World! (modified)\""), Some("no"));
        assert_eq!(report.steps.len(), 3);
    }

    #[test]
    fn test_commitment_panel() {
        let report = commitment(&CommitmentConfig::default(), &mut rng()).unwrap();
        assert_eq!(report.value("Opens to secret"), Some("yes"));
        assert_eq!(report.value("Opens to \"420\""), Some("no"));
        assert_eq!(report.value("Homomorphic"), Some("yes"));
        assert_eq!(report.value("C1 · C2 mod p"), report.value("C(18, 30)"));
    }

    #[test]
    fn test_commitment_panel_sum_overflow() {
        let config = CommitmentConfig {
            message: i64::MAX,
            message2: 1,
            ..CommitmentConfig::default()
        };
        assert!(matches!(
            commitment(&config, &mut rng()),
            Err(CliError::InvalidArgument(_))
        ));

        let config = CommitmentConfig {
            randomness: i64::MIN,
            randomness2: -1,
            ..CommitmentConfig::default()
        };
        assert!(commitment(&config, &mut rng()).is_err());
    }

    #[test]
    fn test_cipher_panel() {
        let report = ciphers(&CipherConfig::default(), &mut rng()).unwrap();
        assert_eq!(report.value("Caesar shift 3"), Some("KHOOR ZRUOG"));
        assert_eq!(report.value("Caesar decrypted"), Some("HELLO WORLD"));
        assert_eq!(report.value("Most frequent letters"), Some("O×3, R×2, K×1"));
        assert_eq!(report.value("XOR decrypted"), Some("Hello, World!"));
        assert_eq!(report.value("One-time pad decrypted"), Some("ATTACK AT DAWN"));
        assert_eq!(report.steps.len(), 26);
        assert_eq!(report.steps[3], "shift  3: HELLO WORLD");
    }

    #[test]
    fn test_modes_panel() {
        let report = modes(&CipherConfig::default(), &mut rng()).unwrap();
        assert_eq!(report.value("ECB repeated blocks"), Some("2"));
        assert_eq!(report.value("ECB round trip"), Some("yes"));
        assert_eq!(report.value("CBC round trip"), Some("yes"));
        // 32 bytes plus a full padding block
        assert_eq!(report.steps.len(), 10);
    }

    #[test]
    fn test_aes_panel() {
        let report = aes(&CipherConfig::default(), &mut rng()).unwrap();
        assert_eq!(report.value("Decrypted"), Some("Hello, cryptography world!"));
        assert!(report.value("Flipped last tag bit").unwrap().starts_with("rejected"));
        assert_eq!(report.value("Nonce").unwrap().len(), 24);
    }

    #[test]
    fn test_dh_panel_fixed_privates() {
        let config = DhConfig {
            alice_private: Some(6),
            bob_private: Some(15),
            ..DhConfig::default()
        };
        let report = dh(&config, &mut rng()).unwrap();
        assert_eq!(report.value("A = g^a mod p"), Some("8"));
        assert_eq!(report.value("B = g^b mod p"), Some("19"));
        assert_eq!(report.value("Alice computes B^a mod p"), Some("2"));
        assert_eq!(report.value("Bob computes A^b mod p"), Some("2"));
        assert_eq!(report.value("X25519 secrets agree"), Some("yes"));
    }

    #[test]
    fn test_dh_panel_random_privates() {
        let report = dh(&DhConfig::default(), &mut rng()).unwrap();
        assert_eq!(report.value("Secrets agree"), Some("yes"));
    }

    #[test]
    fn test_rsa_panel() {
        let report = rsa(&RsaConfig::default()).unwrap();
        assert_eq!(report.value("Public key (n, e)"), Some("(3233, 17)"));
        assert_eq!(report.value("Private exponent d"), Some("2753"));
        assert_eq!(report.value("c = m^e mod n"), Some("2790"));
        assert_eq!(report.value("c^d mod n"), Some("65"));
        assert_eq!(report.value("Signature m^d mod n"), Some("588"));
        assert_eq!(report.value("Signature verifies"), Some("yes"));
        assert_eq!(report.steps.len(), 5);
    }

    #[test]
    fn test_rsa_message_too_large() {
        let config = RsaConfig {
            message: 4000,
            ..RsaConfig::default()
        };
        assert!(rsa(&config).is_err());
    }

    #[test]
    fn test_sign_panel() {
        let config = PlaygroundConfig::default();
        let report = sign(&config.signature, &mut rng()).unwrap();
        assert_eq!(report.value("Verifies"), Some("yes"));
        assert_eq!(report.value("Verifies with trailing space"), Some("no"));
        assert_eq!(report.value("Signature").unwrap().len(), 128);
    }
}
