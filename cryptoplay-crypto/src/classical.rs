// src/classical.rs

//! Classical ciphers: Caesar, repeating-key XOR and the one-time pad.
//!
//! None of these are secure in practice. They exist to show frequency
//! analysis, brute force and the consequences of key reuse.

use crate::errors::{CryptoError, Result};
use rand::Rng;

const ALPHABET_LEN: u8 = 26;

/// Uppercases `text` and shifts A–Z forward by `shift`; other characters pass through
///
/// # Example
/// ```
/// use cryptoplay_crypto::classical::caesar_encrypt;
///
/// assert_eq!(caesar_encrypt("Hello, World", 3), "KHOOR, ZRUOG");
/// ```
pub fn caesar_encrypt(text: &str, shift: u32) -> String {
    let shift = (shift % ALPHABET_LEN as u32) as u8;
    text.to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (b'A' + (c as u8 - b'A' + shift) % ALPHABET_LEN) as char
            } else {
                c
            }
        })
        .collect()
}

/// Inverse of [`caesar_encrypt`]
pub fn caesar_decrypt(text: &str, shift: u32) -> String {
    caesar_encrypt(text, ALPHABET_LEN as u32 - shift % ALPHABET_LEN as u32)
}

/// All 26 candidate decryptions, indexed by shift
pub fn caesar_brute_force(ciphertext: &str) -> Vec<(u32, String)> {
    (0..ALPHABET_LEN as u32)
        .map(|shift| (shift, caesar_decrypt(ciphertext, shift)))
        .collect()
}

/// Most frequent letters A–Z, count descending, ties in first-seen order
pub fn frequency_analysis(text: &str, top: usize) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in text.chars().filter(|c| c.is_ascii_uppercase()) {
        match counts.iter_mut().find(|(letter, _)| *letter == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }
    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top);
    counts
}

fn require_key(key: &[u8]) -> Result<()> {
    if key.is_empty() {
        return Err(CryptoError::InvalidKey("XOR key must not be empty".to_string()));
    }
    Ok(())
}

/// XOR with `key` repeated to the message length
pub fn xor_encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    require_key(key)?;
    Ok(plaintext
        .iter()
        .zip(key.iter().cycle())
        .map(|(p, k)| p ^ k)
        .collect())
}

/// Same operation as [`xor_encrypt`]
pub fn xor_decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    xor_encrypt(ciphertext, key)
}

/// `c1 ⊕ c2` over the shorter length
///
/// When both were encrypted under the same key stream this equals `p1 ⊕ p2`,
/// with the key cancelled out.
pub fn key_reuse_leak(c1: &[u8], c2: &[u8]) -> Vec<u8> {
    c1.iter().zip(c2).map(|(a, b)| a ^ b).collect()
}

/// One-time pad encryption; the key must cover the whole message
pub fn otp_encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.len() < plaintext.len() {
        return Err(CryptoError::InvalidKey(format!(
            "one-time pad key has {} bytes, message needs {}",
            key.len(),
            plaintext.len()
        )));
    }
    Ok(plaintext.iter().zip(key).map(|(p, k)| p ^ k).collect())
}

/// One-time pad decryption
pub fn otp_decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    otp_encrypt(ciphertext, key)
}

/// Random key of printable ASCII (32..=126)
pub fn random_printable_key<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(32u8..=126)).collect()
}

/// Bytes as space-separated two-digit hex
pub fn to_spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bytes as ASCII with `·` for anything non-printable
pub fn to_printable_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if (32..=126).contains(&b) { b as char } else { '·' })
        .collect()
}

/// Bytes as space-separated eight-bit binary
pub fn to_binary(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
