// src/modes.rs

//! ECB and CBC over a toy 8-byte block cipher.
//!
//! The "cipher" is XOR with the key followed by a one-byte rotation. It is
//! a permutation, which is all the modes need, and it is trivially
//! breakable. Use [`crate::symmetric`] for anything real.

use crate::errors::{CryptoError, Result};
use std::collections::HashSet;

/// Block and key size of the toy cipher
pub const TOY_BLOCK_SIZE: usize = 8;

/// One toy block
pub type Block = [u8; TOY_BLOCK_SIZE];

fn to_block(bytes: &[u8], what: &str) -> Result<Block> {
    bytes.try_into().map_err(|_| {
        CryptoError::InvalidKey(format!(
            "{} must be {} bytes, got {}",
            what,
            TOY_BLOCK_SIZE,
            bytes.len()
        ))
    })
}

/// Toy block encryption: XOR with the key, then rotate left one byte
pub fn toy_encrypt_block(block: &Block, key: &Block) -> Block {
    let mut out = [0u8; TOY_BLOCK_SIZE];
    for (i, (b, k)) in block.iter().zip(key).enumerate() {
        out[i] = b ^ k;
    }
    out.rotate_left(1);
    out
}

/// Inverse of [`toy_encrypt_block`]
pub fn toy_decrypt_block(block: &Block, key: &Block) -> Block {
    let mut out = *block;
    out.rotate_right(1);
    for (b, k) in out.iter_mut().zip(key) {
        *b ^= k;
    }
    out
}

/// PKCS#7 padding to a multiple of `block_size`; always adds at least one byte
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Strips and checks PKCS#7 padding
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(CryptoError::InvalidPadding(format!(
            "length {} is not a positive multiple of {}",
            data.len(),
            block_size
        )));
    }
    let pad = data[data.len() - 1] as usize;
    if pad == 0 || pad > block_size {
        return Err(CryptoError::InvalidPadding(format!("pad byte {} out of range", pad)));
    }
    let (body, tail) = data.split_at(data.len() - pad);
    if tail.iter().any(|&b| b as usize != pad) {
        return Err(CryptoError::InvalidPadding("inconsistent pad bytes".to_string()));
    }
    Ok(body.to_vec())
}

fn blocks(data: &[u8]) -> impl Iterator<Item = Block> + '_ {
    data.chunks_exact(TOY_BLOCK_SIZE).map(|chunk| {
        let mut block = [0u8; TOY_BLOCK_SIZE];
        block.copy_from_slice(chunk);
        block
    })
}

fn check_ciphertext(ciphertext: &[u8]) -> Result<()> {
    if ciphertext.is_empty() || ciphertext.len() % TOY_BLOCK_SIZE != 0 {
        return Err(CryptoError::DecryptionError(format!(
            "ciphertext length {} is not a positive multiple of {}",
            ciphertext.len(),
            TOY_BLOCK_SIZE
        )));
    }
    Ok(())
}

/// Electronic codebook: every block encrypted independently
///
/// # Example
/// ```
/// use cryptoplay_crypto::modes::{ecb_encrypt, repeated_blocks};
///
/// let c = ecb_encrypt(b"SAMEBLK!SAMEBLK!", b"toy key!").unwrap();
/// assert_eq!(repeated_blocks(&c), 1);
/// ```
pub fn ecb_encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = to_block(key, "key")?;
    Ok(blocks(&pkcs7_pad(plaintext, TOY_BLOCK_SIZE))
        .flat_map(|b| toy_encrypt_block(&b, &key))
        .collect())
}

/// Inverse of [`ecb_encrypt`]
pub fn ecb_decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = to_block(key, "key")?;
    check_ciphertext(ciphertext)?;
    let padded: Vec<u8> = blocks(ciphertext)
        .flat_map(|b| toy_decrypt_block(&b, &key))
        .collect();
    pkcs7_unpad(&padded, TOY_BLOCK_SIZE)
}

/// Cipher block chaining: each plaintext block is XORed with the previous ciphertext block
pub fn cbc_encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let key = to_block(key, "key")?;
    let mut previous = to_block(iv, "IV")?;
    let mut out = Vec::new();
    for mut block in blocks(&pkcs7_pad(plaintext, TOY_BLOCK_SIZE)) {
        for (b, p) in block.iter_mut().zip(&previous) {
            *b ^= p;
        }
        previous = toy_encrypt_block(&block, &key);
        out.extend_from_slice(&previous);
    }
    Ok(out)
}

/// Inverse of [`cbc_encrypt`]
pub fn cbc_decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let key = to_block(key, "key")?;
    let mut previous = to_block(iv, "IV")?;
    check_ciphertext(ciphertext)?;
    let mut padded = Vec::with_capacity(ciphertext.len());
    for block in blocks(ciphertext) {
        let mut plain = toy_decrypt_block(&block, &key);
        for (b, p) in plain.iter_mut().zip(&previous) {
            *b ^= p;
        }
        padded.extend_from_slice(&plain);
        previous = block;
    }
    pkcs7_unpad(&padded, TOY_BLOCK_SIZE)
}

/// Number of ciphertext blocks that repeat an earlier block
pub fn repeated_blocks(ciphertext: &[u8]) -> usize {
    let mut seen = HashSet::new();
    blocks(ciphertext).filter(|b| !seen.insert(*b)).count()
}
