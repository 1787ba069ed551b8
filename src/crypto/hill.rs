//! Hill cipher implementation
//!
//! Classical 2x2 Hill cipher over `A`..`Z`. Each pair of letters is read as
//! a vector and multiplied by the key matrix modulo 26; decryption does the
//! same with the key's modular inverse.
//!
//! ⚠️ SECURITY WARNING: the Hill cipher is linear and falls to a handful of
//! known plaintext pairs. It is provided for teaching and obfuscation only.
//!
//! # Pipeline
//! normalize → chunk into pairs (padding with `X`) → per-block transform →
//! concatenate in block order. Blocks are independent of each other.

use super::Block;
use super::matrix::{self, Matrix2};
use crate::codec::{self, BLOCK_SIZE, CipherError, MODULUS, PADDING};

/// Process-wide default key, invertible modulo 26 (det = 9)
pub const KEY_MATRIX: Matrix2 = [[3, 3], [2, 5]];

/// Hill cipher block
///
/// Holds the key matrix and the padding symbol. Immutable once built, so a
/// single instance can be shared between threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillBlock {
    key: Matrix2,
    padding: char,
}

impl Default for HillBlock {
    fn default() -> Self {
        Self::new(KEY_MATRIX)
    }
}

impl HillBlock {
    /// Creates a cipher with the given key and `X` padding
    ///
    /// Entries are reduced into `[0, 26)`, which changes neither the
    /// ciphertext nor `det mod 26` but keeps the arithmetic in range.
    /// Invertibility is not checked here: a singular key still encodes,
    /// and fails with `NoInverseExists` only once decoding is attempted.
    ///
    /// # Arguments
    /// * `key` - Key matrix, any `i64` entries
    pub fn new(key: Matrix2) -> Self {
        Self {
            key: key.map(|row| row.map(codec::reduce)),
            padding: PADDING,
        }
    }

    /// Replaces the padding symbol, folding it to uppercase
    ///
    /// # Errors
    /// `CipherError::InvalidSymbol` if `padding` is not a letter.
    pub fn with_padding(mut self, padding: char) -> Result<Self, CipherError> {
        codec::letter_to_number(padding)?;
        self.padding = padding.to_ascii_uppercase();
        Ok(self)
    }

    pub fn key(&self) -> &Matrix2 {
        &self.key
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    /// Inverse key, computed on every call and never cached
    pub fn inverse_key(&self) -> Result<Matrix2, CipherError> {
        matrix::invert_mod(&self.key, MODULUS)
    }

    /// Encrypts `text`; non-letters are dropped, output length is even
    pub fn encode(&self, text: &str) -> String {
        self.transform(text, &self.key)
    }

    /// Decrypts `text` with the inverse key
    ///
    /// # Errors
    /// `CipherError::NoInverseExists` if the key is not invertible modulo 26.
    /// Nothing is produced in that case.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let inverse = self.inverse_key()?;
        Ok(self.transform(text, &inverse))
    }

    fn transform(&self, text: &str, key: &Matrix2) -> String {
        let normalized = codec::normalize(text);
        let blocks = codec::chunk(&normalized, BLOCK_SIZE, self.padding);
        tracing::trace!("transforming {} blocks", blocks.len());

        let mut out = String::with_capacity(blocks.len() * BLOCK_SIZE);
        for block in &blocks {
            let mut vector = [0i64; 2];
            for (slot, ch) in vector.iter_mut().zip(block.chars()) {
                // normalize() only leaves A-Z and with_padding() rejects non-letters
                *slot = codec::letter_to_number(ch).unwrap_or(0);
            }
            for n in matrix::apply(key, &vector) {
                out.push(codec::number_to_letter(n));
            }
        }
        out
    }
}

impl Block for HillBlock {
    /// Encrypts the buffer in place, reading it as (lossy) UTF-8 text
    fn encrypt(&self, data: &mut Vec<u8>) -> crate::Result<()> {
        let encoded = self.encode(&String::from_utf8_lossy(data));
        data.clear();
        data.extend_from_slice(encoded.as_bytes());
        Ok(())
    }

    /// Decrypts the buffer in place; left untouched on failure
    fn decrypt(&self, data: &mut Vec<u8>) -> crate::Result<()> {
        let decoded = self.decode(&String::from_utf8_lossy(data))?;
        data.clear();
        data.extend_from_slice(decoded.as_bytes());
        Ok(())
    }
}

/// Encrypts `text` with the default key
pub fn encode(text: &str) -> String {
    HillBlock::default().encode(text)
}

/// Decrypts `text` with the default key
pub fn decode(text: &str) -> Result<String, CipherError> {
    HillBlock::default().decode(text)
}
