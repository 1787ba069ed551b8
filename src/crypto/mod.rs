//! Cryptographic module providing the Hill cipher
//!
//! - `matrix`: 2x2 determinant, modular inverse and matrix-vector product
//! - `hill`: the encode/decode pipeline built on top of it

pub mod hill;
pub mod matrix;

use crate::codec::CipherError;
use crate::crypto::hill::{HillBlock, KEY_MATRIX};
use crate::crypto::matrix::Matrix2;
use serde::{Deserialize, Serialize};

pub use hill::{decode, encode};

/// Core encryption/decryption trait
///
/// Implementations transform a byte buffer in place. The trait is
/// `Send + Sync` so a cipher can be shared across threads.
pub trait Block: Send + Sync {
    /// Encrypts data in-place
    fn encrypt(&self, data: &mut Vec<u8>) -> crate::Result<()>;

    /// Decrypts data in-place
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if decryption is impossible with this key; `data` is unchanged
    fn decrypt(&self, data: &mut Vec<u8>) -> crate::Result<()>;
}

/// Cipher configuration, read from the `[cipher]` table of a TOML file
///
/// ```toml
/// [cipher]
/// key = [[3, 3], [2, 5]]
/// padding = "X"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    // key matrix, must be invertible modulo 26 for decoding
    #[serde(default = "default_key")]
    pub key: Matrix2,

    // filler for the last block, A-Z
    #[serde(default = "default_padding")]
    pub padding: char,
}

fn default_key() -> Matrix2 {
    KEY_MATRIX
}

fn default_padding() -> char {
    crate::codec::PADDING
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            padding: default_padding(),
        }
    }
}

/// Factory function to create a cipher block from configuration
///
/// # Arguments
/// * `cfg` - Cipher configuration; key entries may be any `i64`, they are
///   reduced modulo 26
///
/// # Returns
/// * Boxed trait object implementing the Block trait
/// * `Err(CipherError::InvalidSymbol)` if the padding is not a letter. The
///   key itself is only checked when decoding.
///
/// # Examples
/// ```
/// use hillcipher::crypto::{new_block, CipherConfig};
/// let cipher = new_block(&CipherConfig::default()).unwrap();
/// let mut data = b"hi".to_vec();
/// cipher.encrypt(&mut data).unwrap();
/// assert_eq!(data, b"TC");
/// ```
pub fn new_block(cfg: &CipherConfig) -> Result<Box<dyn Block>, CipherError> {
    let block = HillBlock::new(cfg.key).with_padding(cfg.padding)?;
    if !matrix::is_invertible(block.key(), crate::codec::MODULUS) {
        tracing::warn!("key {:?} is not invertible modulo 26, decoding will fail", cfg.key);
    }
    Ok(Box::new(block))
}
