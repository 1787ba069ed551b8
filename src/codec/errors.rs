//! Cipher errors
//!
//! Malformed input characters are not errors: normalization drops them.
//! The only failure the encode/decode pipeline can raise is a key matrix
//! with no inverse modulo the alphabet size.

use std::fmt;
use std::fmt::Display;

/// Errors raised by the codec and the modular arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Character is not a Latin letter after case folding
    ///
    /// Only reachable through [`letter_to_number`](super::letter_to_number)
    /// called directly; the encode/decode pipeline normalizes first.
    InvalidSymbol(char),

    /// `value` shares a factor with `modulus`, so no modular inverse exists
    ///
    /// Raised when decoding with a key matrix whose determinant is not
    /// coprime with 26. Decoding stops before any output is produced.
    NoInverseExists { value: i64, modulus: i64 },

    /// Modulus below 2, where modular inversion is meaningless
    InvalidModulus(i64),
}

impl std::error::Error for CipherError {}

impl Display for CipherError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CipherError::InvalidSymbol(ch) => write!(fmt, "invalid symbol {:?}", ch),
            CipherError::NoInverseExists { value, modulus } => {
                write!(fmt, "no inverse of {} modulo {}", value, modulus)
            }
            CipherError::InvalidModulus(m) => write!(fmt, "invalid modulus {}", m),
        }
    }
}
