//! Letter <-> number mapping over `A`..`Z`

use super::CipherError;

/// Ordered cipher alphabet, `A = 0` through `Z = 25`
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphabet size, the modulus of every arithmetic operation
pub const MODULUS: i64 = ALPHABET.len() as i64;

/// Reduces `n` into `[0, MODULUS)`, including negative values
pub fn reduce(n: i64) -> i64 {
    n.rem_euclid(MODULUS)
}

/// Returns the zero-based alphabet index of `ch` after uppercasing
///
/// # Errors
/// `CipherError::InvalidSymbol` if `ch` is not an ASCII letter.
pub fn letter_to_number(ch: char) -> Result<i64, CipherError> {
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Ok((upper as u8 - b'A') as i64)
    } else {
        Err(CipherError::InvalidSymbol(ch))
    }
}

/// Returns the alphabet symbol at `n` reduced modulo 26
pub fn number_to_letter(n: i64) -> char {
    (b'A' + reduce(n) as u8) as char
}
