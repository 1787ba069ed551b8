//! Text codec for the Hill cipher
//!
//! Converts between letters and the integers the matrix arithmetic works
//! on, strips input down to the cipher alphabet and splits it into
//! fixed-size blocks.

pub mod alphabet;
pub mod errors;
pub mod text;

pub use alphabet::{ALPHABET, MODULUS, letter_to_number, number_to_letter, reduce};
pub use errors::CipherError;
pub use text::{BLOCK_SIZE, PADDING, chunk, normalize};
