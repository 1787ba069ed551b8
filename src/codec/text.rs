//! Input normalization and block chunking

/// Number of letters transformed together
pub const BLOCK_SIZE: usize = 2;

/// Filler appended to the last block when the text runs short
pub const PADDING: char = 'X';

/// Uppercases `text` and removes everything outside `A`..`Z`
///
/// Uses full Unicode case mapping before filtering, so `ß` contributes
/// `SS` while accented letters are dropped.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Right-pads `text` with `pad` to a multiple of `size` and splits it
///
/// Blocks come back in input order, each exactly `size` characters long.
/// Empty input, or a `size` of zero, yields no blocks.
pub fn chunk(text: &str, size: usize, pad: char) -> Vec<String> {
    if size == 0 {
        return Vec::new();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while chars.len() % size != 0 {
        chars.push(pad);
    }

    chars
        .chunks(size)
        .map(|block| block.iter().collect())
        .collect()
}
