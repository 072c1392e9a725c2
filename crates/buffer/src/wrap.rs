//! Soft wrapping of logical lines into fixed-width chunks.
//!
//! Wrapping is hard (character-counted) rather than word-aware: the
//! cursor arithmetic elsewhere relies on every chunk except the last of
//! a line being exactly `width` characters long.

/// Split a logical line into chunks of at most `width` characters.
///
/// An empty line yields exactly one empty chunk, so every logical line
/// occupies at least one display row. Concatenating the returned chunks
/// reproduces the input exactly.
///
/// A `width` of zero is treated as one to keep the split well defined.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
