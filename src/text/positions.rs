//! Occurrence offsets of a needle

use crate::error::{Error, Result};

/// Byte offsets of every occurrence of `needle`, overlapping ones included.
///
/// After a hit the scan resumes one character past its start, so the
/// result is strictly increasing.
pub fn find_positions(text: &str, needle: &str) -> Result<Vec<usize>> {
    if needle.is_empty() {
        return Err(Error::EmptyNeedle);
    }

    let mut positions = Vec::new();
    let mut start = 0;

    while let Some(pos) = text[start..].find(needle) {
        let actual_pos = start + pos;
        positions.push(actual_pos);

        let step = text[actual_pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        start = actual_pos + step;
    }

    Ok(positions)
}

/// Convert sorted byte offsets into character offsets.
pub fn char_offsets(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(byte_offsets.len());
    let mut chars = 0;
    let mut cursor = 0;

    for &offset in byte_offsets {
        chars += text[cursor..offset].chars().count();
        cursor = offset;
        result.push(chars);
    }

    result
}
