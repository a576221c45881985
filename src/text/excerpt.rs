//! Fixed-length excerpt starting at a marker

use crate::error::{Error, Result};
use serde::Serialize;

/// Text window starting at the first occurrence of a marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    /// Byte offset of the marker in the source text
    pub offset: usize,
    /// Character offset of the marker in the source text
    pub char_offset: usize,
    /// At most `max_chars` characters, beginning with the marker
    pub text: String,
}

/// Cut an excerpt of up to `max_chars` characters starting at `marker`.
///
/// The window is counted in characters, not bytes, so multi-byte text is
/// never split mid-character. A missing marker is an error.
pub fn excerpt(text: &str, marker: &str, max_chars: usize) -> Result<Excerpt> {
    if marker.is_empty() {
        return Err(Error::EmptyNeedle);
    }

    let offset = text.find(marker).ok_or_else(|| Error::MarkerNotFound {
        marker: marker.to_string(),
    })?;

    let char_offset = text[..offset].chars().count();
    let window: String = text[offset..].chars().take(max_chars).collect();

    Ok(Excerpt {
        offset,
        char_offset,
        text: window,
    })
}
