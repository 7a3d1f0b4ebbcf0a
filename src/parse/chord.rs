//! Chord tag interior parsing
//!
//! Splits the text between `[ch]` and `[/ch]` into root, quality and bass.
//! A slash only introduces a bass note when a note letter follows it; a
//! dangling slash is a scraping artifact and is dropped.

use crate::errors::{TabError, TabResult};
use crate::models::pitch_class::note_prefix_len;
use crate::models::ChordToken;

/// Marker that ends the quality besides '/': the start of a closing tag
const CLOSE_MARKER: char = '[';

/// Parse one chord tag interior into a `ChordToken`
///
/// # Examples
/// - "A/" -> root "A", quality "", no bass
/// - "G7/B" -> root "G", quality "7", bass "B"
/// - "C#m/Eb" -> root "C#", quality "m", bass "Eb"
pub fn extract_chord(raw: &str) -> TabResult<ChordToken> {
    let root_len = note_prefix_len(raw).ok_or_else(|| TabError::MalformedChordTag(raw.to_string()))?;
    let root = &raw[..root_len];

    let after_root = &raw[root_len..];
    let quality_len = after_root
        .find(|c: char| c == '/' || c == CLOSE_MARKER)
        .unwrap_or(after_root.len());
    // Scraped tags often carry padding before the closing tag ("E5 ")
    let quality = after_root[..quality_len].trim_end();

    let mut rest = &after_root[quality_len..];
    let mut bass = None;

    if let Some(after_slash) = rest.strip_prefix('/') {
        match note_prefix_len(after_slash) {
            Some(bass_len) => {
                bass = Some(after_slash[..bass_len].to_string());
                rest = &after_slash[bass_len..];
            }
            None => {
                rest = rest.trim_start_matches('/');
            }
        }
    }

    // Slashes trailing a bass note ("C/G/") are the same artifact
    let rest = rest.trim_start_matches('/');
    if !rest.is_empty() {
        log::debug!("Chord tag '{}': ignoring trailing '{}'", raw, rest);
    }

    Ok(ChordToken {
        raw_text: raw.to_string(),
        root: root.to_string(),
        quality: quality.to_string(),
        bass,
    })
}
