//! Export operations for the WASM API
//!
//! This module provides ChordPro conversion in both directions:
//! - Export: song details plus tab markup to ChordPro text
//! - Import: ChordPro text back into a structured song

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, serialize};
use crate::converters::ChordProSettings;
use crate::models::SongDetail;
use crate::parse::parse_chord_pro;
use crate::renderers::to_chord_pro_with;
use crate::{wasm_info, wasm_log};

// ============================================================================
// ChordPro Export
// ============================================================================

/// Convert a song detail object to ChordPro text
///
/// # Parameters
/// * `detail_js` - `{title, artist, capo, key, difficulty, tuning, tab}`
/// * `settings_js` - optional `ChordProSettings`
///
/// # Returns
/// ChordPro document as a string
#[wasm_bindgen(js_name = toChordPro)]
pub fn export_chord_pro(detail_js: JsValue, settings_js: JsValue) -> Result<String, JsValue> {
    let detail: SongDetail = deserialize(detail_js, "Invalid song detail")?;
    let settings: ChordProSettings = deserialize_or_default(settings_js, "Invalid ChordPro settings")?;

    wasm_info!("toChordPro called for '{}' by '{}'", detail.title, detail.artist);
    let chordpro = to_chord_pro_with(&detail, &settings);
    wasm_log!("  ChordPro generated: {} bytes", chordpro.len());

    Ok(chordpro)
}

// ============================================================================
// ChordPro Import
// ============================================================================

/// Parse ChordPro text into a structured song
#[wasm_bindgen(js_name = parseChordPro)]
pub fn import_chord_pro(text: &str) -> Result<JsValue, JsValue> {
    let song = parse_chord_pro(text);
    wasm_info!("parseChordPro: '{}' with {} lines", song.title, song.lines.len());
    serialize(&song, "Failed to serialize ChordPro song")
}
