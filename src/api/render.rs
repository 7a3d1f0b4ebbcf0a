//! Markup rendering operations for the WASM API
//!
//! Scraped tab text goes in as a plain string; HTML, chord names and
//! transposed markup come back out.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, serialize, tab_error};
use crate::models::{ChordToken, Spelling};
use crate::parse::{chord_names, extract_chord};
use crate::renderers::{render_html, render_html_with, RenderSettings};
use crate::transposition::{transpose_chord_with, transpose_tab};
use crate::{wasm_info, wasm_log};

/// Render tab markup to HTML with the default class names
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html_js(text: &str) -> String {
    wasm_log!("renderHtml called ({} bytes)", text.len());
    render_html(text)
}

/// Render tab markup to HTML with caller-supplied settings
///
/// # Parameters
/// * `text` - raw tab markup
/// * `settings_js` - partial `RenderSettings` object; missing fields use defaults
#[wasm_bindgen(js_name = renderHtmlWith)]
pub fn render_html_with_js(text: &str, settings_js: JsValue) -> Result<String, JsValue> {
    let settings: RenderSettings = deserialize_or_default(settings_js, "Invalid render settings")?;
    wasm_log!("renderHtmlWith called ({} bytes, chord class '{}')", text.len(), settings.chord_class);
    Ok(render_html_with(text, &settings))
}

/// Parse one chord-tag interior into `{raw_text, root, quality, bass}`
#[wasm_bindgen(js_name = extractChord)]
pub fn extract_chord_js(raw: &str) -> Result<JsValue, JsValue> {
    let chord = extract_chord(raw).map_err(|e| tab_error("extractChord failed", e))?;
    serialize(&chord, "Failed to serialize chord")
}

/// Unique chord names of a tab in order of first appearance
#[wasm_bindgen(js_name = chordNames)]
pub fn chord_names_js(text: &str) -> js_sys::Array {
    let names = chord_names(text);
    wasm_log!("chordNames found {} chords", names.len());
    names.iter().map(|name| JsValue::from_str(name)).collect()
}

/// Transpose a chord by a number of semitones
///
/// # Parameters
/// * `chord_js` - either a chord name string or a serialized chord token
/// * `semitones` - signed shift
/// * `spelling` - optional "sharps" or "flats" to force accidentals
///
/// # Returns
/// The transposed chord token
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord_js(chord_js: JsValue, semitones: i32, spelling: JsValue) -> Result<JsValue, JsValue> {
    let chord = match chord_js.as_string() {
        Some(name) => extract_chord(&name).map_err(|e| tab_error("transposeChord failed", e))?,
        None => deserialize::<ChordToken>(chord_js, "Invalid chord token")?,
    };
    let spelling: Option<Spelling> = deserialize_or_default(spelling, "Invalid spelling")?;

    let transposed = transpose_chord_with(&chord, semitones, spelling);
    wasm_info!("transposeChord: {} {:+} -> {}", chord.name(), semitones, transposed.name());
    serialize(&transposed, "Failed to serialize chord")
}

/// Transpose every chord tag in raw tab markup
#[wasm_bindgen(js_name = transposeTab)]
pub fn transpose_tab_js(text: &str, semitones: i32) -> String {
    wasm_log!("transposeTab called ({} bytes, {:+} semitones)", text.len(), semitones);
    transpose_tab(text, semitones)
}
