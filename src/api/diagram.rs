//! Chord diagram operations for the WASM API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, tab_error};
use crate::diagram::{build_diagram, ChordDiagram, ChordLibrary};
use crate::models::{FingerData, FretPosition};
use crate::renderers::render_chord_diagram_svg;
use crate::{wasm_log, wasm_warn};

fn diagram_from_js(frets_js: JsValue, fingers_js: JsValue) -> Result<ChordDiagram, JsValue> {
    let frets: FretPosition = deserialize(frets_js, "Invalid fret position")?;
    let fingers: Option<FingerData> = if fingers_js.is_undefined() || fingers_js.is_null() {
        None
    } else {
        Some(deserialize(fingers_js, "Invalid finger data")?)
    };

    build_diagram(&frets, fingers.as_ref()).map_err(|e| tab_error("buildDiagram failed", e))
}

/// Build a chord diagram from six fret values and optional finger codes
///
/// Fails with "no diagram available" when every string is muted.
#[wasm_bindgen(js_name = buildDiagram)]
pub fn build_chord_diagram(frets_js: JsValue, fingers_js: JsValue) -> Result<JsValue, JsValue> {
    let diagram = diagram_from_js(frets_js, fingers_js)?;
    wasm_log!(
        "buildDiagram: frets {}..{}, window starts at {}",
        diagram.min_fret,
        diagram.max_fret,
        diagram.window_start
    );
    if !diagram.clipped_strings.is_empty() {
        wasm_warn!("buildDiagram: strings {:?} fall outside the fret window", diagram.clipped_strings);
    }
    serialize(&diagram, "Failed to serialize chord diagram")
}

/// Render a chord diagram straight to SVG markup
#[wasm_bindgen(js_name = renderChordDiagramSvg)]
pub fn render_chord_diagram(name: &str, frets_js: JsValue, fingers_js: JsValue) -> Result<String, JsValue> {
    let diagram = diagram_from_js(frets_js, fingers_js)?;
    Ok(render_chord_diagram_svg(&diagram, name))
}

/// Diagrams for every chord in a tab, using the page's applicature table
///
/// # Parameters
/// * `tab` - raw tab markup
/// * `applicature_json` - JSON object of chord name to variant list
///
/// # Returns
/// Array of `{name, diagram}`; `diagram` is null when no variant is playable
#[wasm_bindgen(js_name = diagramsForTab)]
pub fn diagrams_for_tab(tab: &str, applicature_json: &str) -> Result<JsValue, JsValue> {
    let library = ChordLibrary::from_json(applicature_json)
        .map_err(|e| tab_error("diagramsForTab failed", e))?;
    let diagrams = library.diagrams_for_tab(tab);
    wasm_log!("diagramsForTab: {} chords, library of {}", diagrams.len(), library.len());
    serialize(&diagrams, "Failed to serialize chord diagrams")
}
