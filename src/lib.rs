//! Chord Sheet WASM Module
//!
//! Normalizes scraped guitar-tab markup into HTML with aligned chord spans,
//! converts songs to and from ChordPro, and builds chord diagrams from
//! applicature data.

pub mod api;
pub mod converters;
pub mod diagram;
pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod transposition;
pub mod utils;

// Re-export commonly used types
pub use converters::ChordProSettings;
pub use diagram::{build_diagram, ChordDiagram, ChordLibrary};
pub use errors::{TabError, TabResult};
pub use models::{ChordProSong, ChordToken, ChordVariant, FingerData, FretPosition, SongDetail};
pub use parse::{chord_names, extract_chord, parse_chord_pro};
pub use renderers::{render_chord_diagram_svg, render_html, render_html_with, to_chord_pro, RenderSettings};
pub use transposition::{transpose_chord, transpose_tab};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        api::helpers::log_warn(&format!("Logger already initialized: {}", e));
    }

    log::info!("Chord sheet WASM module initialized");
}

