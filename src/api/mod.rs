//! Chord Sheet WASM API
//!
//! This module provides the JavaScript-facing API. Functions are grouped by
//! functional domain and share the serialization, logging and error helpers.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `render`: Tab markup to HTML, chord extraction and transposition
//! - `export`: ChordPro export and import
//! - `diagram`: Chord diagrams from applicature data

pub mod helpers;
pub mod diagram;
pub mod export;
pub mod render;

// Re-export all public functions from modules to keep one flat API surface
pub use diagram::{build_chord_diagram, diagrams_for_tab, render_chord_diagram};
pub use export::{export_chord_pro, import_chord_pro};
pub use render::{
    chord_names_js, extract_chord_js, render_html_js, render_html_with_js, transpose_chord_js,
    transpose_tab_js,
};
