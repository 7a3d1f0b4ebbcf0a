//! Renderers module
//!
//! This module contains rendering/export logic for converting tab markup
//! and chord diagrams into display and interchange formats.

pub mod chordpro;
pub mod html;
pub mod svg;

// Re-export commonly used functions
pub use chordpro::{to_chord_pro, to_chord_pro_with};
pub use html::{render_chord_span, render_html, render_html_with, RenderSettings};
pub use svg::render_chord_diagram_svg;
