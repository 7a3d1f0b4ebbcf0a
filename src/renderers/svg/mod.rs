//! SVG rendering output
//!
//! This module provides SVG rendering for chord diagrams.

pub mod chord_diagram;

pub use chord_diagram::render_chord_diagram_svg;
