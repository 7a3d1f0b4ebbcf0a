//! Parsing module
//!
//! Chord tag interiors, tab markup tokens and ChordPro import.

pub mod chord;
pub mod chordpro;
pub mod markup;

// Re-export commonly used functions
pub use chord::extract_chord;
pub use chordpro::parse_chord_pro;
pub use markup::{chord_names, tokenize, tokenize_lines, MarkupToken};
