//! Format converters
//!
//! This module contains converters between tab markup and ChordPro.

pub mod tab_to_chordpro;

// Re-export for convenience
pub use tab_to_chordpro::{convert_tab_body, ChordProSettings};
