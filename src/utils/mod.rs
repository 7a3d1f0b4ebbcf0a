//! Utility modules
//!
//! Small helpers shared by the renderers.

pub mod escape;

// Re-export commonly used functions
pub use escape::{push_aligned_text, xml_escape};
