pub mod builder;
pub mod library;

pub use builder::{build_diagram, Barre, ChordDiagram, FingerLabel, WINDOW_ROWS};
pub use library::{ChordLibrary, TabChordDiagram};
