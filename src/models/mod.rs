//! Models module
//!
//! Data types shared by the markup normalizer, the ChordPro converter and
//! the chord diagram builder.

pub mod applicature;
pub mod chord;
pub mod pitch_class;
pub mod song;

// Re-export commonly used types
pub use applicature::{ChordVariant, Finger, FingerData, FretPosition, StringFret, STRING_COUNT};
pub use chord::ChordToken;
pub use pitch_class::{PitchClass, Spelling};
pub use song::{ChordProLine, ChordProSong, LyricSegment, SectionBoundary, SectionKind, SongDetail};
