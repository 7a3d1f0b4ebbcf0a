//! Error types for tab normalization and chord diagrams
//!
//! None of these are fatal: scraped input is untrusted, so every failure
//! degrades to a visible fallback (literal text, "no diagram available",
//! a dropped directive line).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// Chord tag interior does not start with a note letter
    #[error("Malformed chord tag: '{0}'")]
    MalformedChordTag(String),

    /// Chord variant where every string is muted
    #[error("No diagram available: chord has no playable string")]
    EmptyChordDiagram,

    /// Unknown or unparseable ChordPro directive
    #[error("Invalid ChordPro directive: {0}")]
    InvalidChordProDirective(String),

    /// Applicature with the wrong number of strings or an out-of-range fret
    #[error("Invalid fret position: {0}")]
    InvalidFretPosition(String),

    /// Applicature JSON that could not be decoded
    #[error("Invalid applicature data: {0}")]
    InvalidApplicature(String),
}

pub type TabResult<T> = Result<T, TabError>;
