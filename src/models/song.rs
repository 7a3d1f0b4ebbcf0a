//! Song-level models for ChordPro export and import

use serde::{Deserialize, Serialize};

use super::chord::ChordToken;

/// Scraped song as handed over by the fetch collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongDetail {
    pub title: String,
    pub artist: String,
    pub capo: Option<u8>,
    pub key: Option<String>,
    pub difficulty: Option<String>,
    pub tuning: Option<String>,

    /// Raw tab body with `[ch]` and `[tab]` markup
    pub tab: String,
}

/// Structured ChordPro document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordProSong {
    pub title: String,
    pub artist: String,
    pub capo: Option<u8>,
    pub key: Option<String>,
    pub difficulty: Option<String>,
    pub tuning: Option<String>,
    pub lines: Vec<ChordProLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ChordProLine {
    /// Lyric text with inline chords
    Lyrics(Vec<LyricSegment>),

    /// `{comment: ...}` in the body, typically a section heading
    Comment(String),

    /// `{start_of_chorus}`, `{end_of_tab}` and friends
    Section(SectionBoundary, SectionKind),

    Empty,
}

/// A chord and the lyric text it sits in front of
///
/// Only the first segment of a line may have no chord, and such a
/// segment always carries text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricSegment {
    pub chord: Option<ChordToken>,
    pub text: String,
}

impl LyricSegment {
    pub fn text(text: impl Into<String>) -> Self {
        LyricSegment { chord: None, text: text.into() }
    }

    pub fn chord(chord: ChordToken, text: impl Into<String>) -> Self {
        LyricSegment { chord: Some(chord), text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBoundary {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Chorus,
    Verse,
    Bridge,
    Tab,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Chorus => "chorus",
            SectionKind::Verse => "verse",
            SectionKind::Bridge => "bridge",
            SectionKind::Tab => "tab",
        }
    }

    /// Parse both long (`chorus`) and abbreviated (`c`) section names
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chorus" | "c" => Some(SectionKind::Chorus),
            "verse" | "v" => Some(SectionKind::Verse),
            "bridge" | "b" => Some(SectionKind::Bridge),
            "tab" | "t" => Some(SectionKind::Tab),
            _ => None,
        }
    }
}
