//! Chord token model
//!
//! A `ChordToken` is one recognized chord occurrence from a `[ch]...[/ch]`
//! tag or a ChordPro `[...]` annotation, split into root, quality and
//! optional bass note.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordToken {
    /// Tag interior exactly as scraped, e.g. "C#m/"
    pub raw_text: String,

    /// Note letter plus optional accidental
    pub root: String,

    /// Everything between root and bass separator; never contains '/'
    pub quality: String,

    /// Bass note after a slash, only when the slash is followed by a note
    pub bass: Option<String>,
}

/// Quality lexemes that show up in real chord names, longest first
const QUALITY_WORDS: &[&str] = &[
    "maj", "min", "dim", "aug", "sus", "add", "alt", "omit", "no", "mi",
    "M", "m", "°", "º", "ø", "Δ", "+", "-", "#", "b", "(", ")", ",", "^", "*",
];

impl ChordToken {
    /// Normalized chord name: root + quality (+ "/" + bass)
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Same chord with `raw_text` replaced by the normalized name
    pub fn normalized(&self) -> ChordToken {
        ChordToken { raw_text: self.name(), ..self.clone() }
    }

    /// Whether the quality is built only from conventional chord lexemes
    ///
    /// Used where a bracketed word may be prose rather than a chord:
    /// "[Bridge]" parses as root B with quality "ridge", which fails here.
    pub fn has_conventional_quality(&self) -> bool {
        let mut rest = self.quality.as_str();
        while !rest.is_empty() {
            if let Some(c) = rest.chars().next().filter(|c| c.is_ascii_digit()) {
                rest = &rest[c.len_utf8()..];
                continue;
            }
            match QUALITY_WORDS.iter().find(|w| rest.starts_with(*w)) {
                Some(word) => rest = &rest[word.len()..],
                None => return false,
            }
        }
        true
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}
