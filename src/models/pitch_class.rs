/// Twelve-tone pitch classes used for chord transposition
///
/// Index 0 is A and the table runs A, A#/Bb, B, C, C#/Db, D, D#/Eb, E, F,
/// F#/Gb, G, G#/Ab. Transposition is plain index arithmetic modulo 12; the
/// spelling (sharp or flat name) is chosen separately when a pitch class is
/// turned back into a note name.

use serde::{Deserialize, Serialize};
use std::fmt;

const SHARP_NAMES: [&str; 12] = ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"];
const FLAT_NAMES: [&str; 12] = ["A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab"];

/// Which enharmonic name to use for the five black-key pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    /// Spelling implied by a note name's accidental, if it has one
    pub fn of_note(name: &str) -> Option<Spelling> {
        match name.chars().nth(1) {
            Some('#') => Some(Spelling::Sharps),
            Some('b') => Some(Spelling::Flats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build from any integer, wrapping modulo 12
    pub fn from_index(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Parse a note name (letter plus optional `#`/`b`)
    ///
    /// Theoretical spellings wrap around: E# → F, Fb → E, B# → C, Cb → B.
    pub fn from_note_name(name: &str) -> Option<Self> {
        if note_prefix_len(name)? != name.len() {
            return None;
        }

        let mut chars = name.chars();
        let base = match chars.next()? {
            'A' => 0,
            'B' => 2,
            'C' => 3,
            'D' => 5,
            'E' => 7,
            'F' => 8,
            'G' => 10,
            _ => return None,
        };
        let offset = match chars.next() {
            Some('#') => 1,
            Some('b') => -1,
            _ => 0,
        };

        Some(PitchClass::from_index(base + offset))
    }

    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::from_index(self.0 as i32 + semitones)
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharps => SHARP_NAMES[self.0 as usize],
            Spelling::Flats => FLAT_NAMES[self.0 as usize],
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(Spelling::Sharps))
    }
}

/// True for the seven note letters a chord root or bass may start with
pub fn is_note_letter(c: char) -> bool {
    matches!(c, 'A'..='G')
}

/// Byte length of the note name at the start of `s`, if there is one
///
/// A note name is one letter `A`–`G` followed by at most one `#` or `b`.
pub fn note_prefix_len(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    if !is_note_letter(chars.next()?) {
        return None;
    }
    match chars.next() {
        Some('#') | Some('b') => Some(2),
        _ => Some(1),
    }
}
