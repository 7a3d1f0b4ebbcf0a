//! Applicature model: how one chord variant is fingered
//!
//! Source data gives six fret numbers per variant (in the string order the
//! site supplies) where a negative number means the string is not played,
//! plus an optional parallel array of finger codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{TabError, TabResult};

pub const STRING_COUNT: usize = 6;

/// State of one string in a chord variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "fret", rename_all = "lowercase")]
pub enum StringFret {
    Muted,
    Open,
    Fretted(u8),
}

impl StringFret {
    /// Decode a source fret number: negative = muted, 0 = open
    pub fn from_raw(raw: i32) -> TabResult<Self> {
        match raw {
            r if r < 0 => Ok(StringFret::Muted),
            0 => Ok(StringFret::Open),
            r => u8::try_from(r)
                .map(StringFret::Fretted)
                .map_err(|_| TabError::InvalidFretPosition(format!("fret {} out of range", r))),
        }
    }

    pub fn to_raw(self) -> i32 {
        match self {
            StringFret::Muted => -1,
            StringFret::Open => 0,
            StringFret::Fretted(f) => f as i32,
        }
    }

    pub fn fretted(self) -> Option<u8> {
        match self {
            StringFret::Fretted(f) => Some(f),
            _ => None,
        }
    }
}

/// Fret positions for all six strings of one chord variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct FretPosition(pub [StringFret; STRING_COUNT]);

impl FretPosition {
    pub fn from_slice(raw: &[i32]) -> TabResult<Self> {
        if raw.len() != STRING_COUNT {
            return Err(TabError::InvalidFretPosition(format!(
                "expected {} strings, got {}",
                STRING_COUNT,
                raw.len()
            )));
        }

        let mut strings = [StringFret::Muted; STRING_COUNT];
        for (slot, &value) in strings.iter_mut().zip(raw) {
            *slot = StringFret::from_raw(value)?;
        }
        Ok(FretPosition(strings))
    }

    pub fn strings(&self) -> &[StringFret; STRING_COUNT] {
        &self.0
    }
}

impl TryFrom<Vec<i32>> for FretPosition {
    type Error = TabError;

    fn try_from(raw: Vec<i32>) -> Result<Self, Self::Error> {
        FretPosition::from_slice(&raw)
    }
}

impl From<FretPosition> for Vec<i32> {
    fn from(position: FretPosition) -> Self {
        position.0.iter().map(|s| s.to_raw()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
    Thumb,
}

impl Finger {
    /// Source finger code: 1-4 for index..pinky, 5 for thumb
    pub fn from_code(code: i64) -> Option<Finger> {
        match code {
            1 => Some(Finger::Index),
            2 => Some(Finger::Middle),
            3 => Some(Finger::Ring),
            4 => Some(Finger::Pinky),
            5 => Some(Finger::Thumb),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
            Finger::Thumb => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Index => "1",
            Finger::Middle => "2",
            Finger::Ring => "3",
            Finger::Pinky => "4",
            Finger::Thumb => "T",
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One finger code as it appears in source JSON: a number or a label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFinger {
    Code(i64),
    Label(String),
}

impl RawFinger {
    fn decode(&self) -> Option<Finger> {
        match self {
            RawFinger::Code(0) => None,
            RawFinger::Code(code) => {
                let finger = Finger::from_code(*code);
                if finger.is_none() {
                    log::warn!("Ignoring unknown finger code {}", code);
                }
                finger
            }
            RawFinger::Label(label) => match label.trim() {
                "" | "0" => None,
                "T" | "t" => Some(Finger::Thumb),
                other => {
                    let finger = other.parse::<i64>().ok().and_then(Finger::from_code);
                    if finger.is_none() {
                        log::warn!("Ignoring unknown finger label '{}'", other);
                    }
                    finger
                }
            },
        }
    }
}

/// Per-string finger assignment supplied alongside a `FretPosition`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<RawFinger>>", into = "Vec<Option<RawFinger>>")]
pub struct FingerData(pub [Option<Finger>; STRING_COUNT]);

impl FingerData {
    pub fn get(&self, string: usize) -> Option<Finger> {
        self.0.get(string).copied().flatten()
    }
}

impl TryFrom<Vec<Option<RawFinger>>> for FingerData {
    type Error = TabError;

    fn try_from(raw: Vec<Option<RawFinger>>) -> Result<Self, Self::Error> {
        if raw.len() != STRING_COUNT {
            return Err(TabError::InvalidApplicature(format!(
                "expected {} finger codes, got {}",
                STRING_COUNT,
                raw.len()
            )));
        }

        let mut fingers = [None; STRING_COUNT];
        for (slot, code) in fingers.iter_mut().zip(&raw) {
            *slot = code.as_ref().and_then(RawFinger::decode);
        }
        Ok(FingerData(fingers))
    }
}

impl From<FingerData> for Vec<Option<RawFinger>> {
    fn from(data: FingerData) -> Self {
        data.0
            .iter()
            .map(|finger| match finger {
                None => Some(RawFinger::Code(0)),
                Some(Finger::Thumb) => Some(RawFinger::Label("T".to_string())),
                Some(f) => Some(RawFinger::Code(f.code())),
            })
            .collect()
    }
}

/// One playable variant of a named chord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordVariant {
    pub frets: FretPosition,

    #[serde(default)]
    pub fingers: Option<FingerData>,
}
