//! Chord diagram derivation
//!
//! A diagram shows six fret rows. The window starts just above the lowest
//! fretted note, so that note always lands on the first row; open strings
//! sit at the nut and never move the window. Notes more than six frets
//! below the window start are clipped rather than rejected.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{TabError, TabResult};
use crate::models::{Finger, FingerData, FretPosition, StringFret, STRING_COUNT};

pub const WINDOW_ROWS: usize = 6;

/// Marker shown above or beside a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum FingerLabel {
    /// Finger number from source data
    Finger(Finger),
    Muted,
    Open,
    /// Fretted string without source finger data
    Blank,
}

impl FingerLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FingerLabel::Finger(finger) => finger.as_str(),
            FingerLabel::Muted => "x",
            FingerLabel::Open => "o",
            FingerLabel::Blank => "",
        }
    }
}

impl fmt::Display for FingerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<FingerLabel> for String {
    fn from(label: FingerLabel) -> Self {
        label.as_str().to_string()
    }
}

/// One finger held across several strings at the same fret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Barre {
    pub fret: u8,
    pub finger: Finger,
    pub first_string: usize,
    pub last_string: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordDiagram {
    pub strings: [StringFret; STRING_COUNT],

    /// Lowest fretted position, 0 when nothing is fretted
    pub min_fret: u8,

    /// Highest fretted position, 0 when nothing is fretted
    pub max_fret: u8,

    /// Fret line above the first row; rows show window_start+1 ..= window_start+6
    pub window_start: u8,

    /// `grid[string][row]` is true where the string is pressed
    pub grid: [[bool; WINDOW_ROWS]; STRING_COUNT],

    pub finger_labels: [FingerLabel; STRING_COUNT],

    pub barres: Vec<Barre>,

    /// Strings whose fretted note falls below the window
    pub clipped_strings: Vec<usize>,
}

impl ChordDiagram {
    /// Fret number of the first row, printed beside the grid when the
    /// window does not start at the nut
    pub fn base_fret(&self) -> u8 {
        self.window_start + 1
    }

    pub fn shows_nut(&self) -> bool {
        self.window_start == 0
    }

    /// Grid row a fret lands on, if it is inside the window
    pub fn row_of(&self, fret: u8) -> Option<usize> {
        let offset = fret as usize;
        let start = self.window_start as usize;
        if offset > start && offset <= start + WINDOW_ROWS {
            Some(offset - start - 1)
        } else {
            None
        }
    }
}

/// Derive a diagram from one applicature
///
/// Finger numbers are only shown when `fingers` supplies them; they are
/// never inferred from the fret shape.
pub fn build_diagram(position: &FretPosition, fingers: Option<&FingerData>) -> TabResult<ChordDiagram> {
    let strings = *position.strings();

    if strings.iter().all(|s| *s == StringFret::Muted) {
        return Err(TabError::EmptyChordDiagram);
    }

    let fretted: Vec<u8> = strings.iter().filter_map(|s| s.fretted()).collect();
    let min_fret = fretted.iter().copied().min().unwrap_or(0);
    let max_fret = fretted.iter().copied().max().unwrap_or(0);

    let mut diagram = ChordDiagram {
        strings,
        min_fret,
        max_fret,
        window_start: min_fret.saturating_sub(1),
        grid: [[false; WINDOW_ROWS]; STRING_COUNT],
        finger_labels: [FingerLabel::Blank; STRING_COUNT],
        barres: Vec::new(),
        clipped_strings: Vec::new(),
    };

    for (string, state) in strings.iter().enumerate() {
        diagram.finger_labels[string] = match state {
            StringFret::Muted => FingerLabel::Muted,
            StringFret::Open => FingerLabel::Open,
            StringFret::Fretted(_) => fingers
                .and_then(|f| f.get(string))
                .map(FingerLabel::Finger)
                .unwrap_or(FingerLabel::Blank),
        };

        if let StringFret::Fretted(fret) = state {
            match diagram.row_of(*fret) {
                Some(row) => diagram.grid[string][row] = true,
                None => diagram.clipped_strings.push(string),
            }
        }
    }

    if let Some(fingers) = fingers {
        diagram.barres = find_barres(&strings, fingers);
    }

    Ok(diagram)
}

/// Same supplied finger on the same fret across two or more strings
fn find_barres(strings: &[StringFret; STRING_COUNT], fingers: &FingerData) -> Vec<Barre> {
    let mut groups: BTreeMap<(u8, i64), (Finger, Vec<usize>)> = BTreeMap::new();

    for (string, state) in strings.iter().enumerate() {
        if let (Some(fret), Some(finger)) = (state.fretted(), fingers.get(string)) {
            groups
                .entry((fret, finger.code()))
                .or_insert_with(|| (finger, Vec::new()))
                .1
                .push(string);
        }
    }

    groups
        .into_iter()
        .filter(|(_, (_, members))| members.len() >= 2)
        .filter_map(|((fret, _), (finger, members))| {
            Some(Barre {
                fret,
                finger,
                first_string: *members.first()?,
                last_string: *members.last()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frets(raw: [i32; 6]) -> FretPosition {
        FretPosition::from_slice(&raw).unwrap()
    }

    fn fingers(raw: [i64; 6]) -> FingerData {
        let mut data = FingerData::default();
        for (slot, code) in data.0.iter_mut().zip(raw) {
            *slot = Finger::from_code(code);
        }
        data
    }

    #[test]
    fn test_open_position_chord() {
        let diagram = build_diagram(&frets([0, 2, 2, 1, 0, 0]), None).unwrap();
        assert_eq!(diagram.min_fret, 1);
        assert_eq!(diagram.max_fret, 2);
        assert_eq!(diagram.window_start, 0);
        assert!(diagram.shows_nut());
        assert!(diagram.grid[1][1]);
        assert!(diagram.grid[3][0]);
        assert!(!diagram.grid[0].iter().any(|&p| p));
        assert!(diagram.clipped_strings.is_empty());
    }

    #[test]
    fn test_all_muted_is_empty() {
        let err = build_diagram(&frets([-1; 6]), None).unwrap_err();
        assert_eq!(err, TabError::EmptyChordDiagram);
    }

    #[test]
    fn test_all_open_strings() {
        let diagram = build_diagram(&frets([0; 6]), None).unwrap();
        assert_eq!(diagram.min_fret, 0);
        assert_eq!(diagram.max_fret, 0);
        assert_eq!(diagram.window_start, 0);
        assert!(diagram.finger_labels.iter().all(|l| *l == FingerLabel::Open));
    }

    #[test]
    fn test_labels_without_finger_data() {
        let diagram = build_diagram(&frets([-1, 3, 2, 0, 1, 0]), None).unwrap();
        let labels: Vec<&str> = diagram.finger_labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(labels, vec!["x", "", "", "o", "", "o"]);
    }

    #[test]
    fn test_labels_pass_through_finger_data() {
        let diagram = build_diagram(&frets([-1, 3, 2, 0, 1, 0]), Some(&fingers([0, 3, 2, 0, 1, 0]))).unwrap();
        let labels: Vec<String> = diagram.finger_labels.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["x", "3", "2", "o", "1", "o"]);
    }

    #[test]
    fn test_finger_on_open_string_is_ignored() {
        let diagram = build_diagram(&frets([0, 2, 2, 1, 0, 0]), Some(&fingers([4, 2, 3, 1, 0, 0]))).unwrap();
        assert_eq!(diagram.finger_labels[0], FingerLabel::Open);
    }

    #[test]
    fn test_high_position_window() {
        let diagram = build_diagram(&frets([5, 7, 7, 6, 5, 5]), None).unwrap();
        assert_eq!(diagram.window_start, 4);
        assert_eq!(diagram.base_fret(), 5);
        assert!(!diagram.shows_nut());
        assert!(diagram.grid[0][0]);
        assert!(diagram.grid[1][2]);
        assert!(diagram.grid[3][1]);
    }

    #[test]
    fn test_wide_stretch_is_clipped() {
        let diagram = build_diagram(&frets([1, -1, -1, -1, -1, 8]), None).unwrap();
        assert_eq!(diagram.window_start, 0);
        assert!(diagram.grid[0][0]);
        assert_eq!(diagram.clipped_strings, vec![5]);
        assert!(!diagram.grid[5].iter().any(|&p| p));
    }

    #[test]
    fn test_barre_from_finger_data() {
        let diagram = build_diagram(
            &frets([1, 3, 3, 2, 1, 1]),
            Some(&fingers([1, 3, 4, 2, 1, 1])),
        )
        .unwrap();
        assert_eq!(
            diagram.barres,
            vec![Barre { fret: 1, finger: Finger::Index, first_string: 0, last_string: 5 }]
        );
    }

    #[test]
    fn test_no_barre_without_finger_data() {
        let diagram = build_diagram(&frets([1, 3, 3, 2, 1, 1]), None).unwrap();
        assert!(diagram.barres.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let position = frets([-1, 0, 2, 2, 1, 0]);
        let a = serde_json::to_string(&build_diagram(&position, None).unwrap()).unwrap();
        let b = serde_json::to_string(&build_diagram(&position, None).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
