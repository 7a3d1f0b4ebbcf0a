//! Applicature table lookup
//!
//! The scraped page carries a JSON object mapping each chord name used in
//! the tab to its playable variants. Names in that table may carry the same
//! scraping artifacts as the tab itself ("G/"), so lookups fall back to the
//! normalized chord name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::builder::{build_diagram, ChordDiagram};
use crate::errors::{TabError, TabResult};
use crate::models::ChordVariant;
use crate::parse::{chord_names, extract_chord};

/// Applicature table keyed by normalized chord name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<ChordVariant>>", into = "BTreeMap<String, Vec<ChordVariant>>")]
pub struct ChordLibrary {
    chords: BTreeMap<String, Vec<ChordVariant>>,
}

impl From<BTreeMap<String, Vec<ChordVariant>>> for ChordLibrary {
    fn from(raw: BTreeMap<String, Vec<ChordVariant>>) -> Self {
        // Re-key by normalized name; the first spelling seen wins
        let mut chords = BTreeMap::new();
        for (name, variants) in raw {
            chords.entry(normalize_name(&name)).or_insert(variants);
        }
        ChordLibrary { chords }
    }
}

impl From<ChordLibrary> for BTreeMap<String, Vec<ChordVariant>> {
    fn from(library: ChordLibrary) -> Self {
        library.chords
    }
}

/// Diagram for one chord named in a tab; `None` renders as "no diagram available"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabChordDiagram {
    pub name: String,
    pub diagram: Option<ChordDiagram>,
}

impl ChordLibrary {
    pub fn from_json(json: &str) -> TabResult<Self> {
        serde_json::from_str(json).map_err(|e| TabError::InvalidApplicature(e.to_string()))
    }

    pub fn insert(&mut self, name: &str, variants: Vec<ChordVariant>) {
        self.chords.insert(normalize_name(name), variants);
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn variants(&self, name: &str) -> &[ChordVariant] {
        self.chords
            .get(&normalize_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Diagram for one variant of a chord; `None` when there is no such variant
    pub fn diagram(&self, name: &str, variant: usize) -> Option<TabResult<ChordDiagram>> {
        let variant = self.variants(name).get(variant)?;
        Some(build_diagram(&variant.frets, variant.fingers.as_ref()))
    }

    /// First-variant diagrams for every chord in a tab, in order of appearance
    pub fn diagrams_for_tab(&self, tab: &str) -> Vec<TabChordDiagram> {
        chord_names(tab)
            .into_iter()
            .map(|name| {
                let diagram = match self.diagram(&name, 0) {
                    Some(Ok(diagram)) => Some(diagram),
                    Some(Err(e)) => {
                        log::debug!("No diagram for '{}': {}", name, e);
                        None
                    }
                    None => {
                        log::debug!("No applicature for '{}'", name);
                        None
                    }
                };
                TabChordDiagram { name, diagram }
            })
            .collect()
    }
}

fn normalize_name(name: &str) -> String {
    match extract_chord(name.trim()) {
        Ok(chord) => chord.name(),
        Err(_) => name.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPLICATURE: &str = r#"{
        "Am": [{"frets": [-1, 0, 2, 2, 1, 0], "fingers": [0, 0, 2, 3, 1, 0]}],
        "G/": [{"frets": [3, 2, 0, 0, 0, 3]}, {"frets": [3, 5, 5, 4, 3, 3]}],
        "Ghost": [{"frets": [-1, -1, -1, -1, -1, -1]}]
    }"#;

    #[test]
    fn test_from_json_normalizes_names() {
        let library = ChordLibrary::from_json(APPLICATURE).unwrap();
        assert_eq!(library.len(), 3);
        assert_eq!(library.variants("G").len(), 2);
        assert_eq!(library.variants("G/").len(), 2);
        assert!(library.variants("C").is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = ChordLibrary::from_json(r#"{"Am": [{"frets": [0, 1]}]}"#).unwrap_err();
        assert!(matches!(err, TabError::InvalidApplicature(_)));
    }

    #[test]
    fn test_diagram_variants() {
        let library = ChordLibrary::from_json(APPLICATURE).unwrap();
        let second = library.diagram("G", 1).unwrap().unwrap();
        assert_eq!(second.window_start, 2);
        assert!(library.diagram("G", 2).is_none());
    }

    #[test]
    fn test_diagrams_for_tab() {
        let library = ChordLibrary::from_json(APPLICATURE).unwrap();
        let diagrams = library.diagrams_for_tab("[ch]Am[/ch] [ch]G/[/ch] [ch]C[/ch]");
        assert_eq!(diagrams.len(), 3);
        assert_eq!(diagrams[0].name, "Am");
        assert_eq!(diagrams[0].diagram.as_ref().unwrap().finger_labels[3].as_str(), "3");
        assert_eq!(diagrams[1].name, "G");
        assert!(diagrams[1].diagram.is_some());
        assert!(diagrams[2].diagram.is_none());
    }

    #[test]
    fn test_empty_variant_has_no_diagram() {
        let library = ChordLibrary::from_json(APPLICATURE).unwrap();
        assert_eq!(library.diagram("Ghost", 0), Some(Err(TabError::EmptyChordDiagram)));
    }

    #[test]
    fn test_deserialize_normalizes_names() {
        let library: ChordLibrary = serde_json::from_str(APPLICATURE).unwrap();
        assert_eq!(library.variants("G").len(), 2);
        assert_eq!(library, ChordLibrary::from_json(APPLICATURE).unwrap());

        let json = serde_json::to_value(&library).unwrap();
        assert!(json.get("G").is_some());
        assert!(json.get("G/").is_none());
    }
}
