/// Semitone-based chord transposition
///
/// Root and bass move by the same number of semitones over the 12-entry
/// pitch-class table; the quality is carried over untouched. Each note keeps
/// its own accidental style (a flat bass stays flat) unless a spelling is
/// forced; naturals follow the root's style, defaulting to sharps.

use crate::models::{ChordToken, PitchClass, Spelling};
use crate::parse::markup::{tokenize, MarkupToken};

/// Transpose a chord, keeping the accidental style of the original
pub fn transpose_chord(chord: &ChordToken, semitones: i32) -> ChordToken {
    transpose_chord_with(chord, semitones, None)
}

/// Transpose a chord, optionally forcing sharp or flat spelling
pub fn transpose_chord_with(chord: &ChordToken, semitones: i32, spelling: Option<Spelling>) -> ChordToken {
    let root_spelling = spelling
        .or_else(|| Spelling::of_note(&chord.root))
        .unwrap_or_default();

    let root = transpose_note(&chord.root, semitones, root_spelling);
    let bass = chord.bass.as_ref().map(|bass| {
        let bass_spelling = spelling
            .or_else(|| Spelling::of_note(bass))
            .unwrap_or(root_spelling);
        transpose_note(bass, semitones, bass_spelling)
    });

    let transposed = ChordToken {
        raw_text: String::new(),
        root,
        quality: chord.quality.clone(),
        bass,
    };
    transposed.normalized()
}

fn transpose_note(note: &str, semitones: i32, spelling: Spelling) -> String {
    match PitchClass::from_note_name(note) {
        Some(pc) => pc.transpose(semitones).name(spelling).to_string(),
        None => {
            log::warn!("Cannot transpose unknown note '{}'", note);
            note.to_string()
        }
    }
}

/// Transpose every well-formed chord tag in raw tab text
///
/// Everything else, malformed tags included, is copied byte for byte.
pub fn transpose_tab(text: &str, semitones: i32) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        match token {
            MarkupToken::Chord { chord, .. } => {
                out.push_str("[ch]");
                out.push_str(&transpose_chord(&chord, semitones).name());
                out.push_str("[/ch]");
            }
            other => out.push_str(other.source()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::chord::extract_chord;

    fn up(name: &str, semitones: i32) -> String {
        transpose_chord(&extract_chord(name).unwrap(), semitones).name()
    }

    #[test]
    fn test_transpose_naturals_use_sharps() {
        assert_eq!(up("A", 1), "A#");
        assert_eq!(up("E", 1), "F");
        assert_eq!(up("G", 2), "A");
    }

    #[test]
    fn test_flat_roots_stay_flat() {
        assert_eq!(up("Bb", 1), "B");
        assert_eq!(up("Eb", 1), "E");
        assert_eq!(up("Ab", 2), "Bb");
        assert_eq!(up("Db", -1), "C");
    }

    #[test]
    fn test_quality_is_untouched() {
        assert_eq!(up("C#m7b5", 2), "D#m7b5");
        assert_eq!(up("Fmaj7", -1), "Emaj7");
    }

    #[test]
    fn test_bass_moves_with_root() {
        assert_eq!(up("G7/B", 2), "A7/C#");
        assert_eq!(up("C#m/Eb", 1), "Dm/E");
        assert_eq!(up("D/F#", -2), "C/E");
    }

    #[test]
    fn test_wraps_around_octave() {
        assert_eq!(up("G#", 1), "A");
        assert_eq!(up("A", -1), "G#");
        assert_eq!(up("C", 12), "C");
        assert_eq!(up("C", -24), "C");
    }

    #[test]
    fn test_forced_spelling() {
        let chord = extract_chord("C/G").unwrap();
        let flat = transpose_chord_with(&chord, 1, Some(Spelling::Flats));
        assert_eq!(flat.name(), "Db/Ab");
        assert_eq!(flat.raw_text, "Db/Ab");
    }

    #[test]
    fn test_transpose_tab_keeps_everything_else() {
        let tab = "[tab][ch]Am[/ch]  [ch]x[/ch] [ch]G/[/ch]\r\nla la[/tab]";
        assert_eq!(
            transpose_tab(tab, 2),
            "[tab][ch]Bm[/ch]  [ch]x[/ch] [ch]A[/ch]\r\nla la[/tab]"
        );
    }

    #[test]
    fn test_transpose_tab_zero_normalizes_only_chords() {
        assert_eq!(transpose_tab("[ch]E/[/ch] hey", 0), "[ch]E[/ch] hey");
    }
}
