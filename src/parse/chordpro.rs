//! ChordPro import
//!
//! Reads the subset of ChordPro this crate emits plus the common section
//! directives. Unknown directives are logged and dropped so files from
//! newer or richer tools still load.

use crate::errors::{TabError, TabResult};
use crate::models::{
    ChordProLine, ChordProSong, ChordToken, LyricSegment, SectionBoundary, SectionKind,
};
use crate::parse::chord::extract_chord;

pub const DIFFICULTY_LABEL: &str = "Difficulty:";
pub const TUNING_LABEL: &str = "Tuning:";

/// A `{name}` or `{name: value}` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: String,
    pub value: Option<&'a str>,
}

/// Recognize a directive line; `None` when the line is not `{...}`
pub fn parse_directive(line: &str) -> Option<Directive<'_>> {
    let inner = line.trim().strip_prefix('{')?.strip_suffix('}')?;
    let (name, value) = match inner.split_once(':') {
        Some((name, value)) => (name, Some(value.trim())),
        None => (inner, None),
    };
    Some(Directive { name: name.trim().to_lowercase(), value })
}

/// Parse ChordPro text into a structured song
///
/// Header directives (title, artist, capo, key and the difficulty/tuning
/// comments) are read until the first blank line, which is consumed, or
/// the first line that is not a header directive.
pub fn parse_chord_pro(text: &str) -> ChordProSong {
    let mut song = ChordProSong::default();
    let mut in_header = true;

    for line in text.lines() {
        if in_header {
            if line.trim().is_empty() {
                in_header = false;
                continue;
            }
            if let Some(directive) = parse_directive(line) {
                match apply_header_directive(&mut song, &directive) {
                    Ok(true) => continue,
                    Ok(false) => {}
                    Err(e) => {
                        log::warn!("{}; dropping line", e);
                        continue;
                    }
                }
            }
            in_header = false;
        }

        match parse_body_line(&mut song, line) {
            Ok(Some(parsed)) => song.lines.push(parsed),
            Ok(None) => {}
            Err(e) => log::warn!("{}; dropping line", e),
        }
    }

    song
}

/// Apply a directive that belongs in the header
///
/// Returns `Ok(false)` when the directive is valid but belongs to the body.
fn apply_header_directive(song: &mut ChordProSong, directive: &Directive<'_>) -> TabResult<bool> {
    if matches!(directive.name.as_str(), "comment" | "c" | "ci") {
        let value = directive.value.unwrap_or_default();
        if let Some(difficulty) = value.strip_prefix(DIFFICULTY_LABEL) {
            song.difficulty = Some(difficulty.trim().to_string());
            return Ok(true);
        }
        if let Some(tuning) = value.strip_prefix(TUNING_LABEL) {
            song.tuning = Some(tuning.trim().to_string());
            return Ok(true);
        }
        return Ok(false);
    }

    apply_metadata_directive(song, directive)
}

/// Title, artist, capo and key may appear anywhere in a file
fn apply_metadata_directive(song: &mut ChordProSong, directive: &Directive<'_>) -> TabResult<bool> {
    let value = directive.value.unwrap_or_default();
    match directive.name.as_str() {
        "title" | "t" => song.title = value.to_string(),
        "artist" | "subtitle" | "st" => song.artist = value.to_string(),
        "key" => song.key = Some(value.to_string()),
        "capo" => {
            let capo = value.parse::<u8>().map_err(|_| {
                TabError::InvalidChordProDirective(format!("capo '{}' is not a fret number", value))
            })?;
            song.capo = Some(capo);
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn parse_body_line(song: &mut ChordProSong, line: &str) -> TabResult<Option<ChordProLine>> {
    if line.is_empty() {
        return Ok(Some(ChordProLine::Empty));
    }

    let Some(directive) = parse_directive(line) else {
        return Ok(Some(ChordProLine::Lyrics(parse_lyric_line(line))));
    };

    if apply_metadata_directive(song, &directive)? {
        return Ok(None);
    }

    let name = directive.name.as_str();
    if matches!(name, "comment" | "c" | "ci") {
        return Ok(Some(ChordProLine::Comment(directive.value.unwrap_or_default().to_string())));
    }

    if let Some((boundary, kind)) = parse_section_name(name) {
        return Ok(Some(ChordProLine::Section(boundary, kind)));
    }

    Err(TabError::InvalidChordProDirective(line.trim().to_string()))
}

/// `start_of_chorus`, `eoc`, `start_of_tab`, ...
fn parse_section_name(name: &str) -> Option<(SectionBoundary, SectionKind)> {
    if let Some(kind) = name.strip_prefix("start_of_") {
        return SectionKind::from_name(kind).map(|k| (SectionBoundary::Start, k));
    }
    if let Some(kind) = name.strip_prefix("end_of_") {
        return SectionKind::from_name(kind).map(|k| (SectionBoundary::End, k));
    }
    let boundary = match name.get(..2)? {
        "so" => SectionBoundary::Start,
        "eo" => SectionBoundary::End,
        _ => return None,
    };
    match name.get(2..)? {
        kind if kind.len() == 1 => SectionKind::from_name(kind).map(|k| (boundary, k)),
        _ => None,
    }
}

/// Recognize `[X]` as a chord only when X looks like a real chord name
fn bracketed_chord(inner: &str) -> Option<ChordToken> {
    if inner.contains('[') {
        return None;
    }
    extract_chord(inner)
        .ok()
        .filter(ChordToken::has_conventional_quality)
        .map(|chord| chord.normalized())
}

/// Split a lyric line into chord-led segments
pub fn parse_lyric_line(line: &str) -> Vec<LyricSegment> {
    let mut segments = Vec::new();
    let mut current = LyricSegment::text(String::new());
    let mut rest = line;

    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let found = after
            .find(']')
            .and_then(|close| bracketed_chord(&after[..close]).map(|chord| (close, chord)));

        match found {
            Some((close, chord)) => {
                current.text.push_str(&rest[..open]);
                if current.chord.is_some() || !current.text.is_empty() {
                    segments.push(current);
                }
                current = LyricSegment::chord(chord, String::new());
                rest = &after[close + 1..];
            }
            None => {
                current.text.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }

    current.text.push_str(rest);
    if current.chord.is_some() || !current.text.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directive() {
        let d = parse_directive("{Title: Wish You Were Here}").unwrap();
        assert_eq!(d.name, "title");
        assert_eq!(d.value, Some("Wish You Were Here"));

        let d = parse_directive("  {soc}  ").unwrap();
        assert_eq!(d.name, "soc");
        assert_eq!(d.value, None);

        assert!(parse_directive("[Am]la la").is_none());
    }

    #[test]
    fn test_parse_header_and_body() {
        let text = "{title: Song}\n{artist: Band}\n{capo: 2}\n{comment: Difficulty: novice}\n\n[Am]Hello [G]world\n";
        let song = parse_chord_pro(text);
        assert_eq!(song.title, "Song");
        assert_eq!(song.artist, "Band");
        assert_eq!(song.capo, Some(2));
        assert_eq!(song.difficulty.as_deref(), Some("novice"));
        assert_eq!(song.lines.len(), 1);

        let ChordProLine::Lyrics(segments) = &song.lines[0] else {
            panic!("expected lyrics, got {:?}", song.lines[0]);
        };
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].chord.as_ref().unwrap().name(), "Am");
        assert_eq!(segments[0].text, "Hello ");
        assert_eq!(segments[1].chord.as_ref().unwrap().name(), "G");
        assert_eq!(segments[1].text, "world");
    }

    #[test]
    fn test_unknown_directive_is_dropped() {
        let text = "{title: A}\n\nline one\n{x_custom: 1}\nline two\n";
        let song = parse_chord_pro(text);
        assert_eq!(song.lines.len(), 2);
    }

    #[test]
    fn test_invalid_capo_is_dropped() {
        let song = parse_chord_pro("{title: A}\n{capo: high}\n\nla\n");
        assert_eq!(song.capo, None);
        assert_eq!(song.title, "A");
    }

    #[test]
    fn test_header_ends_at_body_directive() {
        let song = parse_chord_pro("{title: A}\n{comment: Verse 1}\nla\n");
        assert_eq!(
            song.lines,
            vec![
                ChordProLine::Comment("Verse 1".to_string()),
                ChordProLine::Lyrics(vec![LyricSegment::text("la")]),
            ]
        );
    }

    #[test]
    fn test_section_directives() {
        let song = parse_chord_pro("{title: A}\n\n{start_of_chorus}\nla\n{eoc}\n{sot}\n");
        assert_eq!(song.lines[0], ChordProLine::Section(SectionBoundary::Start, SectionKind::Chorus));
        assert_eq!(song.lines[2], ChordProLine::Section(SectionBoundary::End, SectionKind::Chorus));
        assert_eq!(song.lines[3], ChordProLine::Section(SectionBoundary::Start, SectionKind::Tab));
    }

    #[test]
    fn test_prose_brackets_stay_text() {
        let segments = parse_lyric_line("[Bridge] and [x] then [Am]la");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].chord, None);
        assert_eq!(segments[0].text, "[Bridge] and [x] then ");
        assert_eq!(segments[1].chord.as_ref().unwrap().name(), "Am");
    }

    #[test]
    fn test_adjacent_chords_and_unclosed_bracket() {
        let segments = parse_lyric_line("[C][G/B]la [oops");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "");
        assert_eq!(segments[1].chord.as_ref().unwrap().bass.as_deref(), Some("B"));
        assert_eq!(segments[1].text, "la [oops");
    }

    #[test]
    fn test_blank_lines_in_body() {
        let song = parse_chord_pro("{title: A}\n\n\nla\n\n");
        assert_eq!(
            song.lines,
            vec![
                ChordProLine::Empty,
                ChordProLine::Lyrics(vec![LyricSegment::text("la")]),
                ChordProLine::Empty,
            ]
        );
    }
}
