//! ChordPro export
//!
//! Output layout: header directives, one blank line, then one body line per
//! `ChordProLine`, every line terminated by `\n`. `parse_chord_pro` reads
//! this layout back to an equal `ChordProSong`, so emitting, parsing and
//! emitting again yields the same text.

use crate::converters::tab_to_chordpro::ChordProSettings;
use crate::models::{ChordProLine, ChordProSong, SectionBoundary, SongDetail};
use crate::parse::chordpro::{DIFFICULTY_LABEL, TUNING_LABEL};

/// Export a scraped song as ChordPro text
pub fn to_chord_pro(detail: &SongDetail) -> String {
    to_chord_pro_with(detail, &ChordProSettings::default())
}

pub fn to_chord_pro_with(detail: &SongDetail, settings: &ChordProSettings) -> String {
    ChordProSong::from_song_detail_with(detail, settings).to_chord_pro()
}

impl ChordProSong {
    pub fn to_chord_pro(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{{title: {}}}\n", self.title));
        out.push_str(&format!("{{artist: {}}}\n", self.artist));
        if let Some(capo) = self.capo {
            out.push_str(&format!("{{capo: {}}}\n", capo));
        }
        if let Some(key) = &self.key {
            out.push_str(&format!("{{key: {}}}\n", key));
        }
        if let Some(difficulty) = &self.difficulty {
            out.push_str(&format!("{{comment: {} {}}}\n", DIFFICULTY_LABEL, difficulty));
        }
        if let Some(tuning) = &self.tuning {
            out.push_str(&format!("{{comment: {} {}}}\n", TUNING_LABEL, tuning));
        }
        out.push('\n');

        for line in &self.lines {
            render_line(&mut out, line);
            out.push('\n');
        }

        out
    }
}

fn render_line(out: &mut String, line: &ChordProLine) {
    match line {
        ChordProLine::Lyrics(segments) => {
            for segment in segments {
                if let Some(chord) = &segment.chord {
                    out.push_str(&format!("[{}]", chord));
                }
                out.push_str(&segment.text);
            }
        }
        ChordProLine::Comment(text) => out.push_str(&format!("{{comment: {}}}", text)),
        ChordProLine::Section(boundary, kind) => {
            let prefix = match boundary {
                SectionBoundary::Start => "start_of_",
                SectionBoundary::End => "end_of_",
            };
            out.push_str(&format!("{{{}{}}}", prefix, kind.as_str()));
        }
        ChordProLine::Empty => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::chordpro::parse_chord_pro;

    fn detail(tab: &str) -> SongDetail {
        SongDetail {
            title: "Wonderwall".to_string(),
            artist: "Oasis".to_string(),
            capo: Some(2),
            difficulty: Some("novice".to_string()),
            tab: tab.to_string(),
            ..SongDetail::default()
        }
    }

    #[test]
    fn test_header_layout() {
        let text = to_chord_pro(&detail(""));
        assert_eq!(
            text,
            "{title: Wonderwall}\n{artist: Oasis}\n{capo: 2}\n{comment: Difficulty: novice}\n\n\n"
        );
    }

    #[test]
    fn test_body_layout() {
        let text = to_chord_pro(&detail("[Intro]\n[ch]Em7[/ch]  [ch]G[/ch]\nToday is gonna be"));
        let body = text.split("\n\n").nth(1).unwrap();
        assert_eq!(body, "{comment: Intro}\n[Em7]Today[G] is gonna be\n");
    }

    #[test]
    fn test_sections_render() {
        let song = ChordProSong {
            lines: vec![
                ChordProLine::Section(SectionBoundary::Start, crate::models::SectionKind::Chorus),
                ChordProLine::Section(SectionBoundary::End, crate::models::SectionKind::Chorus),
            ],
            ..ChordProSong::default()
        };
        assert!(song.to_chord_pro().ends_with("\n{start_of_chorus}\n{end_of_chorus}\n"));
    }

    #[test]
    fn test_emit_parse_emit_is_stable() {
        let text = to_chord_pro(&detail(
            "[Verse 1]\n[tab][ch]Em7[/ch]      [ch]G/[/ch]\nToday is gonna be the day[/tab]\n\n[ch]Dsus4[/ch]   [ch]A7sus4[/ch]\n",
        ));
        let reparsed = parse_chord_pro(&text);
        assert_eq!(reparsed.to_chord_pro(), text);
    }
}
