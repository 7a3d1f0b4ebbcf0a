//! Tab markup to ChordPro converter
//!
//! Scraped tabs put chords on their own line above the lyric they belong
//! to, aligned by column. ChordPro puts them inline in front of the
//! syllable instead.
//!
//! # Line handling
//!
//! ```text
//! [ch]Am[/ch]     [ch]G[/ch]         [Am]Hello, is it [G]me
//! Hello, is it me             →
//! [Verse 2]                          {comment: Verse 2}
//! [ch]C[/ch]  [ch]F[/ch]             [C]  [F]
//! ```
//!
//! A chord line is merged into the next line only when that line is plain
//! lyric text. `[tab]` wrappers carry no meaning here and are dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{ChordProLine, ChordProSong, ChordToken, LyricSegment, SongDetail};
use crate::parse::markup::{tokenize_lines, MarkupToken};

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[([^\[\]]+)\]\s*$").expect("heading pattern is valid"));

/// Which auxiliary song fields make it into the ChordPro header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordProSettings {
    pub include_key: bool,
    pub include_difficulty: bool,
    pub include_tuning: bool,
}

impl Default for ChordProSettings {
    fn default() -> Self {
        Self {
            include_key: true,
            include_difficulty: true,
            include_tuning: true,
        }
    }
}

/// One tab line after classification
#[derive(Debug)]
enum TabLine<'a> {
    /// Only chord tags and whitespace; chords carry their visible column
    Chords {
        positions: Vec<(usize, ChordToken)>,
        tokens: Vec<MarkupToken<'a>>,
    },

    /// A whole-line `[Heading]`
    Heading(String),

    /// Lyric text, possibly with inline chord tags
    Text(Vec<MarkupToken<'a>>),

    Blank,
}

impl ChordProSong {
    pub fn from_song_detail(detail: &SongDetail) -> ChordProSong {
        Self::from_song_detail_with(detail, &ChordProSettings::default())
    }

    pub fn from_song_detail_with(detail: &SongDetail, settings: &ChordProSettings) -> ChordProSong {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        ChordProSong {
            title: detail.title.trim().to_string(),
            artist: detail.artist.trim().to_string(),
            capo: detail.capo.filter(|&capo| capo > 0),
            key: non_empty(&detail.key).filter(|_| settings.include_key),
            difficulty: non_empty(&detail.difficulty).filter(|_| settings.include_difficulty),
            tuning: non_empty(&detail.tuning).filter(|_| settings.include_tuning),
            lines: convert_tab_body(&detail.tab),
        }
    }
}

/// Convert a raw tab body into ChordPro body lines
pub fn convert_tab_body(tab: &str) -> Vec<ChordProLine> {
    let lines: Vec<TabLine<'_>> = tokenize_lines(tab).into_iter().map(classify).collect();
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        match &lines[i] {
            TabLine::Chords { positions, tokens } => match lines.get(i + 1) {
                Some(TabLine::Text(next)) if !has_inline_chords(next) => {
                    let lyric = visible_text(next);
                    out.push(ChordProLine::Lyrics(merge_chords_into_lyric(positions, &lyric)));
                    i += 1;
                }
                _ => out.push(ChordProLine::Lyrics(chord_only_segments(tokens))),
            },
            TabLine::Heading(heading) => out.push(ChordProLine::Comment(heading.clone())),
            TabLine::Text(tokens) => {
                let segments = inline_segments(tokens);
                if segments.is_empty() {
                    out.push(ChordProLine::Empty);
                } else {
                    out.push(ChordProLine::Lyrics(segments));
                }
            }
            TabLine::Blank => out.push(ChordProLine::Empty),
        }
        i += 1;
    }

    out
}

fn classify(tokens: Vec<MarkupToken<'_>>) -> TabLine<'_> {
    let tokens: Vec<MarkupToken<'_>> = tokens
        .into_iter()
        .filter(|t| !matches!(t, MarkupToken::TabOpen | MarkupToken::TabClose))
        .map(demote_unreadable_chord)
        .collect();

    if tokens.is_empty() {
        return TabLine::Blank;
    }

    let has_chord = tokens.iter().any(|t| matches!(t, MarkupToken::Chord { .. }));
    let only_spacing = tokens.iter().all(|t| match t {
        MarkupToken::Chord { .. } => true,
        MarkupToken::Text(text) => text.trim().is_empty(),
        _ => false,
    });

    if has_chord && only_spacing {
        let mut positions = Vec::new();
        let mut column = 0;
        for token in &tokens {
            match token {
                MarkupToken::Chord { chord, .. } => {
                    positions.push((column, chord.normalized()));
                    column += chord.raw_text.chars().count();
                }
                other => column += other.source().chars().count(),
            }
        }
        return TabLine::Chords { positions, tokens };
    }

    if let [MarkupToken::Text(text)] = tokens.as_slice() {
        if let Some(caps) = HEADING_RE.captures(text) {
            return TabLine::Heading(caps[1].trim().to_string());
        }
    }

    TabLine::Text(tokens)
}

/// Chords that a ChordPro reader would take for lyric text stay text
///
/// `parse_lyric_line` only reads `[X]` as a chord when X has a
/// conventional quality, so anything else is written as its interior.
fn demote_unreadable_chord(token: MarkupToken<'_>) -> MarkupToken<'_> {
    match token {
        MarkupToken::Chord { tag, chord } if !chord.has_conventional_quality() => {
            log::debug!("Chord '{}' has no ChordPro spelling; keeping it as text", chord.raw_text);
            let interior = tag
                .strip_prefix("[ch]")
                .and_then(|rest| rest.strip_suffix("[/ch]"))
                .unwrap_or(tag);
            MarkupToken::MalformedChord { tag, interior }
        }
        other => other,
    }
}

fn has_inline_chords(tokens: &[MarkupToken<'_>]) -> bool {
    tokens.iter().any(|t| matches!(t, MarkupToken::Chord { .. }))
}

/// Text as displayed: malformed chord tags show their interior
fn visible_text(tokens: &[MarkupToken<'_>]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            MarkupToken::MalformedChord { interior, .. } => *interior,
            other => other.source(),
        })
        .collect()
}

/// Insert chords into a lyric at their columns, padding short lyrics
fn merge_chords_into_lyric(positions: &[(usize, ChordToken)], lyric: &str) -> Vec<LyricSegment> {
    let mut chars: Vec<char> = lyric.chars().collect();
    let last_column = positions.last().map(|(column, _)| *column).unwrap_or(0);
    if chars.len() < last_column {
        chars.resize(last_column, ' ');
    }

    let mut segments = Vec::with_capacity(positions.len() + 1);
    if let Some(&(first, _)) = positions.first() {
        if first > 0 {
            segments.push(LyricSegment::text(chars[..first].iter().collect::<String>()));
        }
    }

    for (i, (column, chord)) in positions.iter().enumerate() {
        let end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(chars.len());
        segments.push(LyricSegment::chord(chord.clone(), chars[*column..end].iter().collect::<String>()));
    }

    segments
}

/// A chord line with nothing under it keeps its spacing between chords
fn chord_only_segments(tokens: &[MarkupToken<'_>]) -> Vec<LyricSegment> {
    let mut segments = inline_segments(tokens);
    if let Some(last) = segments.last_mut() {
        let trimmed = last.text.trim_end().len();
        last.text.truncate(trimmed);
    }
    segments
}

fn inline_segments(tokens: &[MarkupToken<'_>]) -> Vec<LyricSegment> {
    let mut segments = Vec::new();
    let mut current = LyricSegment::text(String::new());

    for token in tokens {
        match token {
            MarkupToken::Chord { chord, .. } => {
                if current.chord.is_some() || !current.text.is_empty() {
                    segments.push(current);
                }
                current = LyricSegment::chord(chord.normalized(), String::new());
            }
            MarkupToken::MalformedChord { interior, .. } => current.text.push_str(interior),
            other => current.text.push_str(other.source()),
        }
    }

    if current.chord.is_some() || !current.text.is_empty() {
        segments.push(current);
    }
    segments
}
