//! Tab markup tokenizer
//!
//! Scraped tab bodies carry two kinds of inline markup: `[ch]...[/ch]`
//! around chord names and `[tab]...[/tab]` around chord/lyric blocks.
//! Everything else is literal, whitespace-significant text. Tokens come
//! out strictly in input order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ChordToken;
use crate::parse::chord::extract_chord;

/// Chord tags never span lines: `.` does not match a newline
static MARKUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[ch\](.*?)\[/ch\]|\[tab\]|\[/tab\]|\r\n|\n|\r").expect("markup pattern is valid")
});

pub const TAB_OPEN: &str = "[tab]";
pub const TAB_CLOSE: &str = "[/tab]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupToken<'a> {
    /// Literal text without line breaks
    Text(&'a str),

    /// A chord tag whose interior parsed
    Chord { tag: &'a str, chord: ChordToken },

    /// A chord tag whose interior has no valid root
    MalformedChord { tag: &'a str, interior: &'a str },

    TabOpen,
    TabClose,

    /// `\n`, `\r\n` or `\r`
    LineBreak(&'a str),
}

impl<'a> MarkupToken<'a> {
    /// The exact input text this token was read from
    pub fn source(&self) -> &'a str {
        match self {
            MarkupToken::Text(text) => text,
            MarkupToken::Chord { tag, .. } => tag,
            MarkupToken::MalformedChord { tag, .. } => tag,
            MarkupToken::TabOpen => TAB_OPEN,
            MarkupToken::TabClose => TAB_CLOSE,
            MarkupToken::LineBreak(brk) => brk,
        }
    }
}

/// Split raw tab text into markup tokens, left to right
pub fn tokenize(text: &str) -> Vec<MarkupToken<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in MARKUP_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };

        if whole.start() > last {
            tokens.push(MarkupToken::Text(&text[last..whole.start()]));
        }
        last = whole.end();

        let tag = whole.as_str();
        if let Some(interior) = caps.get(1) {
            let interior = interior.as_str();
            match extract_chord(interior) {
                Ok(chord) => tokens.push(MarkupToken::Chord { tag, chord }),
                Err(e) => {
                    log::debug!("{}; keeping tag as text", e);
                    tokens.push(MarkupToken::MalformedChord { tag, interior });
                }
            }
        } else if tag == TAB_OPEN {
            tokens.push(MarkupToken::TabOpen);
        } else if tag == TAB_CLOSE {
            tokens.push(MarkupToken::TabClose);
        } else {
            tokens.push(MarkupToken::LineBreak(tag));
        }
    }

    if last < text.len() {
        tokens.push(MarkupToken::Text(&text[last..]));
    }

    tokens
}

/// Tokenize and group tokens by line; line breaks themselves are dropped
///
/// Always returns at least one (possibly empty) line.
pub fn tokenize_lines(text: &str) -> Vec<Vec<MarkupToken<'_>>> {
    let mut lines = vec![Vec::new()];
    for token in tokenize(text) {
        match token {
            MarkupToken::LineBreak(_) => lines.push(Vec::new()),
            other => {
                if let Some(current) = lines.last_mut() {
                    current.push(other);
                }
            }
        }
    }
    lines
}

/// Distinct chord names in order of first appearance
///
/// These are the keys a caller looks up in the applicature table.
pub fn chord_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in tokenize(text) {
        if let MarkupToken::Chord { chord, .. } = token {
            let name = chord.name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}
