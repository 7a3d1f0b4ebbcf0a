//! HTML rendering of tab markup
//!
//! Turns raw `[ch]`/`[tab]` markup into spans for display in a monospace
//! block. Tab alignment is column based, so every literal character maps to
//! exactly one rendered character and whitespace becomes `&nbsp;`.

use serde::{Deserialize, Serialize};

use crate::models::ChordToken;
use crate::parse::markup::{tokenize, MarkupToken, TAB_CLOSE};
use crate::utils::{push_aligned_text, xml_escape};

/// Class names and markup used by the HTML renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Class on the outer chord span
    pub chord_class: String,

    /// Additional classes on the outer chord span (e.g. "fw-bold")
    pub extra_chord_classes: Vec<String>,

    pub root_class: String,
    pub quality_class: String,
    pub bass_class: String,

    /// Class on the container that replaces `[tab]`
    pub tab_class: String,

    /// Markup emitted for each line break
    pub line_break: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            chord_class: "chord".to_string(),
            extra_chord_classes: Vec::new(),
            root_class: "chord-root".to_string(),
            quality_class: "chord-quality".to_string(),
            bass_class: "chord-bass".to_string(),
            tab_class: "tab".to_string(),
            line_break: "<br/>".to_string(),
        }
    }
}

/// Render raw tab text with default settings
pub fn render_html(text: &str) -> String {
    render_html_with(text, &RenderSettings::default())
}

/// Render raw tab text to HTML
///
/// Input must be raw tagged text; rendering already-rendered output is not
/// supported. A `[/tab]` without an opener is literal text and unclosed
/// `[tab]` containers are closed at the end.
pub fn render_html_with(text: &str, settings: &RenderSettings) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut open_tabs = 0usize;

    for token in tokenize(text) {
        match token {
            MarkupToken::Text(literal) => push_aligned_text(&mut out, literal),
            MarkupToken::Chord { chord, .. } => {
                push_chord(&mut out, &chord, settings);
                // Keep later columns where the scraped text had them
                let dropped = chord.raw_text.chars().count().saturating_sub(chord.name().chars().count());
                for _ in 0..dropped {
                    out.push_str("&nbsp;");
                }
            }
            MarkupToken::MalformedChord { tag, .. } => push_aligned_text(&mut out, tag),
            MarkupToken::TabOpen => {
                open_tabs += 1;
                out.push_str(&format!("<span class=\"{}\">", xml_escape(&settings.tab_class)));
            }
            MarkupToken::TabClose if open_tabs > 0 => {
                open_tabs -= 1;
                out.push_str("</span>");
            }
            MarkupToken::TabClose => push_aligned_text(&mut out, TAB_CLOSE),
            MarkupToken::LineBreak(_) => out.push_str(&settings.line_break),
        }
    }

    for _ in 0..open_tabs {
        out.push_str("</span>");
    }

    out
}

/// Render one chord as nested spans
///
/// `<span class="chord"><span class="chord-root">G</span><span class="chord-quality">7</span><span class="chord-bass">/B</span></span>`
pub fn render_chord_span(chord: &ChordToken, settings: &RenderSettings) -> String {
    let mut out = String::new();
    push_chord(&mut out, chord, settings);
    out
}

fn push_chord(out: &mut String, chord: &ChordToken, settings: &RenderSettings) {
    let mut classes = settings.chord_class.clone();
    for extra in &settings.extra_chord_classes {
        classes.push(' ');
        classes.push_str(extra);
    }

    out.push_str(&format!("<span class=\"{}\">", xml_escape(&classes)));
    push_part(out, &settings.root_class, &chord.root);
    if !chord.quality.is_empty() {
        push_part(out, &settings.quality_class, &chord.quality);
    }
    if let Some(bass) = &chord.bass {
        push_part(out, &settings.bass_class, &format!("/{}", bass));
    }
    out.push_str("</span>");
}

fn push_part(out: &mut String, class: &str, text: &str) {
    out.push_str(&format!("<span class=\"{}\">", xml_escape(class)));
    push_aligned_text(out, text);
    out.push_str("</span>");
}
