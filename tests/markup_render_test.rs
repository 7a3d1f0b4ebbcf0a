// Rendering scraped tab markup to HTML through the public API

use chordsheet_wasm::{chord_names, extract_chord, render_html, render_html_with, transpose_tab, RenderSettings};
use regex::Regex;

/// Count what a browser would display: tags vanish, each entity is one glyph
fn visible_len(html: &str) -> usize {
    let tags = Regex::new(r"<[^>]+>").unwrap();
    let entities = Regex::new(r"&[a-z]+;").unwrap();
    let text = tags.replace_all(html, "");
    entities.replace_all(&text, "_").chars().count()
}

#[test]
fn test_chord_over_lyric_alignment_survives() {
    let tab = "[tab][ch]Am[/ch]    [ch]G7/B[/ch]\nI heard there was[/tab]";
    let html = render_html(tab);

    assert!(html.starts_with("<span class=\"tab\">"));
    assert!(html.ends_with("</span>"));
    assert!(html.contains("&nbsp;&nbsp;&nbsp;&nbsp;<span class=\"chord\">"));
    assert!(html.contains("<span class=\"chord-bass\">/B</span>"));
    assert!(html.contains("<br/>I&nbsp;heard&nbsp;there&nbsp;was"));
}

#[test]
fn test_trailing_slash_artifact_is_cleaned() {
    assert_eq!(
        render_html("[ch]A/[/ch]"),
        format!("{}&nbsp;", render_html("[ch]A[/ch]")),
    );
}

#[test]
fn test_chord_after_cleaned_chord_stays_in_column() {
    let html = render_html("[ch]G/[/ch]  [ch]D[/ch]\nhey you there");
    let chord_line = html.split("<br/>").next().unwrap();
    let d_span = chord_line.find("<span class=\"chord\"><span class=\"chord-root\">D").unwrap();

    // "G/" plus two spaces puts D at column 4, over the "y" of "you"
    assert_eq!(visible_len(&chord_line[..d_span]), 4);
    assert_eq!(&"hey you there"[4..5], "y");
}

#[test]
fn test_malformed_tag_is_passed_through() {
    let html = render_html("[ch]N.C.[/ch] [ch]E[/ch]");
    assert!(html.starts_with("[ch]N.C.[/ch]&nbsp;"));
    assert!(html.contains("<span class=\"chord-root\">E</span>"));
}

#[test]
fn test_plain_text_keeps_one_glyph_per_character() {
    let text = "  a < b && \"c\"\tend  ";
    assert_eq!(visible_len(&render_html(text)), text.chars().count());
}

#[test]
fn test_custom_settings() {
    let settings = RenderSettings {
        chord_class: "c".to_string(),
        extra_chord_classes: vec!["transposable".to_string()],
        line_break: "\n".to_string(),
        ..RenderSettings::default()
    };
    let html = render_html_with("[ch]D[/ch]\r\nla", &settings);
    assert!(html.starts_with("<span class=\"c transposable\">"));
    assert!(html.ends_with("</span>\nla"));
}

#[test]
fn test_chord_names_and_transposition_agree() {
    let tab = "[ch]Bb[/ch] [ch]F/A[/ch]\nwords [ch]Bb[/ch]";
    assert_eq!(chord_names(tab), vec!["Bb", "F/A"]);

    let up = transpose_tab(tab, 2);
    assert_eq!(chord_names(&up), vec!["C", "G/B"]);
    assert_eq!(up, "[ch]C[/ch] [ch]G/B[/ch]\nwords [ch]C[/ch]");
}

#[test]
fn test_extract_chord_examples() {
    let chord = extract_chord("C#m/Eb").unwrap();
    assert_eq!(chord.root, "C#");
    assert_eq!(chord.quality, "m");
    assert_eq!(chord.bass.as_deref(), Some("Eb"));
}
