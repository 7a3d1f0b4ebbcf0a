//! Escaping helpers shared by the HTML and SVG renderers

/// Escape special XML/HTML characters
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Escape text for column-aligned display
///
/// Every input character becomes exactly one rendered character: each
/// whitespace character turns into `&nbsp;` so runs never collapse.
pub fn push_aligned_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if c.is_whitespace() => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("Song & Dance <Test>"), "Song &amp; Dance &lt;Test&gt;");
        assert_eq!(xml_escape("it's \"x\""), "it&apos;s &quot;x&quot;");
    }

    #[test]
    fn test_aligned_text_keeps_every_space() {
        let mut out = String::new();
        push_aligned_text(&mut out, "a  b\tc");
        assert_eq!(out, "a&nbsp;&nbsp;b&nbsp;c");
    }

    #[test]
    fn test_aligned_text_escapes_markup() {
        let mut out = String::new();
        push_aligned_text(&mut out, "<b>&");
        assert_eq!(out, "&lt;b&gt;&amp;");
    }
}
