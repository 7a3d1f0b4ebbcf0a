//! SVG rendering of chord diagrams
//!
//! Fixed-size drawing: chord name on top, muted/open markers above the
//! nut, six strings by six fret rows, dots with finger labels, barres as
//! rounded bars, and the base fret beside the first row when the window
//! starts above the nut. All coordinates are integers so the output is
//! byte-stable for a given diagram.

use crate::diagram::{ChordDiagram, FingerLabel, WINDOW_ROWS};
use crate::models::STRING_COUNT;
use crate::utils::xml_escape;

const STRING_SPACING: usize = 16;
const FRET_SPACING: usize = 20;
const LEFT: usize = 24;
const TOP: usize = 40;
const DOT_RADIUS: usize = 6;

const WIDTH: usize = LEFT * 2 + STRING_SPACING * (STRING_COUNT - 1);
const HEIGHT: usize = TOP + FRET_SPACING * WINDOW_ROWS + 12;

fn string_x(string: usize) -> usize {
    LEFT + string * STRING_SPACING
}

fn row_center_y(row: usize) -> usize {
    TOP + row * FRET_SPACING + FRET_SPACING / 2
}

/// Render a diagram as a standalone SVG document
pub fn render_chord_diagram_svg(diagram: &ChordDiagram, name: &str) -> String {
    let mut svg = String::new();
    let grid_right = string_x(STRING_COUNT - 1);
    let grid_bottom = TOP + FRET_SPACING * WINDOW_ROWS;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"chord-diagram\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        WIDTH, HEIGHT, WIDTH, HEIGHT
    ));
    svg.push_str(&format!(
        "<text class=\"chord-name\" x=\"{}\" y=\"14\" text-anchor=\"middle\">{}</text>",
        WIDTH / 2,
        xml_escape(name)
    ));

    // Muted/open markers above the grid
    for (string, label) in diagram.finger_labels.iter().enumerate() {
        if matches!(label, FingerLabel::Muted | FingerLabel::Open) {
            svg.push_str(&format!(
                "<text class=\"string-marker\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
                string_x(string),
                TOP - 6,
                label
            ));
        }
    }

    if diagram.shows_nut() {
        svg.push_str(&format!(
            "<rect class=\"nut\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"3\"/>",
            LEFT,
            TOP - 3,
            grid_right - LEFT
        ));
    } else {
        svg.push_str(&format!(
            "<text class=\"base-fret\" x=\"{}\" y=\"{}\" text-anchor=\"end\">{}fr</text>",
            LEFT - 6,
            row_center_y(0) + 4,
            diagram.base_fret()
        ));
    }

    for row in 0..=WINDOW_ROWS {
        let y = TOP + row * FRET_SPACING;
        svg.push_str(&format!(
            "<line class=\"fret\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            LEFT, y, grid_right, y
        ));
    }
    for string in 0..STRING_COUNT {
        let x = string_x(string);
        svg.push_str(&format!(
            "<line class=\"string\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            x, TOP, x, grid_bottom
        ));
    }

    for barre in &diagram.barres {
        let Some(row) = diagram.row_of(barre.fret) else { continue };
        let x = string_x(barre.first_string) - DOT_RADIUS;
        let width = string_x(barre.last_string) - string_x(barre.first_string) + DOT_RADIUS * 2;
        svg.push_str(&format!(
            "<rect class=\"barre\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\"/>",
            x,
            row_center_y(row) - DOT_RADIUS,
            width,
            DOT_RADIUS * 2,
            DOT_RADIUS
        ));
    }

    for (string, rows) in diagram.grid.iter().enumerate() {
        for (row, _) in rows.iter().enumerate().filter(|(_, pressed)| **pressed) {
            let (x, y) = (string_x(string), row_center_y(row));
            svg.push_str(&format!(
                "<circle class=\"dot\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
                x, y, DOT_RADIUS
            ));
            if let FingerLabel::Finger(finger) = diagram.finger_labels[string] {
                svg.push_str(&format!(
                    "<text class=\"finger\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
                    x,
                    y + 4,
                    finger
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::build_diagram;
    use crate::models::{FingerData, FretPosition};

    fn diagram(raw: [i32; 6], fingers: Option<&FingerData>) -> ChordDiagram {
        build_diagram(&FretPosition::from_slice(&raw).unwrap(), fingers).unwrap()
    }

    #[test]
    fn test_open_chord_has_nut_and_markers() {
        let svg = render_chord_diagram_svg(&diagram([-1, 0, 2, 2, 1, 0], None), "Am");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">Am</text>"));
        assert!(svg.contains("class=\"nut\""));
        assert!(!svg.contains("base-fret"));
        assert_eq!(svg.matches("class=\"dot\"").count(), 3);
        assert_eq!(svg.matches(">x</text>").count(), 1);
        assert_eq!(svg.matches(">o</text>").count(), 2);
    }

    #[test]
    fn test_high_chord_shows_base_fret() {
        let svg = render_chord_diagram_svg(&diagram([5, 7, 7, 6, 5, 5], None), "A");
        assert!(svg.contains(">5fr</text>"));
        assert!(!svg.contains("class=\"nut\""));
    }

    #[test]
    fn test_finger_labels_and_barre() {
        let fingers: FingerData = serde_json::from_str("[1, 3, 4, 2, 1, 1]").unwrap();
        let svg = render_chord_diagram_svg(&diagram([1, 3, 3, 2, 1, 1], Some(&fingers)), "F");
        assert!(svg.contains("class=\"barre\""));
        assert!(svg.contains(">4</text>"));
    }

    #[test]
    fn test_name_is_escaped() {
        let svg = render_chord_diagram_svg(&diagram([0, 2, 2, 1, 0, 0], None), "E<b>");
        assert!(svg.contains("E&lt;b&gt;"));
    }

    #[test]
    fn test_output_is_stable() {
        let d = diagram([3, 2, 0, 0, 0, 3], None);
        assert_eq!(render_chord_diagram_svg(&d, "G"), render_chord_diagram_svg(&d, "G"));
    }
}
