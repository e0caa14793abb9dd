use crate::routing::types::Point;
use crate::scene::{RoutedWire, Scene};

const COMPONENT_FILL: &str = "#e0e0e0";
const COMPONENT_STROKE: &str = "#333";
const WIRE_STROKE: &str = "#000";
const WIRE_WIDTH: u32 = 2;

/// Format points as an SVG `points` attribute: `x,y x,y ...`.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a routed scene as a standalone SVG document.
///
/// Components are drawn as grey boxes and every routed wire as a polyline on top.
/// Wires without points are left out.
pub fn render_svg(scene: &Scene, wires: &[RoutedWire]) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" style=\"border: 1px solid #ccc\">\n",
        scene.width, scene.height
    );
    for c in &scene.components {
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{COMPONENT_FILL}\" stroke=\"{COMPONENT_STROKE}\"/>\n",
            c.x, c.y, c.width, c.height
        ));
    }
    for wire in wires.iter().filter(|w| w.is_routed()) {
        out.push_str(&format!(
            "  <polyline id=\"{}\" points=\"{}\" fill=\"none\" stroke=\"{WIRE_STROKE}\" stroke-width=\"{WIRE_WIDTH}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
            escape_attr(&wire.id),
            points_attr(&wire.points)
        ));
    }
    out.push_str("</svg>\n");
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
