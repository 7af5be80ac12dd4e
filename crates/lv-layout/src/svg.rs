//! Thin SVG serialization of a [`Layout`].
//!
//! Strictly downstream of the pure geometry: no layout math happens here,
//! only element construction. The empty scene renders a "no data yet"
//! placeholder instead of failing, so a bad upstream state never takes the
//! surrounding UI down with it.

use std::fmt::Write as _;

use crate::matrix::MatrixGeometry;
use crate::scene::{Layout, Scene};
use crate::tree::TreeGeometry;

const EDGE_STROKE: &str = "#475569";
const TEXT_MUTED: &str = "#94a3b8";
/// Width reserved for the legend panel beside the matrix.
const LEGEND_WIDTH: f64 = 200.0;

/// Serialize a layout pass to a standalone SVG document.
pub fn render_svg(layout: &Layout) -> String {
    match &layout.scene {
        Scene::Empty => render_placeholder(),
        Scene::Tree { geometry, .. } => render_tree(geometry),
        Scene::Matrix(geometry) => render_matrix(geometry),
    }
}

fn render_placeholder() -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="200">"#
    );
    let _ = writeln!(
        s,
        r#"  <text x="200" y="100" text-anchor="middle" fill="{TEXT_MUTED}">No lattice data yet</text>"#
    );
    s.push_str("</svg>\n");
    s
}

fn render_tree(geom: &TreeGeometry) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        geom.width, geom.height
    );

    for label in &geom.labels {
        let _ = writeln!(
            s,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="11" font-weight="600" fill="{TEXT_MUTED}">Step {}</text>"#,
            label.x, label.y, label.step
        );
    }

    // Edges go under the nodes.
    for e in &geom.edges {
        let _ = writeln!(
            s,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{EDGE_STROKE}" stroke-width="1" opacity="0.3"/>"#,
            e.x1, e.y1, e.x2, e.y2
        );
    }

    for node in &geom.nodes {
        if node.is_elision {
            let _ = writeln!(
                s,
                r#"  <circle cx="{}" cy="{}" r="3" fill="{}"/>"#,
                node.x,
                node.y,
                node.color.to_hex()
            );
            continue;
        }
        let stroke = if node.is_max {
            r##" stroke="#fff" stroke-width="2""##
        } else {
            ""
        };
        let _ = writeln!(
            s,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"{stroke}/>"#,
            node.x,
            node.y,
            geom.style.radius,
            node.color.to_hex()
        );
        let _ = writeln!(
            s,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="bold" fill="white">{:.2}</text>"#,
            node.x,
            node.y - 3.0,
            geom.style.value_font,
            node.value
        );
        let _ = writeln!(
            s,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="rgba(255,255,255,0.8)">{:.1}</text>"#,
            node.x,
            node.y + 7.0,
            geom.style.price_font,
            node.price
        );
    }

    s.push_str("</svg>\n");
    s
}

fn render_matrix(geom: &MatrixGeometry) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        geom.width + LEGEND_WIDTH,
        geom.height.max(120.0)
    );

    for c in &geom.cells {
        let _ = writeln!(
            s,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="rgba(0,0,0,0.1)" stroke-width="0.5"/>"#,
            c.x,
            c.y,
            c.w,
            c.h,
            c.color.to_hex()
        );
    }

    let lx = geom.width + 20.0;
    let legend = &geom.legend;
    let _ = writeln!(
        s,
        r#"  <text x="{lx}" y="20" font-size="13" font-weight="bold" fill="white">Legend</text>"#
    );
    let _ = writeln!(
        s,
        r#"  <text x="{lx}" y="44" font-size="12" fill="{TEXT_MUTED}">Steps (N): {}</text>"#,
        legend.steps
    );
    let _ = writeln!(
        s,
        r#"  <text x="{lx}" y="64" font-size="12" fill="{TEXT_MUTED}">Max value: {:.4}</text>"#,
        legend.max_value
    );
    let _ = writeln!(
        s,
        r#"  <text x="{lx}" y="84" font-size="12" fill="{TEXT_MUTED}">Total nodes: {}</text>"#,
        legend.total_nodes
    );
    let _ = writeln!(
        s,
        r#"  <rect x="{lx}" y="96" width="12" height="12" fill="{}"/>"#,
        legend.low.to_hex()
    );
    let _ = writeln!(
        s,
        r#"  <text x="{}" y="106" font-size="11" fill="{TEXT_MUTED}">0 (low)</text>"#,
        lx + 18.0
    );
    let _ = writeln!(
        s,
        r#"  <rect x="{lx}" y="114" width="12" height="12" fill="{}"/>"#,
        legend.high.to_hex()
    );
    let _ = writeln!(
        s,
        r#"  <text x="{}" y="124" font-size="11" fill="{TEXT_MUTED}">max (high)</text>"#,
        lx + 18.0
    );

    s.push_str("</svg>\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::policy::DisplayPolicy;
    use crate::scene::layout;
    use lv_core::Real;
    use lv_lattice::Lattice;

    fn ternary(n: usize) -> Lattice {
        let prices: Vec<Vec<Real>> = (0..=n).map(|i| vec![100.0; 2 * i + 1]).collect();
        let values: Vec<Vec<Real>> = (0..=n).map(|i| vec![i as Real; 2 * i + 1]).collect();
        Lattice::new(prices, values).unwrap()
    }

    #[test]
    fn placeholder_for_empty_scene() {
        let out = layout(
            &Lattice::empty(),
            &DisplayPolicy::default(),
            &Palette::GREEN,
        );
        let svg = render_svg(&out);
        assert!(svg.contains("No lattice data yet"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn tree_svg_has_one_circle_per_node() {
        let out = layout(&ternary(4), &DisplayPolicy::default(), &Palette::GREEN);
        let Scene::Tree { geometry, .. } = &out.scene else {
            panic!("expected tree");
        };
        let svg = render_svg(&out);
        assert_eq!(
            svg.matches("<circle").count(),
            geometry.nodes.len(),
            "one circle per node"
        );
        assert_eq!(svg.matches("<line").count(), geometry.edges.len());
        assert!(svg.contains("Step 4"));
    }

    #[test]
    fn matrix_svg_has_cells_and_legend() {
        let out = layout(&ternary(150), &DisplayPolicy::default(), &Palette::GREEN);
        let svg = render_svg(&out);
        assert!(svg.contains("Steps (N): 150"));
        assert!(svg.contains("Total nodes:"));
        // Cells plus the two legend swatches.
        assert_eq!(svg.matches("<rect").count(), 151 * 151 + 2);
    }
}
