//! Construction rules that turn a drag gesture into shape geometry.

use super::kind::DrawKind;
use crate::util;
use serde::{Deserialize, Serialize};

/// Kind-specific positional output of the construction rules.
///
/// Variants are grouped by constructor signature rather than one variant per
/// kind: several kinds share the same positional parameters and differ only
/// in the [`DrawKind`] tag carried alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    /// Center plus a single radius (point, compass, circle)
    Radius {
        /// Center X
        x: f64,
        /// Center Y
        y: f64,
        /// Radius; max-axis for point/compass, Euclidean for circle
        radius: f64,
    },
    /// Two corner/end points (line, ruler, right-triangle, rectangle, square)
    TwoPoint {
        /// Anchor X
        x1: f64,
        /// Anchor Y
        y1: f64,
        /// Opposite X
        x2: f64,
        /// Opposite Y
        y2: f64,
    },
    /// Center plus independent per-axis radii (box, ellipse, triangle,
    /// equilateral-triangle)
    Radial {
        /// Center X
        x: f64,
        /// Center Y
        y: f64,
        /// Horizontal radius
        xradius: f64,
        /// Vertical radius
        yradius: f64,
    },
    /// Ordered vertex list (polygon, path)
    Points {
        /// Vertices in commit order, live point last
        points: Vec<(f64, f64)>,
    },
    /// Anchored text (text)
    Text {
        /// Anchor X
        x: f64,
        /// Anchor Y
        y: f64,
        /// Text content
        text: String,
    },
}

/// Builds the candidate geometry for `kind` from the gesture anchor, the
/// live pointer position, the committed vertex list, and the session text.
///
/// Pure and deterministic: the same inputs always yield the same geometry.
/// The committed vertex list is only consulted for polygon/path kinds and is
/// never modified here; the live point is appended to a copy.
pub fn build_geometry(
    kind: DrawKind,
    anchor: (f64, f64),
    live: (f64, f64),
    committed: &[(f64, f64)],
    text: &str,
) -> ShapeGeometry {
    let (ax, ay) = anchor;
    let (x, y) = live;

    match kind {
        DrawKind::Point | DrawKind::Compass => ShapeGeometry::Radius {
            x: ax,
            y: ay,
            radius: (ax - x).abs().max((ay - y).abs()),
        },
        DrawKind::Circle => ShapeGeometry::Radius {
            x: ax,
            y: ay,
            radius: util::distance(anchor, live),
        },
        DrawKind::Line | DrawKind::Ruler | DrawKind::RightTriangle | DrawKind::Rectangle => {
            ShapeGeometry::TwoPoint {
                x1: ax,
                y1: ay,
                x2: x,
                y2: y,
            }
        }
        DrawKind::Square => {
            // Equalize the extents while keeping the drag quadrant.
            let len_x = ax - x;
            let len_y = ay - y;
            let length = len_x.abs().max(len_y.abs());
            ShapeGeometry::TwoPoint {
                x1: ax,
                y1: ay,
                x2: ax - util::sign(len_x) * length,
                y2: ay - util::sign(len_y) * length,
            }
        }
        DrawKind::EquilateralTriangle => {
            let length = (ax - x).abs().max((ay - y).abs());
            ShapeGeometry::Radial {
                x: ax,
                y: ay,
                xradius: length,
                yradius: length,
            }
        }
        DrawKind::Box | DrawKind::Ellipse | DrawKind::Triangle => ShapeGeometry::Radial {
            x: ax,
            y: ay,
            xradius: (ax - x).abs(),
            yradius: (ay - y).abs(),
        },
        DrawKind::Polygon | DrawKind::Path => {
            let mut points = committed.to_vec();
            points.push(live);
            ShapeGeometry::Points { points }
        }
        DrawKind::Text => ShapeGeometry::Text {
            x: ax,
            y: ay,
            text: text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_radius_is_dominant_axis() {
        let geom = build_geometry(DrawKind::Point, (10.0, 10.0), (13.0, 18.0), &[], "");
        assert_eq!(
            geom,
            ShapeGeometry::Radius {
                x: 10.0,
                y: 10.0,
                radius: 8.0
            }
        );
    }

    #[test]
    fn circle_radius_is_euclidean() {
        let geom = build_geometry(DrawKind::Circle, (0.0, 0.0), (3.0, 4.0), &[], "");
        assert_eq!(
            geom,
            ShapeGeometry::Radius {
                x: 0.0,
                y: 0.0,
                radius: 5.0
            }
        );
    }

    #[test]
    fn line_endpoints_are_direction_sensitive() {
        let geom = build_geometry(DrawKind::Line, (5.0, 5.0), (1.0, 2.0), &[], "");
        assert_eq!(
            geom,
            ShapeGeometry::TwoPoint {
                x1: 5.0,
                y1: 5.0,
                x2: 1.0,
                y2: 2.0
            }
        );
    }

    #[test]
    fn square_equalizes_extents_in_every_quadrant() {
        for &(tx, ty) in &[(7.0, 3.0), (-7.0, 3.0), (7.0, -3.0), (-7.0, -3.0)] {
            let geom = build_geometry(DrawKind::Square, (0.0, 0.0), (tx, ty), &[], "");
            let ShapeGeometry::TwoPoint { x1, y1, x2, y2 } = geom else {
                panic!("square should produce two corners");
            };
            assert_eq!((x2 - x1).abs(), 7.0);
            assert_eq!((y2 - y1).abs(), 7.0);
            // opposite corner stays in the drag quadrant
            assert_eq!(util::sign(x2 - x1), util::sign(tx));
            assert_eq!(util::sign(y2 - y1), util::sign(ty));
        }
    }

    #[test]
    fn square_with_axis_aligned_drag_collapses_that_axis() {
        let geom = build_geometry(DrawKind::Square, (0.0, 0.0), (5.0, 0.0), &[], "");
        assert_eq!(
            geom,
            ShapeGeometry::TwoPoint {
                x1: 0.0,
                y1: 0.0,
                x2: 5.0,
                y2: 0.0
            }
        );
    }

    #[test]
    fn equilateral_triangle_uses_common_length_on_both_axes() {
        let geom = build_geometry(
            DrawKind::EquilateralTriangle,
            (2.0, 2.0),
            (-4.0, 3.0),
            &[],
            "",
        );
        assert_eq!(
            geom,
            ShapeGeometry::Radial {
                x: 2.0,
                y: 2.0,
                xradius: 6.0,
                yradius: 6.0
            }
        );
    }

    #[test]
    fn ellipse_radii_are_per_axis() {
        let geom = build_geometry(DrawKind::Ellipse, (10.0, 10.0), (4.0, 12.0), &[], "");
        assert_eq!(
            geom,
            ShapeGeometry::Radial {
                x: 10.0,
                y: 10.0,
                xradius: 6.0,
                yradius: 2.0
            }
        );
    }

    #[test]
    fn polygon_appends_live_point_without_touching_committed() {
        let committed = vec![(0.0, 0.0), (10.0, 0.0)];
        let geom = build_geometry(DrawKind::Polygon, (0.0, 0.0), (5.0, 8.0), &committed, "");
        assert_eq!(
            geom,
            ShapeGeometry::Points {
                points: vec![(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]
            }
        );
        assert_eq!(committed.len(), 2);
    }

    #[test]
    fn text_carries_session_string() {
        let geom = build_geometry(DrawKind::Text, (1.0, 2.0), (9.0, 9.0), &[], "hello");
        assert_eq!(
            geom,
            ShapeGeometry::Text {
                x: 1.0,
                y: 2.0,
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn rebuild_is_deterministic() {
        let a = build_geometry(DrawKind::Circle, (0.0, 0.0), (6.0, 8.0), &[], "");
        let b = build_geometry(DrawKind::Circle, (0.0, 0.0), (6.0, 8.0), &[], "");
        assert_eq!(a, b);
    }
}
