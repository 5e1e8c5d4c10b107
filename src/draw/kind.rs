//! Shape kind enumeration and selection priority.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of shape kinds the engine can construct.
///
/// Only kinds with a registered constructor are usable on a given session;
/// the enabled subset is computed once at session creation (see
/// [`DrawRegistry::enabled_kinds`](crate::draw::DrawRegistry::enabled_kinds)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawKind {
    /// Marker at a fixed position, sized by the dominant drag axis
    Point,
    /// Straight segment between anchor and pointer
    Line,
    /// Circle with Euclidean-distance radius
    Circle,
    /// Ellipse with independent per-axis radii
    Ellipse,
    /// Rectangle forced to equal side lengths
    Square,
    /// Rectangle spanned corner to corner
    Rectangle,
    /// Rotatable box with per-axis radii
    Box,
    /// Closed polygon from accumulated vertices
    Polygon,
    /// Open polyline from accumulated vertices
    Path,
    /// Triangle with per-axis radii
    Triangle,
    /// Right triangle spanned corner to corner
    RightTriangle,
    /// Right-isoceles footprint sized by the dominant drag axis
    EquilateralTriangle,
    /// Measuring ruler between two endpoints
    Ruler,
    /// Compass rose sized by the dominant drag axis
    Compass,
    /// Free text placed at the anchor
    Text,
}

/// Fixed priority order used when computing a session's enabled kinds.
pub const KIND_PRIORITY: [DrawKind; 15] = [
    DrawKind::Point,
    DrawKind::Line,
    DrawKind::Circle,
    DrawKind::Ellipse,
    DrawKind::Square,
    DrawKind::Rectangle,
    DrawKind::Box,
    DrawKind::Polygon,
    DrawKind::Path,
    DrawKind::Triangle,
    DrawKind::RightTriangle,
    DrawKind::EquilateralTriangle,
    DrawKind::Ruler,
    DrawKind::Compass,
    DrawKind::Text,
];

impl DrawKind {
    /// All kinds in priority order.
    pub fn all() -> impl Iterator<Item = DrawKind> {
        KIND_PRIORITY.into_iter()
    }

    /// Canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            DrawKind::Point => "point",
            DrawKind::Line => "line",
            DrawKind::Circle => "circle",
            DrawKind::Ellipse => "ellipse",
            DrawKind::Square => "square",
            DrawKind::Rectangle => "rectangle",
            DrawKind::Box => "box",
            DrawKind::Polygon => "polygon",
            DrawKind::Path => "path",
            DrawKind::Triangle => "triangle",
            DrawKind::RightTriangle => "right-triangle",
            DrawKind::EquilateralTriangle => "equilateral-triangle",
            DrawKind::Ruler => "ruler",
            DrawKind::Compass => "compass",
            DrawKind::Text => "text",
        }
    }

    /// Whether this kind accumulates vertices via `poly_add`/`poly_delete`.
    pub fn is_poly(&self) -> bool {
        matches!(self, DrawKind::Polygon | DrawKind::Path)
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrawKind {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        DrawKind::all()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| SessionError::UnknownDrawType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in DrawKind::all() {
            assert_eq!(kind.name().parse::<DrawKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Circle".parse::<DrawKind>().unwrap(), DrawKind::Circle);
        assert_eq!(
            "RIGHT-TRIANGLE".parse::<DrawKind>().unwrap(),
            DrawKind::RightTriangle
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "scribble".parse::<DrawKind>().unwrap_err();
        assert_eq!(err, SessionError::UnknownDrawType("scribble".to_string()));
    }

    #[test]
    fn poly_kinds() {
        assert!(DrawKind::Polygon.is_poly());
        assert!(DrawKind::Path.is_poly());
        assert!(!DrawKind::Rectangle.is_poly());
    }
}
