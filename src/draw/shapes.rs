//! Standard value-based shape implementation.
//!
//! [`Annotation`] implements the [`CanvasItem`] contract for every geometry
//! variant, so the engine is usable without an external shape library. Hosts
//! with richer shape types register their own constructors instead.

use super::geometry::ShapeGeometry;
use super::kind::DrawKind;
use super::params::DrawParams;
use super::registry::DrawRegistry;
use crate::canvas::{CanvasItem, DEFAULT_CAPTURE_RADIUS};
use crate::surface::Surface;
use crate::util;
use std::any::Any;

/// Plain value shape carrying its geometry and style parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    kind: DrawKind,
    geometry: ShapeGeometry,
    params: DrawParams,
    rot_deg: f64,
    editing: bool,
    editable: bool,
}

impl Annotation {
    /// Creates an annotation from construction output. The initial rotation
    /// is taken from the parameter mapping.
    pub fn new(kind: DrawKind, geometry: ShapeGeometry, params: DrawParams) -> Self {
        let rot_deg = params.rotation();
        Self {
            kind,
            geometry,
            params,
            rot_deg,
            editing: false,
            editable: true,
        }
    }

    /// The positional geometry.
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Copy of the style parameters.
    pub fn params(&self) -> DrawParams {
        self.params.clone()
    }

    /// Accumulated rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rot_deg
    }

    /// Marks the shape as (non-)selectable for editing.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }
}

impl CanvasItem for Annotation {
    fn kind(&self) -> DrawKind {
        self.kind
    }

    fn initialize(&mut self, _surface: &mut dyn Surface) {
        log::debug!("initialized {} annotation", self.kind);
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let cap = self.capture_radius();
        match &self.geometry {
            ShapeGeometry::Radius {
                x: cx,
                y: cy,
                radius,
            } => util::distance((*cx, *cy), (x, y)) <= radius.max(cap),
            ShapeGeometry::TwoPoint { x1, y1, x2, y2 } => match self.kind {
                DrawKind::Line | DrawKind::Ruler => {
                    util::distance_to_segment((x, y), (*x1, *y1), (*x2, *y2)) <= cap
                }
                DrawKind::RightTriangle => {
                    util::point_in_polygon(&[(*x1, *y1), (*x2, *y2), (*x2, *y1)], x, y)
                }
                _ => {
                    x >= x1.min(*x2) && x <= x1.max(*x2) && y >= y1.min(*y2) && y <= y1.max(*y2)
                }
            },
            ShapeGeometry::Radial {
                x: cx,
                y: cy,
                xradius,
                yradius,
            } => match self.kind {
                DrawKind::Ellipse => {
                    if *xradius == 0.0 || *yradius == 0.0 {
                        return false;
                    }
                    let nx = (x - cx) / xradius;
                    let ny = (y - cy) / yradius;
                    nx * nx + ny * ny <= 1.0
                }
                _ => (x - cx).abs() <= *xradius && (y - cy).abs() <= *yradius,
            },
            ShapeGeometry::Points { points } => match self.kind {
                DrawKind::Path => points
                    .windows(2)
                    .any(|seg| util::distance_to_segment((x, y), seg[0], seg[1]) <= cap),
                _ => util::point_in_polygon(points, x, y),
            },
            ShapeGeometry::Text { x: tx, y: ty, .. } => {
                util::distance((*tx, *ty), (x, y)) <= cap * 2.0
            }
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let (rx, ry) = self.reference_point();
        let (dx, dy) = (x - rx, y - ry);
        match &mut self.geometry {
            ShapeGeometry::Radius { x: cx, y: cy, .. }
            | ShapeGeometry::Radial { x: cx, y: cy, .. }
            | ShapeGeometry::Text { x: cx, y: cy, .. } => {
                *cx = x;
                *cy = y;
            }
            ShapeGeometry::TwoPoint { x1, y1, x2, y2 } => {
                *x1 += dx;
                *y1 += dy;
                *x2 += dx;
                *y2 += dy;
            }
            ShapeGeometry::Points { points } => {
                for pt in points.iter_mut() {
                    pt.0 += dx;
                    pt.1 += dy;
                }
            }
        }
    }

    fn reference_point(&self) -> (f64, f64) {
        match &self.geometry {
            ShapeGeometry::Radius { x, y, .. }
            | ShapeGeometry::Radial { x, y, .. }
            | ShapeGeometry::Text { x, y, .. } => (*x, *y),
            ShapeGeometry::TwoPoint { x1, y1, .. } => (*x1, *y1),
            ShapeGeometry::Points { points } => points.first().copied().unwrap_or((0.0, 0.0)),
        }
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    fn editable(&self) -> bool {
        self.editable
    }

    fn edit_points(&self) -> Vec<(f64, f64)> {
        match &self.geometry {
            ShapeGeometry::Radius { x, y, radius } => vec![(*x, *y), (x + radius, *y)],
            ShapeGeometry::TwoPoint { x1, y1, x2, y2 } => vec![(*x1, *y1), (*x2, *y2)],
            ShapeGeometry::Radial {
                x,
                y,
                xradius,
                yradius,
            } => vec![(*x, *y), (x + xradius, *y), (*x, y + yradius)],
            ShapeGeometry::Points { points } => points.clone(),
            ShapeGeometry::Text { x, y, .. } => vec![(*x, *y)],
        }
    }

    fn set_edit_point(&mut self, index: usize, pt: (f64, f64)) {
        match &mut self.geometry {
            ShapeGeometry::Radius { x, y, radius } => match index {
                0 => {
                    *x = pt.0;
                    *y = pt.1;
                }
                1 => *radius = util::distance((*x, *y), pt),
                _ => log::warn!("ignoring edit point {index} on {}", self.kind),
            },
            ShapeGeometry::TwoPoint { x1, y1, x2, y2 } => match index {
                0 => {
                    *x1 = pt.0;
                    *y1 = pt.1;
                }
                1 => {
                    *x2 = pt.0;
                    *y2 = pt.1;
                }
                _ => log::warn!("ignoring edit point {index} on {}", self.kind),
            },
            ShapeGeometry::Radial {
                x,
                y,
                xradius,
                yradius,
            } => match index {
                0 => {
                    *x = pt.0;
                    *y = pt.1;
                }
                1 => *xradius = (pt.0 - *x).abs(),
                2 => *yradius = (pt.1 - *y).abs(),
                _ => log::warn!("ignoring edit point {index} on {}", self.kind),
            },
            ShapeGeometry::Points { points } => match points.get_mut(index) {
                Some(vertex) => *vertex = pt,
                None => log::warn!("ignoring edit point {index} on {}", self.kind),
            },
            ShapeGeometry::Text { x, y, .. } => match index {
                0 => {
                    *x = pt.0;
                    *y = pt.1;
                }
                _ => log::warn!("ignoring edit point {index} on {}", self.kind),
            },
        }
    }

    fn rotate_by(&mut self, deg: f64) {
        self.rot_deg += deg;
        self.params.set_rotation(self.rot_deg);
    }

    fn set_rotation(&mut self, deg: f64) -> bool {
        // Only the kinds whose constructors take a rotation parameter carry
        // a settable rotation attribute.
        match self.kind {
            DrawKind::Box | DrawKind::Ellipse | DrawKind::Triangle => {
                self.rot_deg = deg;
                self.params.set_rotation(deg);
                true
            }
            _ => false,
        }
    }

    fn scale_by(&mut self, sx: f64, sy: f64) {
        match &mut self.geometry {
            ShapeGeometry::Radius { radius, .. } => *radius *= sx,
            ShapeGeometry::TwoPoint { x1, y1, x2, y2 } => {
                *x2 = *x1 + (*x2 - *x1) * sx;
                *y2 = *y1 + (*y2 - *y1) * sy;
            }
            ShapeGeometry::Radial {
                xradius, yradius, ..
            } => {
                *xradius *= sx;
                *yradius *= sy;
            }
            ShapeGeometry::Points { points } => {
                if let Some(&(ox, oy)) = points.first() {
                    for pt in points.iter_mut().skip(1) {
                        pt.0 = ox + (pt.0 - ox) * sx;
                        pt.1 = oy + (pt.1 - oy) * sy;
                    }
                }
            }
            ShapeGeometry::Text { .. } => {}
        }
    }

    fn capture_radius(&self) -> f64 {
        self.params
            .get(DrawParams::CAP_RADIUS)
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_CAPTURE_RADIUS)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Registry constructing an [`Annotation`] for every kind.
pub fn standard_registry() -> DrawRegistry {
    let mut registry = DrawRegistry::new();
    for kind in DrawKind::all() {
        registry.register(
            kind,
            Box::new(move |geometry, params| {
                Box::new(Annotation::new(kind, geometry, params.clone()))
            }),
        );
    }
    registry
}
