//! Contract implemented by every selectable/editable shape.

use crate::draw::DrawKind;
use crate::surface::Surface;
use crate::util;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Capture radius used when an item does not specify its own.
pub const DEFAULT_CAPTURE_RADIUS: f64 = 8.0;

/// Identity of a shape inside a [`Canvas`](crate::canvas::Canvas).
///
/// Ids are never reused within one canvas, so a stale id from a deleted
/// shape simply fails lookups instead of aliasing a newer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Geometry object the session draws and edits.
///
/// The session treats items as opaque: it constructs them through a
/// [`DrawRegistry`](crate::draw::DrawRegistry), asks them about containment
/// and control points, and instructs them to move/reshape/rotate/scale.
/// Coordinates are surface-local.
pub trait CanvasItem: Any {
    /// The kind this item was constructed as.
    fn kind(&self) -> DrawKind;

    /// Called once right after construction, before the item becomes the
    /// session's candidate. Implementations may cache surface-derived state.
    fn initialize(&mut self, surface: &mut dyn Surface) {
        let _ = surface;
    }

    /// Whether (x, y) falls inside the item.
    fn contains(&self, x: f64, y: f64) -> bool;

    /// Moves the item so its reference point lands on (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Anchor used to compute whole-object drag offsets.
    fn reference_point(&self) -> (f64, f64);

    /// Whether the item is currently in edit mode.
    fn is_editing(&self) -> bool;

    /// Enters or leaves edit mode.
    fn set_editing(&mut self, editing: bool);

    /// Whether the item may be selected for editing at all.
    fn editable(&self) -> bool {
        true
    }

    /// Ordered control points that can be dragged independently.
    fn edit_points(&self) -> Vec<(f64, f64)>;

    /// Relocates control point `index` to `pt`. Out-of-range indices are
    /// ignored.
    fn set_edit_point(&mut self, index: usize, pt: (f64, f64));

    /// Rotates by a relative amount in degrees.
    fn rotate_by(&mut self, deg: f64);

    /// Sets an absolute rotation in degrees, returning `true` when the item
    /// supports a settable rotation attribute. Items without one return
    /// `false` and are rotated relatively via [`rotate_by`](Self::rotate_by).
    fn set_rotation(&mut self, deg: f64) -> bool {
        let _ = deg;
        false
    }

    /// Scales about the reference point.
    fn scale_by(&mut self, sx: f64, sy: f64);

    /// Pixel distance within which a pointer counts as "on" a control point.
    fn capture_radius(&self) -> f64 {
        DEFAULT_CAPTURE_RADIUS
    }

    /// Which control point, if any, a pointer at (x, y) grabs.
    fn grab_point(&self, x: f64, y: f64) -> Option<usize> {
        util::point_index(&self.edit_points(), x, y, self.capture_radius())
    }

    /// Downcast support for callers that know the concrete item type.
    fn as_any(&self) -> &dyn Any;
}
