//! Edit controller: selection, drag, rotate, scale, delete.

use super::DrawingSession;
use crate::canvas::ItemId;
use crate::surface::{RedrawReason, Surface};

/// Active drag on the selected shape.
///
/// Absent while merely selected; a pointer-down either grabs one control
/// point or the whole object, disambiguated by hit-testing.
pub(crate) enum EditGrab {
    /// Dragging control point `index` of the selected shape
    Point(usize),
    /// Dragging the whole shape; `offset` is pointer-down minus the shape's
    /// reference point, so the shape does not jump under the pointer
    Whole {
        /// Drag anchor offset
        offset: (f64, f64),
    },
}

/// Scroll direction for rotate/scale adjustments, as configured by the
/// input source ("increasing" vs "decreasing").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Increasing: rotate forward / grow
    Up,
    /// Decreasing: rotate backward / shrink
    Down,
}

impl<S: Surface> DrawingSession<S> {
    /// Pointer-down: selects a shape or starts a drag on the selection.
    ///
    /// With nothing selected, picks the topmost editable shape under the
    /// pointer (no-op when there is none). With a selection, a nearby
    /// control point starts a point drag (applying one update immediately),
    /// a hit inside the shape starts a whole-object drag, and a click
    /// outside deselects and falls through to picking whatever else is
    /// under the pointer.
    pub fn edit_begin(&mut self, x: f64, y: f64) -> bool {
        // Selection may be stale if the shape was removed externally.
        if let Some(id) = self.selected {
            if self.canvas.get(id).is_none() {
                self.selected = None;
                self.grab = None;
            }
        }

        let hits = self.canvas.items_at(x, y);

        match self.selected {
            None => {
                let Some(&top) = hits.last() else {
                    return false;
                };
                self.select(top);
            }
            Some(id) => {
                let editing = self
                    .canvas
                    .get(id)
                    .map(|item| item.is_editing())
                    .unwrap_or(false);
                if editing {
                    if let Some(index) = self.canvas.get(id).and_then(|item| item.grab_point(x, y))
                    {
                        log::debug!("dragging control point {index} of {id}");
                        self.grab = Some(EditGrab::Point(index));
                        self.edit_update(x, y);
                        return true;
                    }

                    let inside = self
                        .canvas
                        .get(id)
                        .map(|item| item.contains(x, y))
                        .unwrap_or(false);
                    if inside {
                        let (rx, ry) = self
                            .canvas
                            .get(id)
                            .map(|item| item.reference_point())
                            .unwrap_or((0.0, 0.0));
                        self.grab = Some(EditGrab::Whole {
                            offset: (x - rx, y - ry),
                        });
                        return true;
                    }

                    // Clicked outside the selection: drop it, then see if
                    // another editable shape sits under the pointer.
                    if let Some(item) = self.canvas.get_mut(id) {
                        item.set_editing(false);
                    }
                    self.selected = None;
                    if let Some(&top) = hits.iter().filter(|&&hit| hit != id).last() {
                        self.select(top);
                    }
                } else {
                    // The editing flag was cleared behind our back;
                    // reconcile against the current hit list.
                    if hits.contains(&id) {
                        log::debug!("re-asserting edit mode on {id}");
                        if let Some(item) = self.canvas.get_mut(id) {
                            item.set_editing(true);
                        }
                    } else if let Some(&top) = hits.last() {
                        self.select(top);
                    }
                }
            }
        }

        self.force_redraw(RedrawReason::Full);
        true
    }

    /// Pointer-move: applies the active drag at (x, y).
    ///
    /// Not handled unless a drag is in progress. Redraw is throttled.
    pub fn edit_update(&mut self, x: f64, y: f64) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let Some(grab) = self.grab.as_ref() else {
            return false;
        };
        let Some(item) = self.canvas.get_mut(id) else {
            return false;
        };

        match grab {
            EditGrab::Point(index) => item.set_edit_point(*index, (x, y)),
            EditGrab::Whole { offset } => item.move_to(x - offset.0, y - offset.1),
        }

        self.request_redraw(RedrawReason::Incremental);
        true
    }

    /// Pointer-up: finishes the active drag at (x, y).
    ///
    /// Applies one final update, returns to the plain selected state, and
    /// forces a redraw so the final position is always rendered.
    pub fn edit_end(&mut self, x: f64, y: f64) -> bool {
        if self.selected.is_none() || self.grab.is_none() {
            return false;
        }
        self.edit_update(x, y);
        self.grab = None;
        self.force_redraw(RedrawReason::Full);
        true
    }

    /// Scroll: rotates the selected shape by `amount` degrees.
    ///
    /// Shapes with a settable rotation attribute get the absolute value of
    /// the session's rotation accumulator; others get a relative rotation
    /// and the accumulator is left alone.
    pub fn rotate(&mut self, direction: ScrollDirection, amount: f64) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let delta = match direction {
            ScrollDirection::Up => amount,
            ScrollDirection::Down => -amount,
        };
        let new_rot = self.rot_accum + delta;

        let Some(item) = self.canvas.get_mut(id) else {
            return false;
        };
        if item.set_rotation(new_rot) {
            self.rot_accum = new_rot;
        } else {
            item.rotate_by(delta);
        }

        self.force_redraw(RedrawReason::Full);
        true
    }

    /// Scroll: scales the selected shape by a fixed notch factor.
    ///
    /// The wheel `amount` is intentionally ignored; each notch shrinks to
    /// 0.9x or grows to 1.1x uniformly.
    pub fn scale(&mut self, direction: ScrollDirection, _amount: f64) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let factor = match direction {
            ScrollDirection::Up => 1.1,
            ScrollDirection::Down => 0.9,
        };

        let Some(item) = self.canvas.get_mut(id) else {
            return false;
        };
        item.scale_by(factor, factor);

        self.force_redraw(RedrawReason::Full);
        true
    }

    /// Removes the selected shape from the canvas.
    ///
    /// Requires the shape to actually be in edit mode; afterwards the
    /// session is back to no selection.
    pub fn edit_delete(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let editing = self
            .canvas
            .get(id)
            .map(|item| item.is_editing())
            .unwrap_or(false);
        if !editing {
            return false;
        }

        self.selected = None;
        self.grab = None;
        self.canvas.remove(id);
        log::debug!("deleted {id}");

        self.force_redraw(RedrawReason::Full);
        true
    }

    /// Marks `id` as the single shape in edit mode.
    fn select(&mut self, id: ItemId) {
        self.canvas.clear_editing_except(Some(id));
        if let Some(item) = self.canvas.get_mut(id) {
            item.set_editing(true);
        }
        self.selected = Some(id);
        self.grab = None;
        log::debug!("selected {id} for editing");
    }
}
