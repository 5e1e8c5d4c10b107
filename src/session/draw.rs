//! Draw controller: pointer gestures that construct new shapes.

use super::DrawingSession;
use crate::canvas::CanvasItem;
use crate::draw::{DrawKind, build_geometry};
use crate::session::events::SessionEvent;
use crate::surface::{RedrawReason, Surface};

/// State of one in-progress draw gesture.
///
/// Created on pointer-down, dropped on pointer-up; dropping it clears the
/// accumulated point list and discards any unfinalized candidate.
pub(crate) struct DrawGesture {
    /// Where the pointer went down
    pub(crate) anchor: (f64, f64),
    /// Committed vertices for polygon/path kinds (seeded with the anchor)
    pub(crate) points: Vec<(f64, f64)>,
    /// Provisional shape, replaced wholesale on every rebuild
    pub(crate) candidate: Option<Box<dyn CanvasItem>>,
}

impl<S: Surface> DrawingSession<S> {
    /// Pointer-down: starts a draw gesture at (x, y).
    ///
    /// Discards any previous gesture, deselects an edit selection (draw and
    /// edit are mutually exclusive), resets the rotation accumulator, seeds
    /// the point list, builds the first candidate, and forces a redraw.
    pub fn draw_begin(&mut self, x: f64, y: f64) -> bool {
        if !self.can_draw {
            return false;
        }

        if let Some(id) = self.selected.take() {
            if let Some(item) = self.canvas.get_mut(id) {
                item.set_editing(false);
            }
        }
        self.grab = None;

        self.rot_accum = 0.0;
        self.gesture = Some(DrawGesture {
            anchor: (x, y),
            points: vec![(x, y)],
            candidate: None,
        });
        self.rebuild_candidate(x, y);

        self.force_redraw(RedrawReason::Full);
        true
    }

    /// Pointer-move: rebuilds the candidate from the anchor and (x, y).
    ///
    /// The previous candidate is replaced, never mutated. Redraw is
    /// throttled; dropped frames are picked up by a later motion event or by
    /// the forced redraw at gesture end.
    pub fn draw_update(&mut self, x: f64, y: f64) -> bool {
        if !self.can_draw || self.gesture.is_none() {
            return false;
        }
        self.rebuild_candidate(x, y);
        self.request_redraw(RedrawReason::Incremental);
        true
    }

    /// Pointer-up: finalizes the gesture at (x, y).
    ///
    /// Performs one last rebuild, then hands the candidate (if any) to the
    /// canvas, emits a draw-completed event, and forces a redraw so the
    /// committed state is always rendered. Without a candidate only the
    /// redraw happens.
    pub fn draw_end(&mut self, x: f64, y: f64) -> bool {
        if !self.can_draw || self.gesture.is_none() {
            return false;
        }
        self.rebuild_candidate(x, y);

        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        match gesture.candidate {
            Some(item) => {
                let kind = item.kind();
                let id = self.canvas.add(item);
                log::debug!("finalized {kind} as {id}");
                self.events.emit(&SessionEvent::DrawCompleted { id });
                self.force_redraw(RedrawReason::Full);
                true
            }
            None => {
                self.force_redraw(RedrawReason::Full);
                false
            }
        }
    }

    /// Commits (x, y) into the accumulated vertex list.
    ///
    /// Meaningful only for polygon/path kinds during a gesture; otherwise a
    /// handled no-op. Driven by discrete key-style events, not pointer
    /// motion.
    pub fn poly_add(&mut self, x: f64, y: f64) -> bool {
        if !self.can_draw {
            return false;
        }
        if self.draw_kind.is_poly() {
            if let Some(gesture) = self.gesture.as_mut() {
                gesture.points.push((x, y));
            }
        }
        true
    }

    /// Removes the most recently committed vertex, if any.
    pub fn poly_delete(&mut self) -> bool {
        if !self.can_draw {
            return false;
        }
        if self.draw_kind.is_poly() {
            if let Some(gesture) = self.gesture.as_mut() {
                gesture.points.pop();
            }
        }
        true
    }

    /// Rebuilds the candidate from scratch for the current pointer position.
    ///
    /// Construction is pure given the anchor, live point, committed points,
    /// and parameters; the rotation accumulator is injected for the kinds
    /// whose constructors take a rotation. A registry miss leaves the
    /// previous candidate in place (kind validity was checked at selection).
    fn rebuild_candidate(&mut self, x: f64, y: f64) {
        let Some(anchor) = self.gesture.as_ref().map(|g| g.anchor) else {
            return;
        };
        let committed = if self.draw_kind.is_poly() {
            self.gesture
                .as_ref()
                .map(|g| g.points.clone())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let mut params = self.params.clone();
        if matches!(
            self.draw_kind,
            DrawKind::Box | DrawKind::Ellipse | DrawKind::Triangle
        ) {
            params.set_rotation(self.rot_accum);
        }

        let geometry = build_geometry(self.draw_kind, anchor, (x, y), &committed, &self.draw_text);
        if let Some(mut item) = self.registry.create(self.draw_kind, geometry, &params) {
            item.initialize(&mut self.surface);
            if let Some(gesture) = self.gesture.as_mut() {
                gesture.candidate = Some(item);
            }
        }
    }
}
