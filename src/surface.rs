//! Abstraction over the rendering surface the annotations overlay.

use serde::{Deserialize, Serialize};

/// Why a redraw is being requested.
///
/// `Full` is used when committed canvas content changed (a shape was added,
/// moved, or removed); `Incremental` covers provisional updates during a
/// drag, where a compositor may redraw only the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedrawReason {
    /// Committed content changed; everything should be repainted.
    Full,
    /// Only the in-progress overlay changed.
    Incremental,
}

/// Render target the drawing session issues redraw requests to.
///
/// Requests are fire-and-forget: the surface decides when and how to paint,
/// the session only signals that its state changed.
pub trait Surface {
    /// Requests that the surface repaint itself.
    fn redraw(&mut self, reason: RedrawReason);
}
