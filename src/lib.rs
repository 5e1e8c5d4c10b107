//! Interactive drawing and editing engine for canvas annotations.
//!
//! Converts pointer gestures (press/drag/release/scroll) into the creation of
//! new vector shapes or the modification of existing ones. The crate supplies
//! the session state machine, construction rules, and hit-testing/edit logic;
//! rendering is delegated to an external [`surface::Surface`] and shapes are
//! any type implementing [`canvas::CanvasItem`].

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod session;
pub mod surface;
pub mod util;

pub use canvas::{Canvas, CanvasItem, ItemId};
pub use config::SessionConfig;
pub use draw::{Annotation, DrawKind, DrawParams, DrawRegistry, ShapeGeometry, standard_registry};
pub use error::SessionError;
pub use session::{DrawingSession, ScrollDirection, SessionEvent, SessionEventKind};
pub use surface::{RedrawReason, Surface};
