//! Shape collection and the geometry-object contract.
//!
//! This module defines what the session requires from shapes:
//! - [`CanvasItem`]: the trait every drawable/editable shape implements
//! - [`Canvas`]: the ordered, id-keyed collection finalized shapes live in
//! - [`ItemId`]: stable identity handed out on insertion

pub mod collection;
pub mod item;

// Re-export commonly used types at module level
pub use collection::Canvas;
pub use item::{CanvasItem, DEFAULT_CAPTURE_RADIUS, ItemId};
