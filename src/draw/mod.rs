//! Shape kinds, construction rules, and constructor dispatch.
//!
//! This module turns gestures into geometry:
//! - [`DrawKind`]: the closed set of shape kinds
//! - [`DrawParams`]: the shared style/behavior parameter mapping
//! - [`build_geometry`]: the pure per-kind construction rules
//! - [`DrawRegistry`]: the injected kind-to-constructor table
//! - [`shapes`]: a standard value-shape implementation of the item contract

pub mod geometry;
pub mod kind;
pub mod params;
pub mod registry;
pub mod shapes;

// Re-export commonly used types at module level
pub use geometry::{ShapeGeometry, build_geometry};
pub use kind::{DrawKind, KIND_PRIORITY};
pub use params::{DrawParams, ParamValue};
pub use registry::{DrawRegistry, ItemConstructor};
pub use shapes::{Annotation, standard_registry};
