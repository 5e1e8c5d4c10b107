//! Kind-to-constructor dispatch table.

use super::geometry::ShapeGeometry;
use super::kind::{DrawKind, KIND_PRIORITY};
use super::params::DrawParams;
use crate::canvas::CanvasItem;
use std::collections::HashMap;

/// Constructor for one shape kind: positional geometry plus the shared
/// parameter mapping in, a boxed canvas item out.
pub type ItemConstructor = Box<dyn Fn(ShapeGeometry, &DrawParams) -> Box<dyn CanvasItem>>;

/// Injected mapping from shape kind to constructor.
///
/// The registry is fixed for the lifetime of a session; which kinds are
/// usable is decided here once, not at every construction.
#[derive(Default)]
pub struct DrawRegistry {
    constructors: HashMap<DrawKind, ItemConstructor>,
}

impl DrawRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the constructor for a kind.
    pub fn register(&mut self, kind: DrawKind, constructor: ItemConstructor) {
        self.constructors.insert(kind, constructor);
    }

    /// Whether a constructor exists for the kind.
    pub fn supports(&self, kind: DrawKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    /// Registered kinds in the fixed priority order.
    pub fn enabled_kinds(&self) -> Vec<DrawKind> {
        KIND_PRIORITY
            .into_iter()
            .filter(|kind| self.constructors.contains_key(kind))
            .collect()
    }

    /// Constructs an item for the kind, or `None` when no constructor is
    /// registered. Kind validation happens at selection time; a miss here
    /// only logs.
    pub fn create(
        &self,
        kind: DrawKind,
        geometry: ShapeGeometry,
        params: &DrawParams,
    ) -> Option<Box<dyn CanvasItem>> {
        match self.constructors.get(&kind) {
            Some(constructor) => Some(constructor(geometry, params)),
            None => {
                log::debug!("no constructor registered for draw type '{kind}'");
                None
            }
        }
    }
}
