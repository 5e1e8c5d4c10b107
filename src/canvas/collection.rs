//! Ordered shape collection with z-order hit-testing.

use super::item::{CanvasItem, ItemId};

struct Entry {
    id: ItemId,
    item: Box<dyn CanvasItem>,
}

/// Container for all committed shapes on the surface.
///
/// Insertion order is z-order: the first entry is the bottom layer, the last
/// is the topmost. Finalized candidates are added at the top.
#[derive(Default)]
pub struct Canvas {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape on top of existing ones, returning its id.
    pub fn add(&mut self, item: Box<dyn CanvasItem>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, item });
        id
    }

    /// Removes a shape, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<Box<dyn CanvasItem>> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).item)
    }

    /// Removes all shapes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Looks up a shape by id.
    pub fn get(&self, id: ItemId) -> Option<&dyn CanvasItem> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.item.as_ref())
    }

    /// Looks up a shape by id (mutable).
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut (dyn CanvasItem + 'static)> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| e.item.as_mut())
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the canvas holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates shapes bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &dyn CanvasItem)> {
        self.entries.iter().map(|e| (e.id, e.item.as_ref()))
    }

    /// Editable shapes containing (x, y), bottom to top.
    ///
    /// The last element is the topmost hit, which selection prefers.
    pub fn items_at(&self, x: f64, y: f64) -> Vec<ItemId> {
        self.entries
            .iter()
            .filter(|e| e.item.editable() && e.item.contains(x, y))
            .map(|e| e.id)
            .collect()
    }

    /// Clears the editing flag on every shape except `keep`, enforcing the
    /// at-most-one-editing invariant.
    pub fn clear_editing_except(&mut self, keep: Option<ItemId>) {
        for entry in &mut self.entries {
            if Some(entry.id) != keep && entry.item.is_editing() {
                entry.item.set_editing(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::shapes::Annotation;
    use crate::draw::{DrawKind, DrawParams, ShapeGeometry};

    fn circle(x: f64, y: f64, radius: f64) -> Box<dyn CanvasItem> {
        Box::new(Annotation::new(
            DrawKind::Circle,
            ShapeGeometry::Radius { x, y, radius },
            DrawParams::new(),
        ))
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let mut canvas = Canvas::new();
        let a = canvas.add(circle(0.0, 0.0, 5.0));
        let b = canvas.add(circle(10.0, 0.0, 5.0));
        assert_ne!(a, b);

        canvas.remove(a);
        let c = canvas.add(circle(20.0, 0.0, 5.0));
        assert_ne!(c, a);
        assert!(canvas.get(a).is_none());
        assert!(canvas.get(b).is_some());
        assert!(canvas.get(c).is_some());
    }

    #[test]
    fn items_at_returns_hits_bottom_to_top() {
        let mut canvas = Canvas::new();
        let bottom = canvas.add(circle(0.0, 0.0, 10.0));
        let top = canvas.add(circle(2.0, 0.0, 10.0));
        let _far = canvas.add(circle(100.0, 100.0, 3.0));

        let hits = canvas.items_at(1.0, 1.0);
        assert_eq!(hits, vec![bottom, top]);
    }

    #[test]
    fn items_at_skips_non_editable() {
        let mut canvas = Canvas::new();
        let mut frozen = Annotation::new(
            DrawKind::Circle,
            ShapeGeometry::Radius {
                x: 0.0,
                y: 0.0,
                radius: 10.0,
            },
            DrawParams::new(),
        );
        frozen.set_editable(false);
        canvas.add(Box::new(frozen));
        let live = canvas.add(circle(0.0, 0.0, 10.0));

        assert_eq!(canvas.items_at(0.0, 0.0), vec![live]);
    }

    #[test]
    fn clear_editing_except_keeps_only_one() {
        let mut canvas = Canvas::new();
        let a = canvas.add(circle(0.0, 0.0, 5.0));
        let b = canvas.add(circle(10.0, 0.0, 5.0));
        canvas.get_mut(a).unwrap().set_editing(true);
        canvas.get_mut(b).unwrap().set_editing(true);

        canvas.clear_editing_except(Some(b));
        assert!(!canvas.get(a).unwrap().is_editing());
        assert!(canvas.get(b).unwrap().is_editing());
    }
}
