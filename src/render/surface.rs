//! Per-child surface registry.
//!
//! A container keeps one long-lived [`Canvas`] per child, sized to the
//! child's allocation and positioned at the child's origin relative to the
//! container. [`SurfaceSet`] owns that map: on every layout pass the
//! container calls [`SurfaceSet::update`] for each live child (creating the
//! surface on first sight, repositioning and resizing it in place after) and
//! [`SurfaceSet::remove`] when a child goes away. Surfaces are mutated only
//! by the owning container's own resize/draw call path.

use slotmap::SecondaryMap;

use crate::geometry::{Offset, Size};
use crate::widget::WidgetId;

use super::canvas::Canvas;
use super::cell::CellStyle;

// ---------------------------------------------------------------------------
// SurfaceSet
// ---------------------------------------------------------------------------

/// The child-id → canvas map a container composites through.
#[derive(Debug, Default)]
pub struct SurfaceSet {
    surfaces: SecondaryMap<WidgetId, Canvas>,
}

impl SurfaceSet {
    /// Create an empty surface set.
    pub fn new() -> Self {
        Self { surfaces: SecondaryMap::new() }
    }

    /// Create or refresh the surface for `id`.
    ///
    /// `local` is the child's origin relative to the container origin. An
    /// existing surface is repositioned and resized in place: resizing to an
    /// unchanged size preserves content, otherwise the buffer clears to a
    /// blank cell in `style`.
    pub fn update(&mut self, id: WidgetId, local: Offset, size: Size, style: &CellStyle) {
        match self.surfaces.get_mut(id) {
            Some(surface) => {
                surface.set_origin(local);
                surface.resize(size, style.clone());
            }
            None => {
                self.surfaces.insert(id, Canvas::new(local, size, style.clone()));
            }
        }
    }

    /// Drop the surface for a removed child.
    pub fn remove(&mut self, id: WidgetId) {
        self.surfaces.remove(id);
    }

    /// The surface for `id`, if one exists.
    pub fn get(&self, id: WidgetId) -> Option<&Canvas> {
        self.surfaces.get(id)
    }

    /// Mutable access to the surface for `id`.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Canvas> {
        self.surfaces.get_mut(id)
    }

    /// Whether a surface exists for `id`.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Number of registered surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether no surfaces are registered.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<WidgetId> {
        let mut arena: SlotMap<WidgetId, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn new_set_is_empty() {
        let set = SurfaceSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn update_creates_surface() {
        let id = ids(1)[0];
        let mut set = SurfaceSet::new();
        set.update(id, Offset::new(2, 1), Size::new(5, 3), &CellStyle::default());

        assert!(set.contains(id));
        let surface = set.get(id).unwrap();
        assert_eq!(surface.origin(), Offset::new(2, 1));
        assert_eq!(surface.size(), Size::new(5, 3));
    }

    #[test]
    fn update_repositions_in_place() {
        let id = ids(1)[0];
        let mut set = SurfaceSet::new();
        set.update(id, Offset::new(0, 0), Size::new(5, 3), &CellStyle::default());
        set.get_mut(id).unwrap().set_rune(0, 0, 'A', CellStyle::default()).unwrap();

        // Same size: content survives, only the origin moves.
        set.update(id, Offset::new(4, 2), Size::new(5, 3), &CellStyle::default());
        let surface = set.get(id).unwrap();
        assert_eq!(surface.origin(), Offset::new(4, 2));
        assert_eq!(surface.get(0, 0).unwrap().ch, 'A');
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn update_resize_clears() {
        let id = ids(1)[0];
        let mut set = SurfaceSet::new();
        set.update(id, Offset::new(0, 0), Size::new(5, 3), &CellStyle::default());
        set.get_mut(id).unwrap().set_rune(0, 0, 'A', CellStyle::default()).unwrap();

        set.update(id, Offset::new(0, 0), Size::new(8, 3), &CellStyle::default());
        let surface = set.get(id).unwrap();
        assert_eq!(surface.size(), Size::new(8, 3));
        assert_eq!(surface.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn remove_drops_surface() {
        let id = ids(1)[0];
        let mut set = SurfaceSet::new();
        set.update(id, Offset::new(0, 0), Size::new(5, 3), &CellStyle::default());
        set.remove(id);
        assert!(!set.contains(id));
        assert!(set.get(id).is_none());
    }

    #[test]
    fn surfaces_are_independent() {
        let ids = ids(2);
        let mut set = SurfaceSet::new();
        set.update(ids[0], Offset::new(0, 0), Size::new(2, 1), &CellStyle::default());
        set.update(ids[1], Offset::new(2, 0), Size::new(3, 1), &CellStyle::default());

        assert_eq!(set.len(), 2);
        set.remove(ids[0]);
        assert!(set.contains(ids[1]));
        assert_eq!(set.get(ids[1]).unwrap().size(), Size::new(3, 1));
    }
}
