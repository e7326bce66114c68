//! Display-layer seam: retained primitives addressed by opaque ids.
//!
//! The renderer never draws directly; it creates, updates and deletes
//! primitives through [`Surface`]. The interaction controller asks the same
//! surface for the topmost primitive under the pointer. [`MemorySurface`] is
//! a retained, z-ordered implementation used by tests, the CLI host and the
//! browser painter.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::consts::{TEXT_CHAR_PX, TEXT_LINE_PX};
use crate::geom::{Point, Rect};

/// Opaque handle to a live display primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u64);

/// Screen-space geometry and style of one primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Rect { rect: Rect, fill: String, outline: String, width: u32 },
    /// Text anchored at its top-center.
    Text { anchor: Point, text: String, color: String },
}

impl Shape {
    /// Approximate screen-space extent, used for hit queries.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { rect, .. } => *rect,
            Self::Text { anchor, text, .. } => {
                let chars = i64::try_from(text.chars().count()).unwrap_or(i64::MAX / TEXT_CHAR_PX);
                let half = chars * TEXT_CHAR_PX / 2;
                Rect::screen(anchor.x - half, anchor.y, anchor.x + half, anchor.y + TEXT_LINE_PX)
            }
        }
    }
}

/// A retained-mode display surface.
pub trait Surface {
    /// Create a primitive on top of every existing one.
    fn create(&mut self, shape: Shape) -> PrimitiveId;

    /// Replace the geometry and style of a live primitive in place.
    fn update(&mut self, id: PrimitiveId, shape: Shape);

    /// Destroy a primitive. Unknown ids are ignored.
    fn delete(&mut self, id: PrimitiveId);

    /// The topmost primitive whose extent contains the screen point.
    fn topmost_at(&self, point: Point) -> Option<PrimitiveId>;
}

/// In-memory surface; creation order is stacking order.
#[derive(Debug, Default)]
pub struct MemorySurface {
    next_id: u64,
    primitives: Vec<(PrimitiveId, Shape)>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: PrimitiveId) -> Option<&Shape> {
        self.primitives.iter().find(|(pid, _)| *pid == id).map(|(_, s)| s)
    }

    /// Live primitives, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Shape)> {
        self.primitives.iter().map(|(id, s)| (*id, s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for MemorySurface {
    fn create(&mut self, shape: Shape) -> PrimitiveId {
        self.next_id += 1;
        let id = PrimitiveId(self.next_id);
        self.primitives.push((id, shape));
        id
    }

    fn update(&mut self, id: PrimitiveId, shape: Shape) {
        if let Some(slot) = self.primitives.iter_mut().find(|(pid, _)| *pid == id) {
            slot.1 = shape;
        }
    }

    fn delete(&mut self, id: PrimitiveId) {
        self.primitives.retain(|(pid, _)| *pid != id);
    }

    fn topmost_at(&self, point: Point) -> Option<PrimitiveId> {
        self.primitives
            .iter()
            .rev()
            .find(|(_, shape)| shape.bounds().contains(point))
            .map(|(id, _)| *id)
    }
}
