//! Maps the display layer's "topmost primitive under the pointer" back to a model entity.
//!
//! The core never hit-tests raw geometry; the surface answers the spatial
//! query and the renderer knows which entity and part each primitive draws.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::EntityId;
use crate::geom::{Corner, Point};
use crate::render::{Part, Renderer};
use crate::surface::{PrimitiveId, Surface};

/// Which part of an entity was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The box or its label; pressing starts a move.
    Body,
    /// A corner handle; pressing starts a resize.
    Handle(Corner),
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub entity: EntityId,
    pub part: HitPart,
    pub primitive: PrimitiveId,
}

/// Resolve the topmost renderer-owned primitive under `screen_pt`.
///
/// Returns `None` over empty canvas or over primitives the renderer does not own.
#[must_use]
pub fn hit_test<S: Surface>(screen_pt: Point, surface: &S, renderer: &Renderer) -> Option<Hit> {
    let primitive = surface.topmost_at(screen_pt)?;
    let (entity, part) = renderer.owner_of(primitive)?;
    let part = match part {
        Part::Rect | Part::Label => HitPart::Body,
        Part::Handle(corner) => HitPart::Handle(corner),
    };
    Some(Hit { entity: entity.clone(), part, primitive })
}
