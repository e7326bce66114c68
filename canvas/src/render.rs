//! Diffing renderer: reconciles render intents against live display primitives.
//!
//! The renderer is the only owner of primitive handles. Each pass it
//!
//! 1. snapshots every live primitive it created as an orphan candidate,
//! 2. walks every intent part, creating missing primitives, updating stored
//!    ones in place (removing them from the candidates) and clearing the
//!    reference of parts that should no longer exist,
//! 3. deletes whatever is still a candidate.
//!
//! Step 3 is a plain set difference (previous live − touched), so an entity
//! whose attachment vanished between passes is torn down without any
//! explicit teardown call. Handles always come and go as a group of four.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::camera::Camera;
use crate::consts::HANDLE_HALF_PX;
use crate::doc::EntityId;
use crate::geom::{Corner, Space};
use crate::rules::RenderIntent;
use crate::surface::{PrimitiveId, Shape, Surface};

/// Which visual part of an entity a primitive draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Rect,
    Label,
    Handle(Corner),
}

/// Primitive operations issued by one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

/// Handles currently stored for one entity.
#[derive(Debug, Clone, Copy, Default)]
struct PartHandles {
    rect: Option<PrimitiveId>,
    label: Option<PrimitiveId>,
    handles: Option<[PrimitiveId; 4]>,
}

/// Mutable state threaded through one pass.
struct Pass<'a, S: Surface> {
    surface: &'a mut S,
    owners: &'a mut HashMap<PrimitiveId, (EntityId, Part)>,
    orphans: HashSet<PrimitiveId>,
    stats: RenderStats,
}

impl<S: Surface> Pass<'_, S> {
    fn touch(&mut self, id: PrimitiveId, shape: Shape) {
        self.orphans.remove(&id);
        self.surface.update(id, shape);
        self.stats.updated += 1;
    }

    fn create(&mut self, entity: &EntityId, part: Part, shape: Shape) -> PrimitiveId {
        let id = self.surface.create(shape);
        self.owners.insert(id, (entity.clone(), part));
        self.stats.created += 1;
        id
    }

    fn reconcile(
        &mut self,
        entity: &EntityId,
        part: Part,
        slot: Option<PrimitiveId>,
        exists: bool,
        shape: impl FnOnce() -> Shape,
    ) -> Option<PrimitiveId> {
        match (slot, exists) {
            (Some(id), true) => {
                self.touch(id, shape());
                Some(id)
            }
            (None, true) => Some(self.create(entity, part, shape())),
            // Left in the orphan set; the sweep deletes it.
            (_, false) => None,
        }
    }
}

/// Owns every surface primitive and maps each back to its entity and part.
#[derive(Debug, Default)]
pub struct Renderer {
    parts: HashMap<EntityId, PartHandles>,
    owners: HashMap<PrimitiveId, (EntityId, Part)>,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the surface in line with `intents`.
    pub fn sync<S: Surface>(
        &mut self,
        intents: &BTreeMap<EntityId, RenderIntent>,
        camera: &Camera,
        surface: &mut S,
    ) -> RenderStats {
        let orphans: HashSet<PrimitiveId> = self.owners.keys().copied().collect();
        let mut previous = std::mem::take(&mut self.parts);
        let mut pass = Pass { surface, owners: &mut self.owners, orphans, stats: RenderStats::default() };

        for (entity, intent) in intents {
            let slots = previous.remove(entity).unwrap_or_default();
            let bbox = camera.project_rect(intent.rect.bbox, Space::Screen);

            let rect = pass.reconcile(entity, Part::Rect, slots.rect, intent.rect.exists, || Shape::Rect {
                rect: bbox,
                fill: intent.rect.fill.clone(),
                outline: intent.rect.outline.clone(),
                width: intent.rect.outline_width,
            });

            let label = pass.reconcile(entity, Part::Label, slots.label, intent.label.exists, || Shape::Text {
                anchor: camera.project_point(intent.label.anchor, Space::Screen),
                text: intent.label.text.clone(),
                color: intent.label.color.clone(),
            });

            let handle_shape = |corner: Corner| Shape::Rect {
                rect: bbox.corner(corner).expand(HANDLE_HALF_PX),
                fill: intent.handles.fill.clone(),
                outline: intent.handles.outline.clone(),
                width: 1,
            };
            let handles = match (slots.handles, intent.handles.exists) {
                (Some(group), true) => {
                    for (id, corner) in group.into_iter().zip(Corner::ALL) {
                        pass.touch(id, handle_shape(corner));
                    }
                    Some(group)
                }
                (None, true) => Some(Corner::ALL.map(|corner| pass.create(entity, Part::Handle(corner), handle_shape(corner)))),
                (_, false) => None,
            };

            self.parts.insert(entity.clone(), PartHandles { rect, label, handles });
        }

        let Pass { surface, owners, orphans, mut stats } = pass;
        for id in orphans {
            surface.delete(id);
            owners.remove(&id);
            stats.deleted += 1;
        }

        debug!(created = stats.created, updated = stats.updated, deleted = stats.deleted, "sync pass");
        stats
    }

    /// Map a primitive back to the entity and part it draws.
    #[must_use]
    pub fn owner_of(&self, id: PrimitiveId) -> Option<(&EntityId, Part)> {
        self.owners.get(&id).map(|(entity, part)| (entity, *part))
    }

    /// Number of live primitives drawing `entity`.
    #[must_use]
    pub fn live_count(&self, entity: &str) -> usize {
        self.owners.values().filter(|(e, _)| e == entity).count()
    }

    /// Number of live primitives across all entities.
    #[must_use]
    pub fn total_live(&self) -> usize {
        self.owners.len()
    }
}
