use std::collections::BTreeMap;

use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Viewport, Zoom};
use crate::consts::DEFAULT_BOX_HALF;
use crate::doc::{Attachment, EntityId, WorldModel};
use crate::error::SceneError;
use crate::geom::{Corner, Point, Rect, Space};
use crate::hit::{self, HitPart};
use crate::input::{Button, Cursor, InputState, Key};
use crate::layout::{AttachmentRecord, Layout, PaneLayout};
use crate::paint;
use crate::render::{RenderStats, Renderer};
use crate::rules::{self, RenderIntent};
use crate::selection::{Changed, Selection};
use crate::surface::{MemorySurface, PrimitiveId, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Notifications returned from handlers for the host and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The selection set changed; carries the new ids in sorted order.
    SelectionChanged(Vec<EntityId>),
    /// The module highlight changed; carries the new value.
    ModuleHighlightChanged(Option<String>),
    AttachmentCreated { id: EntityId, bbox: Rect },
    AttachmentUpdated { id: EntityId, bbox: Rect },
    AttachmentDeleted { id: EntityId },
    SetCursor(Cursor),
    /// A synchronization pass changed the surface; repaint.
    RenderNeeded,
}

/// Outcome of [`EngineCore::apply_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutReport {
    /// Entries placed as attachments.
    pub kept: usize,
    /// Entries whose id is no longer in the inventory.
    pub dropped: usize,
}

/// Core engine state: the single context object that owns the model, the
/// selection, the camera, the gesture state and the render pipeline.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. Every handler runs to completion, including the
/// synchronization pass it triggers, before returning.
pub struct EngineCore<S: Surface = MemorySurface> {
    world: WorldModel,
    selection: Selection,
    camera: Camera,
    input: InputState,
    intents: BTreeMap<EntityId, RenderIntent>,
    renderer: Renderer,
    surface: S,
    hover: Option<PrimitiveId>,
}

impl EngineCore<MemorySurface> {
    /// Engine over an in-memory surface.
    #[must_use]
    pub fn new(world: WorldModel) -> Self {
        Self::with_surface(world, MemorySurface::new())
    }
}

impl<S: Surface> EngineCore<S> {
    #[must_use]
    pub fn with_surface(world: WorldModel, surface: S) -> Self {
        Self {
            world,
            selection: Selection::new(),
            camera: Camera::default(),
            input: InputState::default(),
            intents: BTreeMap::new(),
            renderer: Renderer::new(),
            surface,
            hover: None,
        }
    }

    // --- Synchronization ---

    /// Run the rule pipeline over every entity, then reconcile the surface.
    pub fn sync(&mut self) -> RenderStats {
        self.intents = rules::derive_all(&self.world, &self.selection);
        self.renderer.sync(&self.intents, &self.camera, &mut self.surface)
    }

    fn sync_into(&mut self, actions: &mut Vec<Action>) {
        self.sync();
        actions.push(Action::RenderNeeded);
    }

    fn notify(&self, changed: Changed, actions: &mut Vec<Action>) {
        if changed.selection {
            actions.push(Action::SelectionChanged(self.selection.ids().cloned().collect()));
        }
        if changed.highlight {
            actions.push(Action::ModuleHighlightChanged(self.selection.module().map(str::to_owned)));
        }
    }

    fn after_selection(&mut self, changed: Changed) -> Vec<Action> {
        let mut actions = Vec::new();
        if changed.any() {
            self.notify(changed, &mut actions);
            self.sync_into(&mut actions);
        }
        actions
    }

    fn require_known(&self, id: &str) -> Result<(), SceneError> {
        if self.world.contains(id) { Ok(()) } else { Err(SceneError::UnknownEntity(id.to_owned())) }
    }

    // --- Selection inputs (tree collaborator) ---

    /// Make `{id}` the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownEntity`] if `id` is not in the inventory.
    pub fn select_entity(&mut self, id: &str) -> Result<Vec<Action>, SceneError> {
        self.require_known(id)?;
        let changed = self.selection.replace_with_single(id);
        Ok(self.after_selection(changed))
    }

    /// Add or remove `id` from the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownEntity`] if `id` is not in the inventory.
    pub fn toggle_entity(&mut self, id: &str) -> Result<Vec<Action>, SceneError> {
        self.require_known(id)?;
        let changed = self.selection.toggle_membership(id);
        Ok(self.after_selection(changed))
    }

    /// Highlight every entity of `module`, clearing the selection.
    pub fn select_module(&mut self, module: &str) -> Vec<Action> {
        let changed = self.selection.highlight_module(module);
        self.after_selection(changed)
    }

    /// Drop both the selection and the highlight.
    pub fn clear_selection(&mut self) -> Vec<Action> {
        let changed = self.selection.clear_all();
        self.after_selection(changed)
    }

    // --- Commands ---

    /// Remove the attachment of every selected entity, then clear the selection.
    /// Inventory records are kept.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let ids: Vec<EntityId> = self.selection.ids().cloned().collect();
        if ids.is_empty() {
            return Vec::new();
        }

        let mut actions = Vec::new();
        for id in ids {
            if self.input.target() == Some(&id) {
                self.input = InputState::Idle;
            }
            if self.world.detach(&id).is_some() {
                self.intents.remove(&id);
                actions.push(Action::AttachmentDeleted { id });
            }
        }
        let changed = self.selection.clear_all();
        self.notify(changed, &mut actions);
        self.sync_into(&mut actions);
        actions
    }

    /// Replace every attachment with the layout's entries. Ids missing from
    /// the inventory are dropped.
    pub fn apply_layout(&mut self, layout: &Layout) -> LayoutReport {
        self.world.clear_attachments();
        if self.input.target().is_some() {
            self.input = InputState::Idle;
        }

        let mut report = LayoutReport::default();
        for (id, record) in &layout.attachments {
            if !self.world.contains(id) {
                debug!(entity = %id, "layout entry not in inventory; dropping");
                report.dropped += 1;
                continue;
            }
            let [x0, y0, x1, y1] = record.bbox;
            let placed = Attachment::with_color(Rect::world(x0, y0, x1, y1), &record.color)
                .and_then(|attachment| self.world.attach(id, attachment));
            match placed {
                Ok(()) => report.kept += 1,
                Err(e) => warn!(entity = %id, error = %e, "could not place layout entry"),
            }
        }
        self.sync();
        report
    }

    /// The persisted form of the current attachments.
    #[must_use]
    pub fn layout_snapshot(&self, panes: PaneLayout, window: Option<String>) -> Layout {
        let attachments = self
            .world
            .attachments()
            .map(|(id, a)| (id.clone(), AttachmentRecord { bbox: a.bbox().to_array(), color: a.color.clone() }))
            .collect();
        Layout { attachments, panes, window }
    }

    // --- Viewport / zoom ---

    /// Record the new viewport size and force a full pass.
    pub fn set_viewport(&mut self, width: i64, height: i64) -> Vec<Action> {
        self.camera.viewport = Viewport::new(width, height);
        let mut actions = Vec::new();
        self.sync_into(&mut actions);
        actions
    }

    pub fn set_zoom(&mut self, zoom: Zoom) -> Vec<Action> {
        self.camera.zoom = zoom;
        let mut actions = Vec::new();
        self.sync_into(&mut actions);
        actions
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        if let Some(hit) = hit::hit_test(screen_pt, &self.surface, &self.renderer) {
            self.input = match hit.part {
                HitPart::Handle(corner) => InputState::DraggingHandle { id: hit.entity.clone(), corner, last: screen_pt },
                HitPart::Body => InputState::DraggingItem { id: hit.entity.clone(), last: screen_pt },
            };
            let changed = self.selection.replace_with_single(&hit.entity);
            return self.after_selection(changed);
        }

        let unplaced = self.selection.unique().filter(|id| self.world.attachment(id).is_none()).cloned();
        if let Some(id) = unplaced {
            return self.place_default(&id, screen_pt);
        }

        self.input = InputState::Panning { last: screen_pt };
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => self.hover_at(screen_pt),
            InputState::DraggingItem { id, last } => self.drag(id, None, last, screen_pt),
            InputState::DraggingHandle { id, corner, last } => self.drag(id, Some(corner), last, screen_pt),
            InputState::Panning { last } => {
                self.camera.pan_by(screen_pt.x - last.x, screen_pt.y - last.y);
                self.input = InputState::Panning { last: screen_pt };
                let mut actions = Vec::new();
                self.sync_into(&mut actions);
                actions
            }
        }
    }

    /// End any gesture. The cursor hint is reset even when nothing was dragged.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.hover = None;
        vec![Action::SetCursor(Cursor::Default)]
    }

    /// The pointer left the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.hover.take().is_none() {
            return Vec::new();
        }
        vec![Action::SetCursor(Cursor::Default)]
    }

    /// Wheel up (negative `delta_y`) zooms in one ladder step, wheel down zooms out.
    pub fn on_wheel(&mut self, delta_y: i64) -> Vec<Action> {
        let zoom = match delta_y.signum() {
            -1 => self.camera.zoom.step_in(),
            1 => self.camera.zoom.step_out(),
            _ => return Vec::new(),
        };
        if zoom == self.camera.zoom {
            return Vec::new();
        }
        self.set_zoom(zoom)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_delete() {
            self.delete_selected()
        } else if key.is_escape() {
            self.clear_selection()
        } else {
            Vec::new()
        }
    }

    // --- Gesture helpers ---

    fn place_default(&mut self, id: &EntityId, screen_pt: Point) -> Vec<Action> {
        let center = self.camera.project_point(screen_pt, Space::World);
        let bbox = center.expand(DEFAULT_BOX_HALF);
        let placed = Attachment::new(bbox).and_then(|attachment| self.world.attach(id, attachment));
        if let Err(e) = placed {
            warn!(entity = %id, error = %e, "could not place attachment");
            return Vec::new();
        }
        debug!(entity = %id, ?bbox, "attachment placed");
        let mut actions = vec![Action::AttachmentCreated { id: id.clone(), bbox }];
        self.sync_into(&mut actions);
        actions
    }

    /// Apply one motion step of a move (`corner == None`) or a resize.
    ///
    /// The delta is taken between the two pointer positions projected to world
    /// space, so consecutive steps telescope to the exact total at any zoom.
    fn drag(&mut self, id: EntityId, corner: Option<Corner>, last: Point, screen_pt: Point) -> Vec<Action> {
        let Some(attachment) = self.world.attachment_mut(&id) else {
            debug!(entity = %id, "drag target vanished; cancelling");
            return Vec::new();
        };

        let from = self.camera.project_point(last, Space::World);
        let to = self.camera.project_point(screen_pt, Space::World);
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let bbox = attachment.bbox();
        let moved = match corner {
            None => bbox.translate(dx, dy),
            Some(c) => bbox.with_corner(c, bbox.corner(c).translate(dx, dy)),
        };
        if let Err(e) = attachment.set_bbox(moved) {
            warn!(entity = %id, error = %e, "drag produced an invalid bbox; cancelling");
            return Vec::new();
        }

        self.input = match corner {
            None => InputState::DraggingItem { id: id.clone(), last: screen_pt },
            Some(corner) => InputState::DraggingHandle { id: id.clone(), corner, last: screen_pt },
        };
        let mut actions = vec![Action::AttachmentUpdated { id, bbox: moved }];
        self.sync_into(&mut actions);
        actions
    }

    fn hover_at(&mut self, screen_pt: Point) -> Vec<Action> {
        let hit = hit::hit_test(screen_pt, &self.surface, &self.renderer);
        let primitive = hit.as_ref().map(|h| h.primitive);
        if primitive == self.hover {
            return Vec::new();
        }
        self.hover = primitive;
        let cursor = match hit.map(|h| h.part) {
            Some(HitPart::Handle(_)) => Cursor::Resize,
            Some(HitPart::Body) => Cursor::Move,
            None => Cursor::Default,
        };
        vec![Action::SetCursor(cursor)]
    }

    // --- Queries ---

    #[must_use]
    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The entity the detail view should show: the unique selection.
    #[must_use]
    pub fn detail_target(&self) -> Option<&EntityId> {
        self.selection.unique()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn intents(&self) -> &BTreeMap<EntityId, RenderIntent> {
        &self.intents
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// The browser engine. Wraps `EngineCore` and owns the canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore<MemorySurface>,
    dpr: f64,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, world: WorldModel) -> Self {
        Self { canvas, core: EngineCore::new(world), dpr: 1.0 }
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.dpr = dpr.max(1.0);
        self.canvas.set_width((width_css * self.dpr).round().max(1.0) as u32);
        self.canvas.set_height((height_css * self.dpr).round().max(1.0) as u32);
        self.core.set_viewport(width_css.round() as i64, height_css.round() as i64)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, delta_y: i64) -> Vec<Action> {
        self.core.on_wheel(delta_y)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    // --- Render ---

    /// Paint the current surface to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        paint::draw(&ctx, self.core.surface(), self.core.camera().viewport, self.dpr)
    }
}
