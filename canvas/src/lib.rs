//! Canvas engine for the symbol atlas.
//!
//! Users place, move, resize and highlight bounding boxes tied to entities
//! from a symbol inventory. This crate owns the model of those attachments,
//! the selection, the camera, the rule pipeline that turns model state into
//! per-entity render intents, and the diffing renderer that keeps a retained
//! display surface in line with them. It compiles to WebAssembly for the
//! browser and to a plain rlib for the `atlas` command-line host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller [`engine::EngineCore`] and browser [`engine::Engine`] |
//! | [`doc`] | Inventory records, attachments and the [`doc::WorldModel`] |
//! | [`selection`] | Selected ids and the mutually exclusive module highlight |
//! | [`geom`] | Space-tagged integer points and rects |
//! | [`camera`] | Rational zoom, viewport and world/screen projection |
//! | [`rules`] | Ordered style rules producing [`rules::RenderIntent`]s |
//! | [`render`] | Mark/sweep reconciliation of intents against a surface |
//! | [`surface`] | Retained display surface trait and in-memory implementation |
//! | [`hit`] | Maps the topmost primitive back to an entity and part |
//! | [`input`] | Buttons, keys, cursor hints and the gesture state machine |
//! | [`layout`] | Persisted attachment layout format |
//! | [`paint`] | Draws surface primitives to a `Canvas2D` context |
//! | [`consts`] | Default sizes and colors |
//! | [`error`] | [`error::SceneError`] |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod layout;
pub mod paint;
pub mod render;
pub mod rules;
pub mod selection;
pub mod surface;
