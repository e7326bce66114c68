//! Error type shared by the canvas core.

/// Errors surfaced by the scene engine.
///
/// Most invalid states of the coordinate machine are unrepresentable by
/// construction; the variants here cover the few that can still reach a
/// public API boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// A bounding box was stored into an attachment while still in screen space.
    #[error("attachment bbox must be stored in world space")]
    NotWorldSpace,
    /// Zoom numerator and denominator must both be positive.
    #[error("invalid zoom {num}/{den}: both terms must be positive")]
    InvalidZoom { num: i64, den: i64 },
    /// The id does not name any inventory record.
    #[error("unknown entity `{0}`")]
    UnknownEntity(String),
    /// The persisted layout could not be interpreted at all.
    #[error("malformed layout: {0}")]
    MalformedLayout(String),
}
