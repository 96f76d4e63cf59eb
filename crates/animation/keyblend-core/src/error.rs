//! Error types for keyblend-core.

use thiserror::Error;

use crate::ids::EntityId;

/// Errors surfaced by playback commands, clip loading and the driver.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnimError {
    /// `play()` was asked for a clip the animator does not hold.
    #[error("clip index {index} out of range (animator holds {len} clips)")]
    InvalidClipIndex { index: usize, len: usize },

    /// Clip JSON could not be decoded.
    #[error("clip parse error: {0}")]
    ClipParse(String),

    /// Clip data decoded but violates basic invariants.
    #[error("invalid clip '{clip}': {reason}")]
    InvalidClip { clip: String, reason: String },

    /// Driver lookup for an entity that was never spawned or already despawned.
    #[error("unknown entity {0:?}")]
    UnknownEntity(EntityId),
}

pub type Result<T> = std::result::Result<T, AnimError>;
