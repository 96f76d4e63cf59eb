//! Keyblend Core (engine-agnostic)
//!
//! Keyframe curve evaluation, per-entity playback state and crossfade blending.
//! Hosts expose their transform hierarchy through [`Resolvable`]/[`TargetHost`]
//! and call [`Animator::update`] once per frame (directly or through
//! [`AnimationSystem`]).

pub mod accumulate;
pub mod animator;
pub mod binding;
pub mod clip;
pub mod config;
pub mod curve;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod interp;
pub mod outputs;
pub mod playback;
pub mod rig;
pub mod sampling;
pub mod stored_clip;
pub mod system;

// Re-exports for consumers (hosts and drivers)
pub use animator::Animator;
pub use binding::{resolve_path, Resolvable, Target, TargetHost};
pub use clip::{Channel, Clip, CurveBundle, CurveProperty, WrapMode};
pub use config::Config;
pub use curve::{Curve, Keyframe};
pub use error::{AnimError, Result};
pub use ids::{EntityId, NodeId, TargetHandle};
pub use inputs::AnimatorCommand;
pub use outputs::{AnimatorEvent, Outputs, RemovalReason};
pub use playback::{FadeState, PlaybackState};
pub use rig::{Rig, RigNode};
pub use stored_clip::{parse_clip_json, parse_clip_library_json};
pub use system::{AnimationSystem, EntityEvent};
