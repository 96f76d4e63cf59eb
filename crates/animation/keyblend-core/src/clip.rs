//! Clip data model: curves grouped into per-path bundles with a wrap policy.
//! Clips are immutable once built and shared between animators as `Arc<Clip>`.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::{AnimError, Result};

const DEFAULT_FPS: f32 = 30.0;

/// Scalar output field of a transform target driven by a curve.
///
/// Scale and blend-shape channels are part of the data format but the sampler
/// does not write them.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Channel {
    LocalPositionX,
    LocalPositionY,
    LocalPositionZ,
    LocalRotationX,
    LocalRotationY,
    LocalRotationZ,
    LocalScaleX,
    LocalScaleY,
    LocalScaleZ,
    BlendShape,
}

/// What happens once clip-local time passes the clip length.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum WrapMode {
    /// Hold the last frame.
    #[default]
    Default,
    /// Hold the last frame, then drop the playback state.
    Once,
    Loop,
    PingPong,
    /// Hold the last frame forever.
    ClampForever,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurveProperty {
    pub channel: Channel,
    pub curve: Curve,
}

/// Curves driving a single target, addressed by a `/`-delimited path relative
/// to the animator's root node. The empty path addresses the root itself.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CurveBundle {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub properties: Vec<CurveProperty>,
}

impl CurveBundle {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_curve(mut self, channel: Channel, curve: Curve) -> Self {
        self.properties.push(CurveProperty { channel, curve });
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub name: String,
    /// Length in seconds.
    pub length: f32,
    #[serde(default = "default_fps")]
    pub fps: f32,
    #[serde(default)]
    pub wrap_mode: WrapMode,
    #[serde(default)]
    pub curve_bundles: Vec<CurveBundle>,
}

fn default_fps() -> f32 {
    DEFAULT_FPS
}

impl Clip {
    pub fn new(name: impl Into<String>, length: f32, wrap_mode: WrapMode) -> Self {
        Self {
            name: name.into(),
            length,
            fps: DEFAULT_FPS,
            wrap_mode,
            curve_bundles: Vec::new(),
        }
    }

    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_bundle(mut self, bundle: CurveBundle) -> Self {
        self.curve_bundles.push(bundle);
        self
    }

    /// Number of frames covered by the clip at its authored frame rate.
    pub fn frame_count(&self) -> u32 {
        (self.length * self.fps).round().max(0.0) as u32
    }

    /// Validate basic invariants (finite non-negative length, positive fps,
    /// finite non-decreasing key times).
    pub fn validate_basic(&self) -> Result<()> {
        let invalid = |reason: String| AnimError::InvalidClip {
            clip: self.name.clone(),
            reason,
        };
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(invalid(format!(
                "length must be finite and >= 0, got {}",
                self.length
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(invalid(format!(
                "fps must be finite and > 0, got {}",
                self.fps
            )));
        }
        for bundle in &self.curve_bundles {
            for prop in &bundle.properties {
                prop.curve.check_key_order().map_err(|e| {
                    invalid(format!("curve {:?} on '{}': {e}", prop.channel, bundle.path))
                })?;
            }
        }
        Ok(())
    }
}
