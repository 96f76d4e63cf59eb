//! Per-state sampling steps used by `Animator::update`:
//! - wrap_local_time: map animator-relative time into clip-local time
//! - step_fade: advance the fade state machine and weight
//! - sample_bundle: evaluate a bundle's curves into position/rotation deltas

use crate::clip::{Channel, CurveBundle, WrapMode};
use crate::interp::functions::lerp_clamped;
use crate::playback::{FadeState, PlaybackState};

/// C-style floating remainder (result carries the sign of `a`).
#[inline]
fn fmod(a: f32, b: f32) -> f32 {
    a % b
}

/// Clip-local time after applying the wrap policy, and whether a `Once` clip
/// has run out and its state should be removed.
///
/// Zero-length clips sample at `0.0` under `Loop`/`PingPong`.
pub fn wrap_local_time(local: f32, length: f32, mode: WrapMode) -> (f32, bool) {
    match mode {
        WrapMode::Once => {
            if local >= length {
                (length, true)
            } else {
                (local, false)
            }
        }
        WrapMode::Loop => {
            if length <= 0.0 {
                return (0.0, false);
            }
            (fmod(local, length), false)
        }
        WrapMode::PingPong => {
            if length <= 0.0 {
                return (0.0, false);
            }
            let cycle = (local / length).floor();
            if cycle.rem_euclid(2.0) >= 1.0 {
                (length - fmod(local, length), false)
            } else {
                (fmod(local, length), false)
            }
        }
        WrapMode::Default | WrapMode::ClampForever => (local.min(length), false),
    }
}

/// Outcome of one fade step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FadeStep {
    Continue,
    /// `In -> Normal` happened this step.
    FadeInCompleted,
    /// Out-fade finished; the state must be removed.
    FadedOut,
}

/// Advance a state's fade at animator time `now`. A pending stop completes
/// any fade immediately.
///
/// Out-fades interpolate from `start_weight` toward `1.0`, the same target as
/// fade-ins; the weight only drops to `0.0` once the fade length elapses.
pub fn step_fade(state: &mut PlaybackState, now: f32, stopped: bool) -> FadeStep {
    let fade_time = now - state.fade_start_time;
    match state.fade_state {
        FadeState::In => {
            if !stopped && fade_time < state.fade_length {
                state.weight = lerp_clamped(state.start_weight, 1.0, fade_time / state.fade_length);
                FadeStep::Continue
            } else {
                state.fade_state = FadeState::Normal;
                state.fade_start_time = now;
                state.start_weight = 1.0;
                state.weight = 1.0;
                FadeStep::FadeInCompleted
            }
        }
        FadeState::Normal => FadeStep::Continue,
        FadeState::Out => {
            if stopped || fade_time >= state.fade_length {
                state.weight = 0.0;
                FadeStep::FadedOut
            } else {
                state.weight = lerp_clamped(state.start_weight, 1.0, fade_time / state.fade_length);
                FadeStep::Continue
            }
        }
    }
}

/// Unweighted channel sums for one bundle. Rotation is in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PoseDelta {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

/// Evaluate every property of `bundle` at clip-local time `t`.
/// Scale and blend-shape channels are not applied.
pub fn sample_bundle(bundle: &CurveBundle, t: f32) -> PoseDelta {
    let mut delta = PoseDelta::default();
    for prop in &bundle.properties {
        let slot = match prop.channel {
            Channel::LocalPositionX => &mut delta.position[0],
            Channel::LocalPositionY => &mut delta.position[1],
            Channel::LocalPositionZ => &mut delta.position[2],
            Channel::LocalRotationX => &mut delta.rotation[0],
            Channel::LocalRotationY => &mut delta.rotation[1],
            Channel::LocalRotationZ => &mut delta.rotation[2],
            Channel::LocalScaleX
            | Channel::LocalScaleY
            | Channel::LocalScaleZ
            | Channel::BlendShape => continue,
        };
        *slot += prop.curve.evaluate(t);
    }
    delta
}
