//! Playback state: one clip instance running on an animator.

use serde::{Deserialize, Serialize};

use crate::ids::TargetHandle;

/// Fade phase of a playback state.
///
/// Valid transitions: `In -> Normal` when the fade-in completes, `In/Normal ->
/// Out` when a newer clip crossfades in, and `Out -> removed`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FadeState {
    In,
    Normal,
    Out,
}

#[derive(Clone, Debug)]
pub struct PlaybackState {
    pub clip_index: usize,
    /// Animator time at which the clip started.
    pub play_start_time: f32,
    /// Animator time at which the current fade phase started.
    pub fade_start_time: f32,
    pub fade_length: f32,
    pub fade_state: FadeState,
    /// Weight captured when the current fade phase started.
    pub start_weight: f32,
    pub weight: f32,
    /// Clip-local time sampled on the last update.
    pub playing_time: f32,
    /// One slot per curve bundle, filled on the first sample.
    pub(crate) resolved_targets: Vec<Option<TargetHandle>>,
    pub(crate) targets_resolved: bool,
}

impl PlaybackState {
    /// State entering through a fade-in from zero weight.
    pub(crate) fn fading_in(clip_index: usize, now: f32, fade_length: f32) -> Self {
        Self {
            clip_index,
            play_start_time: now,
            fade_start_time: now,
            fade_length,
            fade_state: FadeState::In,
            start_weight: 0.0,
            weight: 0.0,
            playing_time: 0.0,
            resolved_targets: Vec::new(),
            targets_resolved: false,
        }
    }

    /// State starting at full weight (hard cut).
    pub(crate) fn immediate(clip_index: usize, now: f32) -> Self {
        Self {
            fade_length: 0.0,
            fade_state: FadeState::Normal,
            start_weight: 1.0,
            weight: 1.0,
            ..Self::fading_in(clip_index, now, 0.0)
        }
    }

    /// Switch into an out-fade starting from the current weight.
    pub(crate) fn begin_fade_out(&mut self, now: f32, fade_length: f32) {
        self.fade_state = FadeState::Out;
        self.start_weight = self.weight;
        self.fade_start_time = now;
        self.fade_length = fade_length;
    }

    /// Targets resolved for this state, one slot per bundle (empty until first sample).
    pub fn resolved_targets(&self) -> &[Option<TargetHandle>] {
        &self.resolved_targets
    }
}
