//! Animator: transport controls and the per-frame sample/blend pass.
//!
//! Methods:
//! - add_clip, play, pause, stop, set_playing_time (transport)
//! - update (advance time -> wrap -> fade -> sample -> blend -> prune)

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::accumulate::{blend_into, BlendMode};
use crate::binding::{resolve_path, TargetHost};
use crate::clip::Clip;
use crate::config::Config;
use crate::error::{AnimError, Result};
use crate::ids::NodeId;
use crate::inputs::AnimatorCommand;
use crate::outputs::{AnimatorEvent, Outputs, RemovalReason};
use crate::playback::PlaybackState;
use crate::sampling::{sample_bundle, step_fade, wrap_local_time, FadeStep};

/// `seek_to` value meaning "no seek pending".
const NO_SEEK: f32 = -1.0;

/// Per-entity playback controller.
///
/// `states` is kept oldest-to-newest and never reordered; the last entry is
/// the foreground state answering current-clip and current-time queries.
#[derive(Debug, Clone)]
pub struct Animator {
    cfg: Config,
    time: f32,
    seek_to: f32,
    paused: bool,
    stopped: bool,
    started: bool,
    root_motion: bool,
    stop_pending: bool,
    states: Vec<PlaybackState>,
    clips: Vec<Arc<Clip>>,

    // Per-update outputs
    outputs: Outputs,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Animator {
    pub fn new(cfg: Config) -> Self {
        Self {
            time: 0.0,
            seek_to: NO_SEEK,
            paused: false,
            stopped: false,
            started: false,
            root_motion: cfg.root_motion,
            stop_pending: false,
            states: Vec::with_capacity(cfg.states_capacity),
            clips: Vec::new(),
            outputs: Outputs::default(),
            cfg,
        }
    }

    /// Register a shared clip, returning its index for `play()`.
    pub fn add_clip(&mut self, clip: Arc<Clip>) -> usize {
        self.clips.push(clip);
        self.clips.len() - 1
    }

    pub fn clips(&self) -> &[Arc<Clip>] {
        &self.clips
    }

    pub fn clip_index_of(&self, name: &str) -> Option<usize> {
        self.clips.iter().position(|c| c.name == name)
    }

    pub fn clip_length(&self, clip_index: usize) -> Option<f32> {
        self.clips.get(clip_index).map(|c| c.length)
    }

    /// Start `clip_index`, crossfading over `fade_length` seconds when other
    /// states are active, or hard-cutting when `fade_length <= 0`.
    ///
    /// Calling this while paused on the clip that is already in the foreground
    /// only resumes playback.
    pub fn play(&mut self, clip_index: usize, fade_length: f32) -> Result<()> {
        if clip_index >= self.clips.len() {
            warn!(
                "play: clip index {clip_index} out of range ({} clips)",
                self.clips.len()
            );
            return Err(AnimError::InvalidClipIndex {
                index: clip_index,
                len: self.clips.len(),
            });
        }

        self.started = true;
        if self.paused && self.current_clip_index() == Some(clip_index) {
            self.paused = false;
            return Ok(());
        }

        // Nothing to blend from: the first clip always starts at full weight.
        let fade_length = if self.states.is_empty() {
            0.0
        } else {
            fade_length
        };

        let now = self.time;
        if fade_length > 0.0 {
            for state in &mut self.states {
                state.begin_fade_out(now, fade_length);
            }
            self.states.push(PlaybackState::fading_in(clip_index, now, fade_length));
        } else {
            self.states.clear();
            self.states.push(PlaybackState::immediate(clip_index, now));
        }
        debug!(
            "play: clip '{}' at t={now} (fade {fade_length}s, {} active states)",
            self.clips[clip_index].name,
            self.states.len()
        );

        self.paused = false;
        self.stopped = false;
        self.stop_pending = false;
        Ok(())
    }

    /// Request a stop. States are cleared by the next `update()`.
    pub fn stop(&mut self) {
        self.paused = false;
        self.stopped = true;
        self.stop_pending = true;
    }

    /// Freeze animator time. Ignored while a stop is in effect.
    pub fn pause(&mut self) {
        if !self.stopped {
            self.paused = true;
        }
    }

    /// Seek the foreground clip to `time` (clamped to its length). The seek is
    /// applied by the next `update()` and shifts every active state alike.
    pub fn set_playing_time(&mut self, time: f32) {
        let Some(current) = self.states.last() else {
            return;
        };
        let length = self.clip_length(current.clip_index).unwrap_or(0.0);
        let time = time.max(0.0).min(length);
        self.seek_to = self.time + (time - current.playing_time);
    }

    /// Apply a transport command in data form.
    pub fn apply(&mut self, cmd: AnimatorCommand) -> Result<()> {
        match cmd {
            AnimatorCommand::Play {
                clip_index,
                fade_length,
            } => self.play(clip_index, fade_length)?,
            AnimatorCommand::Pause => self.pause(),
            AnimatorCommand::Stop => self.stop(),
            AnimatorCommand::SetPlayingTime { time } => self.set_playing_time(time),
        }
        Ok(())
    }

    /// Advance by `dt` and write the blended pose of every active state into
    /// the targets reachable from `root`.
    pub fn update<H: TargetHost + ?Sized>(
        &mut self,
        dt: f32,
        host: &mut H,
        root: NodeId,
    ) -> &Outputs {
        self.outputs.clear();
        self.advance_time(dt);

        let now = self.time;
        let stopped = self.stopped;
        let log_unresolved = self.cfg.log_unresolved_paths;

        let mut i = 0;
        while i < self.states.len() {
            let first_state = i == 0;
            let state = &mut self.states[i];
            let Some(clip) = self.clips.get(state.clip_index).cloned() else {
                i += 1;
                continue;
            };

            let (local, finished) =
                wrap_local_time(now - state.play_start_time, clip.length, clip.wrap_mode);
            state.playing_time = if stopped { 0.0 } else { local };
            let mut removal = finished.then_some(RemovalReason::Finished);

            match step_fade(state, now, stopped) {
                FadeStep::Continue => {}
                FadeStep::FadeInCompleted => {
                    debug!("fade-in of '{}' completed at t={now}", clip.name);
                    self.outputs.push_event(AnimatorEvent::FadeInCompleted {
                        clip_index: state.clip_index,
                    });
                }
                FadeStep::FadedOut => removal = Some(RemovalReason::FadedOut),
            }

            sample_state(state, &clip, host, root, first_state, log_unresolved);

            match removal {
                Some(reason) => {
                    let removed = self.states.remove(i);
                    debug!("state for '{}' removed ({reason:?})", clip.name);
                    self.outputs.push_event(AnimatorEvent::StateRemoved {
                        clip_index: removed.clip_index,
                        reason,
                    });
                    if self.states.is_empty() {
                        self.paused = true;
                    }
                }
                None => i += 1,
            }
        }

        if self.stopped {
            let cleared = self.states.len();
            self.states.clear();
            if self.stop_pending {
                debug!("stop: cleared {cleared} states");
                self.outputs.push_event(AnimatorEvent::Stopped { cleared });
                self.stop_pending = false;
            }
        }

        &self.outputs
    }

    fn advance_time(&mut self, dt: f32) {
        if self.seek_to >= 0.0 {
            trace!("seek: t={} -> {}", self.time, self.seek_to);
            self.time = self.seek_to;
            self.seek_to = NO_SEEK;
        } else if !self.paused {
            self.time += dt;
            trace!("advance: t={}", self.time);
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Whether `play()` has ever succeeded on this animator.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_playing(&self) -> bool {
        !self.paused && !self.states.is_empty()
    }

    pub fn states(&self) -> &[PlaybackState] {
        &self.states
    }

    pub fn current_clip_index(&self) -> Option<usize> {
        self.states.last().map(|s| s.clip_index)
    }

    pub fn current_clip(&self) -> Option<&Arc<Clip>> {
        self.current_clip_index().and_then(|i| self.clips.get(i))
    }

    pub fn current_playing_time(&self) -> Option<f32> {
        self.states.last().map(|s| s.playing_time)
    }

    /// Pending seek target in animator time, if any.
    pub fn pending_seek(&self) -> Option<f32> {
        (self.seek_to >= 0.0).then_some(self.seek_to)
    }

    pub fn root_motion(&self) -> bool {
        self.root_motion
    }

    pub fn set_root_motion(&mut self, enabled: bool) {
        self.root_motion = enabled;
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }
}

/// Sample one state's bundles and blend them into their targets. Targets are
/// resolved on the first call for a state; unresolved bundles stay skipped.
fn sample_state<H: TargetHost + ?Sized>(
    state: &mut PlaybackState,
    clip: &Clip,
    host: &mut H,
    root: NodeId,
    first_state: bool,
    log_unresolved: bool,
) {
    if clip.curve_bundles.is_empty() {
        return;
    }

    if !state.targets_resolved {
        state.resolved_targets = clip
            .curve_bundles
            .iter()
            .map(|bundle| {
                let handle = resolve_path(&*host, root, &bundle.path);
                if handle.is_none() && log_unresolved {
                    debug!(
                        "clip '{}': path '{}' did not resolve; bundle skipped",
                        clip.name, bundle.path
                    );
                }
                handle
            })
            .collect();
        state.targets_resolved = true;
    }

    let mode = BlendMode::for_state(first_state);
    for (bundle, handle) in clip.curve_bundles.iter().zip(&state.resolved_targets) {
        let Some(handle) = handle else {
            continue;
        };
        let Some(target) = host.target_mut(*handle) else {
            continue;
        };
        let delta = sample_bundle(bundle, state.playing_time);
        blend_into(target, &delta, state.weight, mode);
    }
}
