//! Output contracts from the animator.
//!
//! Pose writes go straight into host targets; Outputs only carries the
//! discrete events of the last update so drivers can react to them.

use serde::{Deserialize, Serialize};

/// Why a playback state left the list.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RemovalReason {
    /// A `Once` clip reached its end.
    Finished,
    /// An out-fade completed.
    FadedOut,
}

/// Discrete signals emitted during an update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum AnimatorEvent {
    FadeInCompleted {
        clip_index: usize,
    },
    StateRemoved {
        clip_index: usize,
        reason: RemovalReason,
    },
    /// A pending stop cleared the state list.
    Stopped {
        cleared: usize,
    },
}

/// Outputs returned by `Animator::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<AnimatorEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: AnimatorEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
