//! Input contracts for the animator.
//!
//! Transport commands in data form, for drivers that queue gameplay intent and
//! apply it before stepping.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum AnimatorCommand {
    Play {
        clip_index: usize,
        #[serde(default)]
        fade_length: f32,
    },
    Pause,
    Stop,
    SetPlayingTime {
        time: f32,
    },
}
