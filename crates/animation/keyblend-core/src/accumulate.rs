//! Writing weighted bundle deltas into targets.
//!
//! The first state in an animator's list initializes the pose (assignment);
//! every later state adds its weighted contribution on top of what earlier
//! states wrote during the same update. Position and orientation are both
//! written, including axes no curve drives.

use crate::binding::Target;
use crate::interp::functions::{add_vec3, radians_vec3, scale_vec3};
use crate::sampling::PoseDelta;

/// Blend policy for one state's contribution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Overwrite the target pose.
    Assign,
    /// Accumulate onto the target's current pose.
    Add,
}

impl BlendMode {
    #[inline]
    pub fn for_state(first_state: bool) -> Self {
        if first_state {
            BlendMode::Assign
        } else {
            BlendMode::Add
        }
    }
}

/// Apply `delta` scaled by `weight` to `target`. Rotation deltas are degrees.
pub fn blend_into(target: &mut dyn Target, delta: &PoseDelta, weight: f32, mode: BlendMode) {
    match mode {
        BlendMode::Assign => {
            target.set_local_position(scale_vec3(delta.position, weight));
            target.set_local_orientation(scale_vec3(radians_vec3(delta.rotation), weight));
        }
        BlendMode::Add => {
            let position = add_vec3(target.local_position(), scale_vec3(delta.position, weight));
            target.set_local_position(position);
            let orientation = add_vec3(
                target.local_orientation(),
                radians_vec3(scale_vec3(delta.rotation, weight)),
            );
            target.set_local_orientation(orientation);
        }
    }
}
