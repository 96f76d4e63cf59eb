//! Interpolation helpers.
//!
//! Curves evaluate with plain linear interpolation; fades use a clamped lerp.
//! Vector helpers operate on `[f32; 3]` triples (position / euler rotation).

pub mod functions;

pub use functions::{add_vec3, lerp_clamped, lerp_f32, radians_vec3, scale_vec3};
