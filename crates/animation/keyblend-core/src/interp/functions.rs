//! Interpolation helpers:
//! - lerp_f32 (unclamped scalar lerp)
//! - lerp_clamped (t clamped to [0,1], used by fades and curve segments)
//! - component-wise vec3 helpers for pose deltas

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
/// A NaN `t` propagates into the result.
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    lerp_f32(a, b, t.clamp(0.0, 1.0))
}

#[inline]
pub fn scale_vec3(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[inline]
pub fn add_vec3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Degrees to radians, component-wise.
#[inline]
pub fn radians_vec3(v: [f32; 3]) -> [f32; 3] {
    [v[0].to_radians(), v[1].to_radians(), v[2].to_radians()]
}
