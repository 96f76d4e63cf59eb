//! Scalar keyframe curves.
//!
//! Model:
//! - A Curve is an ordered list of Keyframes; insertion order is time order
//!   (callers append in non-decreasing time, nothing is sorted here).
//! - Evaluation is piecewise linear. Tangents are carried for format
//!   compatibility with importers but never influence the result.
//! - Queries before the first key hold the first value; queries at or after
//!   the last key hold the last value. There is no extrapolation.

use serde::{Deserialize, Serialize};

use crate::interp::functions::lerp_clamped;

/// A single key on a scalar curve. Time is in seconds of clip-local time.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    #[serde(default)]
    keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a curve from keys already in time order.
    pub fn from_keys(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Two-key convenience curve spanning `[time_start, time_end]`.
    ///
    /// Both keys hold `value_end`; `value_start` only feeds the shared tangent
    /// `(value_end - value_start) / (time_end - time_start)`. A zero-length span
    /// yields a NaN or infinite tangent which is stored as-is.
    pub fn linear(time_start: f32, value_start: f32, time_end: f32, value_end: f32) -> Self {
        let tangent = (value_end - value_start) / (time_end - time_start);
        let mut curve = Self::new();
        curve.add_key(time_start, value_end, tangent, tangent);
        curve.add_key(time_end, value_end, tangent, tangent);
        curve
    }

    /// Append a key. The caller keeps keys in non-decreasing time order.
    pub fn add_key(&mut self, time: f32, value: f32, in_tangent: f32, out_tangent: f32) {
        self.keys.push(Keyframe::new(time, value, in_tangent, out_tangent));
    }

    /// Evaluate the curve at `time`. Empty curves evaluate to `0.0`.
    pub fn evaluate(&self, time: f32) -> f32 {
        let Some(last) = self.keys.last() else {
            return 0.0;
        };
        if time >= last.time {
            return last.value;
        }

        // First key strictly after the query; none can only happen for NaN input.
        let Some(idx) = self.keys.iter().position(|k| k.time > time) else {
            return last.value;
        };
        if idx == 0 {
            return self.keys[0].value;
        }

        let k0 = &self.keys[idx - 1];
        let k1 = &self.keys[idx];
        let alpha = (time - k0.time).abs() / (k1.time - k0.time);
        lerp_clamped(k0.value, k1.value, alpha)
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn first_time(&self) -> Option<f32> {
        self.keys.first().map(|k| k.time)
    }

    pub fn last_time(&self) -> Option<f32> {
        self.keys.last().map(|k| k.time)
    }

    /// Check key times are finite and non-decreasing.
    pub(crate) fn check_key_order(&self) -> std::result::Result<(), String> {
        let mut last = -f32::INFINITY;
        for (i, k) in self.keys.iter().enumerate() {
            if !k.time.is_finite() {
                return Err(format!("key {i} has a non-finite time"));
            }
            if k.time < last {
                return Err(format!("key {i} time {} precedes previous key", k.time));
            }
            last = k.time;
        }
        Ok(())
    }
}
