//! JSON hand-off for clip data produced by external importers.
//!
//! The JSON shape is the serde form of [`Clip`]:
//! `{ "name", "length", "fps"?, "wrapMode"?, "curveBundles"?: [{ "path", "properties": [{ "channel", "curve": { "keys": [...] } }] }] }`
//! with keys as `{ "time", "value", "inTangent"?, "outTangent"? }`.

use log::warn;
use serde::Deserialize;

use crate::clip::Clip;
use crate::error::{AnimError, Result};

/// Parse and validate a single clip.
pub fn parse_clip_json(s: &str) -> Result<Clip> {
    let clip: Clip = serde_json::from_str(s).map_err(|e| AnimError::ClipParse(e.to_string()))?;
    validate(clip)
}

#[derive(Deserialize)]
struct ClipLibrary {
    clips: Vec<Clip>,
}

/// Parse and validate a `{ "clips": [...] }` document. The first invalid clip
/// fails the whole document.
pub fn parse_clip_library_json(s: &str) -> Result<Vec<Clip>> {
    let lib: ClipLibrary =
        serde_json::from_str(s).map_err(|e| AnimError::ClipParse(e.to_string()))?;
    lib.clips.into_iter().map(validate).collect()
}

fn validate(clip: Clip) -> Result<Clip> {
    if let Err(e) = clip.validate_basic() {
        warn!("rejecting clip '{}': {e}", clip.name);
        return Err(e);
    }
    Ok(clip)
}
