//! Core configuration for keyblend-core.

use serde::{Deserialize, Serialize};

/// Per-animator configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity hint for the playback state list.
    pub states_capacity: usize,

    /// Log (at debug level) curve bundles whose path does not resolve to a target.
    pub log_unresolved_paths: bool,

    /// Copied into new animators. Root motion is not extracted; the flag is carried only.
    pub root_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            states_capacity: 4,
            log_unresolved_paths: true,
            root_motion: false,
        }
    }
}
