//! Configuration for curve baking.

use serde::{Deserialize, Serialize};

/// Fallback sample rate when a config carries an unusable one.
pub const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Upper bound on the number of frames a single bake produces.
pub const MAX_BAKED_FRAMES: usize = 1 << 20;

/// How a curve is sampled into uniform frames.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
    /// Start time (seconds) in curve space.
    pub start_time: f32,
    /// End time (seconds) in curve space; if None, uses the curve duration.
    pub end_time: Option<f32>,
    /// Evaluate with looping time wrap instead of clamping.
    pub looping: bool,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start_time: 0.0,
            end_time: None,
            looping: false,
        }
    }
}
