//! Baking API: sample a curve into uniformly spaced frames over a time window.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{BakingConfig, DEFAULT_FRAME_RATE, MAX_BAKED_FRAMES};
use crate::curve::Curve;
use crate::keyframe::Keyframe;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedCurve<T> {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    /// Sampled values at each frame, `start_time` first, `end_time` last.
    pub values: Vec<T>,
}

impl<T> BakedCurve<T> {
    /// Nearest baked frame to `time`, clamped to the baked window.
    pub fn sample(&self, time: f32) -> Option<&T> {
        let last = self.values.len().checked_sub(1)?;
        let frame = ((time - self.start_time) * self.frame_rate).round();
        let index = if frame.is_nan() || frame <= 0.0 {
            0
        } else {
            (frame as usize).min(last)
        };
        self.values.get(index)
    }
}

/// Bake `curve` using the provided config.
///
/// Without looping the window is clamped to the curve duration; with looping
/// it may extend past it and the samples repeat. Windows longer than
/// [`MAX_BAKED_FRAMES`] frames end early at the last frame that fits.
pub fn bake_curve<K: Keyframe>(curve: &Curve<K>, cfg: &BakingConfig) -> BakedCurve<K::Value> {
    let sr = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        warn!(
            "invalid bake frame rate {}; using {DEFAULT_FRAME_RATE}",
            cfg.frame_rate
        );
        DEFAULT_FRAME_RATE
    };
    let sr = sr.max(1.0);
    let start = if cfg.start_time.is_finite() {
        cfg.start_time.max(0.0)
    } else {
        0.0
    };
    let duration = curve.duration();
    let mut end = cfg.end_time.unwrap_or(duration);
    if !end.is_finite() {
        end = duration;
    }
    if !cfg.looping {
        end = end.min(duration);
    }
    end = end.max(start);
    let frames = (f64::from(end - start) * f64::from(sr)).ceil();
    let frame_count = if frames < (MAX_BAKED_FRAMES - 1) as f64 {
        frames as usize + 1 // inclusive of end
    } else {
        let capped = start + (MAX_BAKED_FRAMES - 1) as f32 / sr;
        warn!(
            "bake window [{start}, {end}] exceeds {MAX_BAKED_FRAMES} frames; ending at {capped}"
        );
        end = capped;
        MAX_BAKED_FRAMES
    };

    let values = (0..frame_count)
        .map(|f| {
            let t = (start + f as f32 / sr).min(end);
            curve.evaluate(t, cfg.looping)
        })
        .collect();

    BakedCurve {
        frame_rate: sr,
        start_time: start,
        end_time: end,
        values,
    }
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json<T: Serialize>(baked: &BakedCurve<T>) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
