//! Keyframe Curve Core (engine-agnostic)
//!
//! Time-ordered keyframe storage for animatable values, with curve evaluation
//! (step, linear and cubic Bezier segments), looping/clamping time wrap,
//! trimming, time rescaling, JSON loading and uniform baking.
//!
//! ```
//! use keyframe_curve_core::{BezierCurve, BezierKeyframe};
//!
//! let curve = BezierCurve::from_keyframes(vec![
//!     BezierKeyframe::flat(0.0, 0.0_f32),
//!     BezierKeyframe::flat(1.0, 10.0_f32),
//! ]);
//! assert!((curve.evaluate(0.5, false) - 5.0).abs() < 1e-5);
//! ```

pub mod baking;
pub mod config;
pub mod curve;
pub mod error;
pub mod interp;
pub mod keyframe;
pub mod stored_curve;
pub mod value;

// Re-exports for consumers (editors, loaders)
pub use baking::{bake_curve, export_baked_json, BakedCurve};
pub use config::{BakingConfig, DEFAULT_FRAME_RATE, MAX_BAKED_FRAMES};
pub use curve::{wrap_time, BezierCurve, Curve, LinearCurve, StepCurve, TIME_EPSILON};
pub use error::CurveError;
pub use keyframe::{BezierKeyframe, Keyframe, LinearKeyframe, StepKeyframe};
pub use stored_curve::{curve_to_json, parse_curve_json};
pub use value::{Color, CurveValue, EulerAngles, Quat};
