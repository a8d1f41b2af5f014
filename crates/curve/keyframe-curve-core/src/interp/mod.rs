//! Interpolation primitives shared by all keyframe kinds.

pub mod functions;

pub use functions::{bezier, bezier_segment, lerp_f32, slerp_quat};
