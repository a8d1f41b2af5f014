//! Animatable value kinds for keyframe curves.
//!
//! Every curve value type implements [`CurveValue`]: a blend between two values
//! and a tangent control point derived from a value and its tangent. Scalars,
//! vectors, colors and Euler angles blend componentwise; [`Quat`] uses
//! spherical interpolation.

use serde::{Deserialize, Serialize};

use crate::interp::functions::{lerp_f32, slerp_quat};

/// Value that can be stored in keyframes and interpolated along a curve.
///
/// `Default` is the value an empty curve evaluates to.
pub trait CurveValue: Clone + Default {
    /// Blend from `a` to `b` by `alpha` in `[0, 1]`.
    fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self;

    /// Bezier control point for `value` pushed along `tangent`.
    ///
    /// `scale` is one third of the segment duration.
    fn tangent(value: &Self, tangent: &Self, scale: f32) -> Self;
}

impl CurveValue for f32 {
    #[inline]
    fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self {
        lerp_f32(*a, *b, alpha)
    }

    #[inline]
    fn tangent(value: &Self, tangent: &Self, scale: f32) -> Self {
        value + tangent * scale
    }
}

impl CurveValue for f64 {
    #[inline]
    fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self {
        a + (b - a) * f64::from(alpha)
    }

    #[inline]
    fn tangent(value: &Self, tangent: &Self, scale: f32) -> Self {
        value + tangent * f64::from(scale)
    }
}

/// Plain float vectors (`[f32; 2]`, `[f32; 3]`, `[f32; 4]`).
impl<const N: usize> CurveValue for [f32; N]
where
    [f32; N]: Default,
{
    #[inline]
    fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self {
        std::array::from_fn(|i| lerp_f32(a[i], b[i], alpha))
    }

    #[inline]
    fn tangent(value: &Self, tangent: &Self, scale: f32) -> Self {
        std::array::from_fn(|i| value[i] + tangent[i] * scale)
    }
}

/// RGBA color (linear by convention).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }
}

impl CurveValue for Color {
    #[inline]
    fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self {
        Color(<[f32; 4]>::interpolate(&a.0, &b.0, alpha))
    }

    #[inline]
    fn tangent(value: &Self, tangent: &Self, scale: f32) -> Self {
        Color(<[f32; 4]>::tangent(&value.0, &tangent.0, scale))
    }
}

/// Euler rotation in degrees, stored as (pitch, yaw, roll).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EulerAngles(pub [f32; 3]);

impl CurveValue for EulerAngles {
    #[inline]
    fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self {
        EulerAngles(<[f32; 3]>::interpolate(&a.0, &b.0, alpha))
    }

    #[inline]
    fn tangent(value: &Self, tangent: &Self, scale: f32) -> Self {
        EulerAngles(<[f32; 3]>::tangent(&value.0, &tangent.0, scale))
    }
}

/// Rotation quaternion (x, y, z, w).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Quat(pub [f32; 4]);

impl Quat {
    pub const IDENTITY: Quat = Quat([0.0, 0.0, 0.0, 1.0]);

    /// Rotation of `angle` radians around a unit `axis`.
    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Quat([axis[0] * s, axis[1] * s, axis[2] * s, c])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CurveValue for Quat {
    #[inline]
    fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self {
        Quat(slerp_quat(a.0, b.0, alpha))
    }

    /// Rotation tangents are orientation handles: the control point sits a
    /// third of the way from `value` towards `tangent`. `scale` is unused.
    #[inline]
    fn tangent(value: &Self, tangent: &Self, _scale: f32) -> Self {
        Quat(slerp_quat(value.0, tangent.0, 1.0 / 3.0))
    }
}
