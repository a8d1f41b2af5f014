//! Interpolation helpers:
//! - lerp_f32 (scalar blend)
//! - slerp_quat (spherical blend with shortest-arc correction)
//! - bezier (cubic Bezier by De Casteljau over any [`CurveValue`])

use crate::value::CurveValue;

/// Quaternions closer than this (by |dot|) fall back to normalized lerp.
const SLERP_PARALLEL_EPS: f32 = 1e-6;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Quaternion SLERP with shortest-arc correction.
/// If dot < 0, the second quaternion is negated so the blend takes the short path.
/// Nearly parallel inputs use a normalized lerp.
pub fn slerp_quat(a: [f32; 4], mut b: [f32; 4], t: f32) -> [f32; 4] {
    let mut d = dot4(a, b);
    if d < 0.0 {
        b = [-b[0], -b[1], -b[2], -b[3]];
        d = -d;
    }

    if d > 1.0 - SLERP_PARALLEL_EPS {
        return normalize4([
            lerp_f32(a[0], b[0], t),
            lerp_f32(a[1], b[1], t),
            lerp_f32(a[2], b[2], t),
            lerp_f32(a[3], b[3], t),
        ]);
    }

    let theta = d.min(1.0).acos();
    let inv_sin = theta.sin().recip();
    let wa = ((1.0 - t) * theta).sin() * inv_sin;
    let wb = (t * theta).sin() * inv_sin;
    [
        a[0] * wa + b[0] * wb,
        a[1] * wa + b[1] * wb,
        a[2] * wa + b[2] * wb,
        a[3] * wa + b[3] * wb,
    ]
}

/// Cubic Bezier through `p0..p3` at `alpha`, reduced by three interpolation passes.
pub fn bezier<T: CurveValue>(p0: &T, p1: &T, p2: &T, p3: &T, alpha: f32) -> T {
    let p01 = T::interpolate(p0, p1, alpha);
    let p12 = T::interpolate(p1, p2, alpha);
    let p23 = T::interpolate(p2, p3, alpha);
    let p012 = T::interpolate(&p01, &p12, alpha);
    let p123 = T::interpolate(&p12, &p23, alpha);
    T::interpolate(&p012, &p123, alpha)
}

/// Bezier segment between two keyed values with their facing tangents.
///
/// Both control points are built additively: `left + tangent_out * length / 3`
/// and `right + tangent_in * length / 3`.
pub fn bezier_segment<T: CurveValue>(
    left: &T,
    tangent_out: &T,
    tangent_in: &T,
    right: &T,
    alpha: f32,
    length: f32,
) -> T {
    let scale = length / 3.0;
    let left_handle = T::tangent(left, tangent_out, scale);
    let right_handle = T::tangent(right, tangent_in, scale);
    bezier(left, &left_handle, &right_handle, right, alpha)
}
