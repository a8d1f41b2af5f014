//! Keyframe kinds and the segment behaviour each one contributes to a curve.

use serde::{Deserialize, Serialize};

use crate::interp::bezier_segment;
use crate::value::CurveValue;

/// A keyed value on a curve, and how values between two neighbouring keys are formed.
pub trait Keyframe: Clone + Default {
    type Value: CurveValue;

    fn time(&self) -> f32;

    fn set_time(&mut self, time: f32);

    fn value(&self) -> &Self::Value;

    /// Value of the segment `left -> right` at normalized `alpha`.
    /// `length` is `right.time() - left.time()`.
    fn segment_value(left: &Self, right: &Self, alpha: f32, length: f32) -> Self::Value;

    /// Synthetic keyframe at `time` inside the segment `left -> right`.
    fn segment_key(left: &Self, right: &Self, time: f32, alpha: f32, length: f32) -> Self;
}

/// Keyframe that holds its value until the next key.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StepKeyframe<T> {
    pub time: f32,
    pub value: T,
}

impl<T> StepKeyframe<T> {
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

impl<T: CurveValue> Keyframe for StepKeyframe<T> {
    type Value = T;

    #[inline]
    fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    fn segment_value(left: &Self, _right: &Self, _alpha: f32, _length: f32) -> T {
        left.value.clone()
    }

    fn segment_key(left: &Self, _right: &Self, time: f32, _alpha: f32, _length: f32) -> Self {
        Self::new(time, left.value.clone())
    }
}

/// Keyframe blended linearly towards the next key.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LinearKeyframe<T> {
    pub time: f32,
    pub value: T,
}

impl<T> LinearKeyframe<T> {
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

impl<T: CurveValue> Keyframe for LinearKeyframe<T> {
    type Value = T;

    #[inline]
    fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    fn segment_value(left: &Self, right: &Self, alpha: f32, _length: f32) -> T {
        T::interpolate(&left.value, &right.value, alpha)
    }

    fn segment_key(left: &Self, right: &Self, time: f32, alpha: f32, length: f32) -> Self {
        Self::new(time, Self::segment_value(left, right, alpha, length))
    }
}

/// Keyframe with incoming and outgoing tangents, blended as a cubic Bezier.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BezierKeyframe<T> {
    pub time: f32,
    pub value: T,
    /// Rate of change arriving at this key.
    #[serde(default)]
    pub tangent_in: T,
    /// Rate of change leaving this key.
    #[serde(default)]
    pub tangent_out: T,
}

impl<T> BezierKeyframe<T> {
    pub fn new(time: f32, value: T, tangent_in: T, tangent_out: T) -> Self {
        Self {
            time,
            value,
            tangent_in,
            tangent_out,
        }
    }
}

impl<T: Default> BezierKeyframe<T> {
    /// Key with default (zero) tangents on both sides.
    pub fn flat(time: f32, value: T) -> Self {
        Self::new(time, value, T::default(), T::default())
    }
}

impl<T: CurveValue> Keyframe for BezierKeyframe<T> {
    type Value = T;

    #[inline]
    fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    fn segment_value(left: &Self, right: &Self, alpha: f32, length: f32) -> T {
        bezier_segment(
            &left.value,
            &left.tangent_out,
            &right.tangent_in,
            &right.value,
            alpha,
            length,
        )
    }

    /// The synthetic key keeps its neighbours' facing tangents.
    fn segment_key(left: &Self, right: &Self, time: f32, alpha: f32, length: f32) -> Self {
        Self::new(
            time,
            Self::segment_value(left, right, alpha, length),
            left.tangent_out.clone(),
            right.tangent_in.clone(),
        )
    }
}
