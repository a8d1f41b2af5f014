//! Keyframed curve storage and evaluation.
//!
//! Model:
//! - A curve owns keyframes sorted by time (non-decreasing; ties allowed).
//! - The evaluation domain is `[0, last.time]`. Times outside it are clamped,
//!   or wrapped by whole domain lengths when looping.
//! - The bracketing pair comes from a binary search over key times. Each
//!   keyframe kind decides how values inside a segment are formed.
//!
//! Sortedness is the owner's responsibility. Evaluating an unsorted curve gives
//! wrong values but never panics; [`Curve::sort`] and [`Curve::validate`] are
//! there for owners that mutate keys directly.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::keyframe::{BezierKeyframe, Keyframe, LinearKeyframe, StepKeyframe};

/// Times and lengths within this distance of each other are treated as equal.
pub const TIME_EPSILON: f32 = 1e-6;

pub type StepCurve<T> = Curve<StepKeyframe<T>>;
pub type LinearCurve<T> = Curve<LinearKeyframe<T>>;
pub type BezierCurve<T> = Curve<BezierKeyframe<T>>;

#[inline]
fn near_zero(v: f32) -> bool {
    v.abs() <= TIME_EPSILON
}

/// Map `time` into `[start, end]`.
///
/// A zero-length range collapses every time to 0. Otherwise times before
/// `start` (after `end`) are clamped to it, or shifted by whole multiples of
/// the range length when `looping`.
pub fn wrap_time(time: f32, start: f32, end: f32, looping: bool) -> f32 {
    let length = end - start;
    if near_zero(length) {
        return 0.0;
    }
    let mut time = time;
    if time < start {
        time = if looping {
            time + ((start - time) / length).ceil() * length
        } else {
            start
        };
    }
    if time > end {
        time = if looping {
            time - ((time - start) / length).floor() * length
        } else {
            end
        };
    }
    time
}

/// Normalized position of `time` in `left -> right`, and the segment length.
#[inline]
fn segment_alpha<K: Keyframe>(left: &K, right: &K, time: f32) -> (f32, f32) {
    let length = right.time() - left.time();
    let alpha = if near_zero(length) {
        0.0
    } else {
        (time - left.time()) / length
    };
    (alpha, length)
}

/// Ordered keyframes of one animatable value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve<K> {
    keyframes: Vec<K>,
}

impl<K> Default for Curve<K> {
    fn default() -> Self {
        Self {
            keyframes: Vec::new(),
        }
    }
}

impl<K: Keyframe> Curve<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap keyframes that the caller guarantees are sorted by time.
    pub fn from_keyframes(keyframes: Vec<K>) -> Self {
        Self { keyframes }
    }

    /// Wrap keyframes after checking times are finite and non-decreasing.
    pub fn try_from_keyframes(keyframes: Vec<K>) -> Result<Self, CurveError> {
        let curve = Self { keyframes };
        curve.validate()?;
        Ok(curve)
    }

    pub fn keyframes(&self) -> &[K] {
        &self.keyframes
    }

    /// Direct access for owners editing keys in place; re-sort afterwards if times moved.
    pub fn keyframes_mut(&mut self) -> &mut [K] {
        &mut self.keyframes
    }

    pub fn into_keyframes(self) -> Vec<K> {
        self.keyframes
    }

    /// Replace all keyframes (unchecked).
    pub fn set_keyframes(&mut self, keyframes: Vec<K>) {
        self.keyframes = keyframes;
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// First and last keyframe times.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => Some((first.time(), last.time())),
            _ => None,
        }
    }

    /// Length of the evaluation domain `[0, last.time]`.
    pub fn duration(&self) -> f32 {
        self.keyframes
            .last()
            .map(|k| k.time().max(0.0))
            .unwrap_or(0.0)
    }

    /// Check keyframe times are finite and non-decreasing.
    pub fn validate(&self) -> Result<(), CurveError> {
        let mut previous = f32::NEG_INFINITY;
        for (index, key) in self.keyframes.iter().enumerate() {
            let time = key.time();
            if !time.is_finite() {
                return Err(CurveError::NonFiniteTime { index, time });
            }
            if time < previous {
                return Err(CurveError::UnsortedKeyframes {
                    index,
                    previous,
                    time,
                });
            }
            previous = time;
        }
        Ok(())
    }

    /// Stable sort by time. Keys sharing a time keep their relative order.
    pub fn sort(&mut self) {
        let sorted = self
            .keyframes
            .windows(2)
            .all(|pair| pair[0].time() <= pair[1].time());
        if sorted {
            return;
        }
        warn!(
            "re-sorting {} keyframes that were out of time order",
            self.keyframes.len()
        );
        self.keyframes.sort_by(|a, b| a.time().total_cmp(&b.time()));
    }

    /// Insert `key` after every keyframe at or before its time; returns its index.
    pub fn add_keyframe(&mut self, key: K) -> usize {
        let time = key.time();
        let index = self.keyframes.partition_point(|k| k.time() <= time);
        self.keyframes.insert(index, key);
        trace!("added keyframe at time {time} (index {index})");
        index
    }

    pub fn remove_keyframe(&mut self, index: usize) -> Result<K, CurveError> {
        let len = self.keyframes.len();
        if index >= len {
            return Err(CurveError::IndexOutOfRange { index, len });
        }
        Ok(self.keyframes.remove(index))
    }

    /// Move the keyframe at `index` to `time`, keeping the curve ordered.
    /// Returns the keyframe's new index.
    pub fn set_keyframe_time(&mut self, index: usize, time: f32) -> Result<usize, CurveError> {
        if !time.is_finite() {
            return Err(CurveError::NonFiniteTime { index, time });
        }
        let mut key = self.remove_keyframe(index)?;
        key.set_time(time);
        Ok(self.add_keyframe(key))
    }

    /// Bracketing keyframe indices for `time`.
    ///
    /// `left` is the last key with `key.time <= time` (0 when there is none) and
    /// `right` the key after it, clamped to the last index. The two are equal
    /// outside the keyed range and on single-key curves. `time` is not wrapped;
    /// callers clamp it to the domain first.
    pub fn find_keys(&self, time: f32) -> (usize, usize) {
        let n = self.keyframes.len();
        if n == 0 {
            return (0, 0);
        }
        let upper = self.keyframes.partition_point(|k| k.time() <= time);
        (upper.saturating_sub(1), upper.min(n - 1))
    }

    /// Value of the curve at `time`. Empty curves yield the value type's default.
    pub fn evaluate(&self, time: f32, looping: bool) -> K::Value {
        let Some(last) = self.keyframes.last() else {
            return K::Value::default();
        };
        let time = wrap_time(time, 0.0, last.time(), looping);
        let (left_index, right_index) = self.find_keys(time);
        let left = &self.keyframes[left_index];
        if left_index == right_index {
            return left.value().clone();
        }
        let right = &self.keyframes[right_index];
        let (alpha, length) = segment_alpha(left, right, time);
        K::segment_value(left, right, alpha, length)
    }

    /// Synthetic keyframe at `time` (after wrapping), carrying the evaluated value.
    pub fn evaluate_key(&self, time: f32, looping: bool) -> K {
        let Some(last) = self.keyframes.last() else {
            return K::default();
        };
        let time = wrap_time(time, 0.0, last.time(), looping);
        let (left_index, right_index) = self.find_keys(time);
        let left = &self.keyframes[left_index];
        if left_index == right_index {
            let mut key = left.clone();
            key.set_time(time);
            return key;
        }
        let right = &self.keyframes[right_index];
        let (alpha, length) = segment_alpha(left, right, time);
        K::segment_key(left, right, time, alpha, length)
    }

    /// Cut the curve down to `[start, end]` and re-base it so `start` lands on 0.
    ///
    /// Boundary keys are synthesized with [`Curve::evaluate_key`] unless a key
    /// already sits on the boundary. An empty range empties the curve; a curve
    /// already inside the range is left untouched.
    pub fn trim(&mut self, start: f32, end: f32) {
        let (first_time, last_time) = match self.time_range() {
            Some(range) => range,
            None => return,
        };
        if end - start <= TIME_EPSILON {
            debug!("trim to empty range [{start}, {end}] clears {} keyframes", self.len());
            self.keyframes.clear();
            return;
        }
        if first_time >= start && last_time <= end {
            trace!("trim range [{start}, {end}] already covers the curve");
            return;
        }

        let mut start_key = self.evaluate_key(start, false);
        start_key.set_time(start);
        let mut end_key = self.evaluate_key(end, false);
        end_key.set_time(end);

        let original_len = self.keyframes.len();
        let mut keys = std::mem::take(&mut self.keyframes);

        let leading = keys.iter().take_while(|k| k.time() < start).count();
        keys.drain(..leading);
        if keys.first().map_or(true, |k| !near_zero(k.time() - start)) {
            keys.insert(0, start_key);
        }

        let trailing = keys.iter().rev().take_while(|k| k.time() > end).count();
        keys.truncate(keys.len() - trailing);
        if keys.last().map_or(true, |k| !near_zero(k.time() - end)) {
            keys.push(end_key);
        }

        if !near_zero(start) {
            for key in &mut keys {
                key.set_time(key.time() - start);
            }
        }

        debug!(
            "trimmed curve to [{start}, {end}]: {} -> {} keyframes",
            original_len,
            keys.len()
        );
        self.keyframes = keys;
    }

    /// `time = time * scale + offset` for every key, in place.
    ///
    /// Keys are not reordered; `scale` must be positive to keep the curve sorted.
    pub fn transform_time(&mut self, scale: f32, offset: f32) {
        for key in &mut self.keyframes {
            key.set_time(key.time() * scale + offset);
        }
    }
}
