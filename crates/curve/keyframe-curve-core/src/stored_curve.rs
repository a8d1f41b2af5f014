//! Curve JSON loading and saving.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::keyframe::Keyframe;

/// Public API: parse curve JSON into a validated [`Curve`].
///
/// Accepted shapes:
/// - a document `{ "name"?: string, "keyframes": [...] }`
/// - a bare keyframe array `[...]`
///
/// Keyframe objects use the serde layout of the target keyframe kind, e.g.
/// `{ "time", "value", "tangentIn", "tangentOut" }` for bezier keys.
/// Times must be finite and non-decreasing; nothing is re-sorted.
pub fn parse_curve_json<K>(s: &str) -> Result<Curve<K>, CurveError>
where
    K: Keyframe + DeserializeOwned,
{
    let stored: StoredCurve<K> = serde_json::from_str(s)?;
    let (name, keyframes) = match stored {
        StoredCurve::Document { name, keyframes } => (name, keyframes),
        StoredCurve::Keyframes(keyframes) => (None, keyframes),
    };
    let curve = Curve::try_from_keyframes(keyframes)?;
    debug!(
        "parsed curve '{}' with {} keyframes",
        name.as_deref().unwrap_or("<unnamed>"),
        curve.len()
    );
    Ok(curve)
}

/// Serialize a curve in the document shape read by [`parse_curve_json`].
pub fn curve_to_json<K>(curve: &Curve<K>) -> Result<String, CurveError>
where
    K: Keyframe + Serialize,
{
    Ok(serde_json::to_string(curve)?)
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredCurve<K> {
    Document {
        #[serde(default)]
        name: Option<String>,
        keyframes: Vec<K>,
    },
    Keyframes(Vec<K>),
}
