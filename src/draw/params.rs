//! Shared style/behavior parameter mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single parameter value.
///
/// Untagged so that TOML/JSON config fragments deserialize naturally
/// (`color = "red"`, `linewidth = 2.0`, `fill = true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag (e.g. `fill`)
    Bool(bool),
    /// Integer option
    Int(i64),
    /// Floating-point option (e.g. `linewidth`, `rot_deg`)
    Float(f64),
    /// String option (e.g. `color`)
    Str(String),
}

impl ParamValue {
    /// Numeric view; integers widen to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// String view.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean view.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

/// Open mapping of named style/behavior options shared by all constructed
/// shapes (color, rotation, line width, ...).
///
/// The session hands copies of this mapping to constructors and to callers;
/// the live map is never aliased outside the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawParams {
    #[serde(flatten)]
    values: HashMap<String, ParamValue>,
}

impl DrawParams {
    /// Key for the stroke/fill color parameter.
    pub const COLOR: &'static str = "color";
    /// Key for the rotation parameter, in degrees.
    pub const ROT_DEG: &'static str = "rot_deg";
    /// Key for the control-point capture radius.
    pub const CAP_RADIUS: &'static str = "cap_radius";

    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces an option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Looks up an option.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Removes an option, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.remove(key)
    }

    /// Whether an option is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rotation in degrees; absent means unrotated.
    pub fn rotation(&self) -> f64 {
        self.get(Self::ROT_DEG).and_then(ParamValue::as_f64).unwrap_or(0.0)
    }

    /// Sets the rotation in degrees.
    pub fn set_rotation(&mut self, deg: f64) {
        self.set(Self::ROT_DEG, deg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut params = DrawParams::new();
        params.set(DrawParams::COLOR, "red");
        params.set("linewidth", 2.5);
        params.set("fill", true);

        assert_eq!(params.get("color").and_then(ParamValue::as_str), Some("red"));
        assert_eq!(params.get("linewidth").and_then(ParamValue::as_f64), Some(2.5));
        assert_eq!(params.get("fill").and_then(ParamValue::as_bool), Some(true));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn rotation_defaults_to_zero() {
        let mut params = DrawParams::new();
        assert_eq!(params.rotation(), 0.0);
        params.set_rotation(45.0);
        assert_eq!(params.rotation(), 45.0);
    }

    #[test]
    fn int_values_widen_to_float() {
        let mut params = DrawParams::new();
        params.set("linewidth", 3_i64);
        assert_eq!(params.get("linewidth").and_then(ParamValue::as_f64), Some(3.0));
    }

    #[test]
    fn clones_are_independent() {
        let mut original = DrawParams::new();
        original.set(DrawParams::COLOR, "blue");
        let mut copy = original.clone();
        copy.set(DrawParams::COLOR, "green");

        assert_eq!(original.get("color").and_then(ParamValue::as_str), Some("blue"));
    }
}
