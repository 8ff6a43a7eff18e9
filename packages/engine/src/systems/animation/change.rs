//! Typed attribute changes
//!
//! A `ChangeSet` names, per body field, whether it changes and how.
//! Absent fields are left alone.

use serde::{Deserialize, Serialize};

use crate::rigid_body::{AnchorMode, Polygon};

/// How a new value combines with the current one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOp {
    #[default]
    Replace,
    Add,
    Multiply,
}

#[inline]
pub fn combine_scalar(current: f64, op: FieldOp, value: f64) -> f64 {
    match op {
        FieldOp::Replace => value,
        FieldOp::Add => current + value,
        FieldOp::Multiply => current * value,
    }
}

/// Combine pairwise. Entries of `current` past the end of `values` keep
/// their value.
pub fn combine_elementwise(current: &mut [f64], op: FieldOp, values: &[f64]) {
    for (c, &v) in current.iter_mut().zip(values) {
        *c = combine_scalar(*c, op, v);
    }
}

/// Combine every entry with the same scalar.
pub fn combine_broadcast(current: &mut [f64], op: FieldOp, scalar: f64) {
    for c in current.iter_mut() {
        *c = combine_scalar(*c, op, scalar);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarChange {
    #[serde(default)]
    pub op: FieldOp,
    pub value: f64,
}

impl ScalarChange {
    pub fn apply(&self, current: f64) -> f64 {
        combine_scalar(current, self.op, self.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorValue {
    Elementwise([f64; 4]),
    Broadcast(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorChange {
    #[serde(default)]
    pub op: FieldOp,
    pub value: VectorValue,
}

impl VectorChange {
    pub fn apply(&self, current: &mut [f64]) {
        match self.value {
            VectorValue::Elementwise(ref values) => combine_elementwise(current, self.op, values),
            VectorValue::Broadcast(scalar) => combine_broadcast(current, self.op, scalar),
        }
    }
}

/// Scalar body fields a change-set can target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarField {
    X,
    Y,
    Angle,
    Width,
    Height,
    Weight,
}

/// JSON form: an object with only the changed fields, e.g.
/// `{"x": {"op": "add", "value": 3}, "anchor": "center"}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangeSet {
    pub x: Option<ScalarChange>,
    pub y: Option<ScalarChange>,
    pub angle: Option<ScalarChange>,
    pub width: Option<ScalarChange>,
    pub height: Option<ScalarChange>,
    pub weight: Option<ScalarChange>,
    pub speed: Option<VectorChange>,
    pub pressed: Option<[bool; 4]>,
    pub anchor: Option<AnchorMode>,
    pub hit_box: Option<Polygon>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn scalar(&self, field: ScalarField) -> Option<ScalarChange> {
        match field {
            ScalarField::X => self.x,
            ScalarField::Y => self.y,
            ScalarField::Angle => self.angle,
            ScalarField::Width => self.width,
            ScalarField::Height => self.height,
            ScalarField::Weight => self.weight,
        }
    }

    fn scalar_slot(&mut self, field: ScalarField) -> &mut Option<ScalarChange> {
        match field {
            ScalarField::X => &mut self.x,
            ScalarField::Y => &mut self.y,
            ScalarField::Angle => &mut self.angle,
            ScalarField::Width => &mut self.width,
            ScalarField::Height => &mut self.height,
            ScalarField::Weight => &mut self.weight,
        }
    }

    /// Set or fold into the change for `field`.
    ///
    /// With no existing change the new one is stored as-is. Otherwise the
    /// stored value is combined with `value` using `op`, keeping the
    /// stored op, so repeated `Add`s accumulate.
    pub fn combine_scalar(&mut self, field: ScalarField, op: FieldOp, value: f64) {
        let slot = self.scalar_slot(field);
        *slot = Some(match *slot {
            None => ScalarChange { op, value },
            Some(existing) => ScalarChange { op: existing.op, value: combine_scalar(existing.value, op, value) },
        });
    }

    pub fn with_scalar(mut self, field: ScalarField, op: FieldOp, value: f64) -> Self {
        *self.scalar_slot(field) = Some(ScalarChange { op, value });
        self
    }

    pub fn with_speed(mut self, op: FieldOp, value: VectorValue) -> Self {
        self.speed = Some(VectorChange { op, value });
        self
    }

    pub fn with_pressed(mut self, pressed: [bool; 4]) -> Self {
        self.pressed = Some(pressed);
        self
    }

    pub fn with_anchor(mut self, anchor: AnchorMode) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_hit_box(mut self, hit_box: Polygon) -> Self {
        self.hit_box = Some(hit_box);
        self
    }
}
