use serde::{Deserialize, Serialize};

use crate::animation::change::ChangeSet;
use crate::collision::{bounding_box, BoundingBox};
use crate::domain::error::GeometryError;

use super::controls::Controls;
use super::polygon::Polygon;
use super::vec2::{rotate_points_around_point, Point};

pub type BodyId = u32;

/// Pivot used when rotating the local hit-box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    /// Local origin `(0, 0)`
    #[default]
    Origin,
    /// Centre of the nominal `width` x `height` rectangle, whatever the
    /// hit-box shape is
    Center,
}

impl AnchorMode {
    pub fn pivot(self, width: f64, height: f64) -> Point {
        match self {
            AnchorMode::Origin => Point::zero(),
            AnchorMode::Center => Point::new(width / 2.0, height / 2.0),
        }
    }
}

/// Rotate a local hit-box by `degrees` about `pivot`.
pub fn rotate_hit_box(hit_box: &Polygon, pivot: Point, degrees: f64) -> Polygon {
    if degrees.rem_euclid(360.0) == 0.0 {
        return hit_box.clone();
    }
    Polygon::from_transformed(rotate_points_around_point(pivot, hit_box.points(), degrees.to_radians()))
}

fn check_finite(field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field, value })
    }
}

fn check_weight(weight: f64) -> Result<f64, GeometryError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(GeometryError::InvalidWeight(weight))
    }
}

fn check_dimensions(width: f64, height: f64) -> Result<(), GeometryError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimensions { width, height })
    }
}

/// Collidable game object
///
/// Position and angle are authoritative. The rotated hit-box, world-space
/// hit-box and bounding box are caches rebuilt from the unrotated local
/// hit-box by [`Body::refresh_geometry`], so rotation never drifts.
#[derive(Clone, Debug)]
pub struct Body {
    /// Assigned by the owning body system
    pub id: BodyId,
    /// World position of the local origin
    pub pos: Point,
    /// Rotation in degrees
    pub angle: f64,
    pub anchor: AnchorMode,
    pub controls: Controls,
    /// Inactive bodies are neither updated nor resolved
    pub active: bool,

    // === Shape ===
    width: f64,
    height: f64,
    hit_box: Polygon,
    weight: f64,

    // === Derived, rebuilt every update ===
    rotated_hit_box: Polygon,
    moved_hit_box: Polygon,
    bounds: BoundingBox,
}

impl Body {
    /// Create a body with an explicit local hit-box.
    ///
    /// `width`/`height` are the nominal dimensions used by
    /// [`AnchorMode::Center`]; the hit-box may be any convex shape.
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        hit_box: Polygon,
        weight: f64,
    ) -> Result<Self, GeometryError> {
        let pos = Point::new(check_finite("x", x)?, check_finite("y", y)?);
        check_dimensions(width, height)?;
        let weight = check_weight(weight)?;

        let mut body = Self {
            id: 0,
            pos,
            angle: 0.0,
            anchor: AnchorMode::Origin,
            controls: Controls::default(),
            active: true,
            width,
            height,
            rotated_hit_box: hit_box.clone(),
            moved_hit_box: hit_box.clone(),
            hit_box,
            weight,
            bounds: BoundingBox::default(),
        };
        body.refresh_geometry();
        Ok(body)
    }

    /// Create a body whose hit-box is its nominal rectangle.
    pub fn new_rect(x: f64, y: f64, width: f64, height: f64, weight: f64) -> Result<Self, GeometryError> {
        check_dimensions(width, height)?;
        Self::new(x, y, width, height, Polygon::rect(width, height)?, weight)
    }

    pub fn with_angle(mut self, degrees: f64) -> Result<Self, GeometryError> {
        self.angle = check_finite("angle", degrees)?;
        self.refresh_geometry();
        Ok(self)
    }

    pub fn with_anchor(mut self, anchor: AnchorMode) -> Self {
        self.anchor = anchor;
        self.refresh_geometry();
        self
    }

    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn weight(&self) -> f64 { self.weight }

    pub fn set_weight(&mut self, weight: f64) -> Result<(), GeometryError> {
        self.weight = check_weight(weight)?;
        Ok(())
    }

    pub fn set_position(&mut self, x: f64, y: f64) -> Result<(), GeometryError> {
        self.pos = Point::new(check_finite("x", x)?, check_finite("y", y)?);
        Ok(())
    }

    pub fn set_angle(&mut self, degrees: f64) -> Result<(), GeometryError> {
        self.angle = check_finite("angle", degrees)?;
        Ok(())
    }

    /// The authored, unrotated hit-box
    pub fn hit_box(&self) -> &Polygon { &self.hit_box }

    pub fn set_hit_box(&mut self, hit_box: Polygon) {
        self.hit_box = hit_box;
    }

    pub fn rotated_hit_box(&self) -> &Polygon { &self.rotated_hit_box }

    /// World-space hit-box; what collision and rendering read
    pub fn moved_hit_box(&self) -> &Polygon { &self.moved_hit_box }

    pub fn bounds(&self) -> BoundingBox { self.bounds }

    /// Current rotation pivot in local hit-box space
    pub fn pivot(&self) -> Point {
        self.anchor.pivot(self.width, self.height)
    }

    /// Apply pressed-control movement for one frame.
    pub fn apply_movement(&mut self) {
        self.pos += self.controls.displacement();
    }

    /// Rebuild rotated hit-box, world hit-box and bounding box from the
    /// local hit-box, position and angle.
    pub fn refresh_geometry(&mut self) {
        self.rotated_hit_box = rotate_hit_box(&self.hit_box, self.pivot(), self.angle);
        self.moved_hit_box = self.rotated_hit_box.translated(self.pos);
        self.bounds = bounding_box(self.moved_hit_box.points());
    }

    /// Per-frame update: movement, then cached geometry.
    pub fn update(&mut self) {
        self.apply_movement();
        self.refresh_geometry();
    }

    /// Apply a change-set atomically.
    ///
    /// All new values are computed and validated first; on error the body
    /// is left untouched. Cached geometry is rebuilt on the next update.
    pub fn apply_change(&mut self, change: &ChangeSet) -> Result<(), GeometryError> {
        let apply = |c: &Option<crate::animation::change::ScalarChange>, current: f64| {
            c.as_ref().map_or(current, |c| c.apply(current))
        };

        let x = check_finite("x", apply(&change.x, self.pos.x))?;
        let y = check_finite("y", apply(&change.y, self.pos.y))?;
        let angle = check_finite("angle", apply(&change.angle, self.angle))?;
        let width = apply(&change.width, self.width);
        let height = apply(&change.height, self.height);
        check_dimensions(width, height)?;
        let weight = check_weight(apply(&change.weight, self.weight))?;

        let mut speed = self.controls.speed;
        if let Some(sc) = &change.speed {
            sc.apply(&mut speed);
            if let Some(bad) = speed.iter().copied().find(|s| !s.is_finite()) {
                return Err(GeometryError::NonFinite { field: "speed", value: bad });
            }
        }

        self.pos = Point::new(x, y);
        self.angle = angle;
        self.width = width;
        self.height = height;
        self.weight = weight;
        self.controls.speed = speed;
        if let Some(pressed) = change.pressed {
            self.controls.pressed = pressed;
        }
        if let Some(anchor) = change.anchor {
            self.anchor = anchor;
        }
        if let Some(hit_box) = &change.hit_box {
            self.hit_box = hit_box.clone();
        }
        Ok(())
    }
}
