use serde::{Deserialize, Serialize};

use crate::domain::error::{GeometryError, SceneError};
use crate::domain::settings::SimulationSettings;
use crate::rigid_body::{AnchorMode, Body, Controls, Point, Polygon};

/// JSON description of a world: settings plus its initial bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneBundle {
    #[serde(default)]
    pub settings: SimulationSettings,
    #[serde(default)]
    pub bodies: Vec<BodyDesc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDesc {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub anchor: AnchorMode,
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Local hit-box; the nominal rectangle when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_box: Option<Vec<[f64; 2]>>,
    /// UP, LEFT, DOWN, RIGHT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<[f64; 4]>,
}

fn default_weight() -> f64 {
    1.0
}

impl BodyDesc {
    pub fn build(&self) -> Result<Body, GeometryError> {
        let hit_box = match &self.hit_box {
            Some(raw) => Polygon::try_from(raw.clone())?,
            None => Polygon::rect(self.width, self.height)?,
        };
        let mut body = Body::new(self.x, self.y, self.width, self.height, hit_box, self.weight)?
            .with_anchor(self.anchor)
            .with_angle(self.angle)?;
        if let Some(speed) = self.speed {
            body = body.with_controls(Controls::with_speed(speed));
        }
        Ok(body)
    }

    /// Snapshot of a live body's authoritative state.
    pub fn from_body(body: &Body) -> Self {
        Self {
            x: body.pos.x,
            y: body.pos.y,
            width: body.width(),
            height: body.height(),
            angle: body.angle,
            anchor: body.anchor,
            weight: body.weight(),
            hit_box: Some(body.hit_box().points().iter().map(|&p: &Point| p.into()).collect()),
            speed: Some(body.controls.speed),
        }
    }
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Self = serde_json::from_str(json)?;
        scene.check_settings()?;
        Ok(scene)
    }

    /// JSON would write a non-finite setting as `null`, so it is refused
    /// instead.
    pub fn to_json(&self) -> Result<String, SceneError> {
        self.check_settings()?;
        Ok(serde_json::to_string(self)?)
    }

    fn check_settings(&self) -> Result<(), SceneError> {
        match self.settings.invalid_field() {
            Some((name, value)) => Err(SceneError::InvalidSetting { name, value }),
            None => Ok(()),
        }
    }

    /// Build every body, failing on the first invalid one.
    pub fn build_bodies(&self) -> Result<Vec<Body>, SceneError> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, desc)| desc.build().map_err(|source| SceneError::Body { index, source }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_uses_nominal_rectangle() {
        let scene = SceneBundle::from_json(r#"{"bodies":[{"x":1,"y":2,"width":10,"height":4}]}"#).unwrap();
        let bodies = scene.build_bodies().unwrap();
        assert_eq!(bodies.len(), 1);
        let b = &bodies[0];
        assert_eq!(b.weight(), 1.0);
        assert_eq!(b.anchor, AnchorMode::Origin);
        assert_eq!(b.hit_box(), &Polygon::rect(10.0, 4.0).unwrap());
        assert_eq!(b.bounds().max, Point::new(11.0, 6.0));
    }

    #[test]
    fn explicit_hit_box_and_anchor() {
        let json = r#"{
            "settings": {"penetrationEpsilon": 0.001},
            "bodies": [{
                "x": 0, "y": 0, "width": 2, "height": 2, "angle": 90,
                "anchor": "center", "weight": 3,
                "hitBox": [[0,0],[2,0],[1,2]],
                "speed": [1,2,3,4]
            }]
        }"#;
        let scene = SceneBundle::from_json(json).unwrap();
        assert_eq!(scene.settings.penetration_epsilon, 0.001);
        let b = &scene.build_bodies().unwrap()[0];
        assert_eq!(b.anchor, AnchorMode::Center);
        assert_eq!(b.hit_box().len(), 3);
        assert_eq!(b.controls.speed, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn reports_index_of_bad_body() {
        let json = r#"{"bodies":[
            {"x":0,"y":0,"width":1,"height":1},
            {"x":0,"y":0,"width":1,"height":1,"hitBox":[[0,0],[1,1]]}
        ]}"#;
        let err = SceneBundle::from_json(json).unwrap().build_bodies().unwrap_err();
        assert!(matches!(
            err,
            SceneError::Body { index: 1, source: GeometryError::TooFewVertices(2) }
        ));
        assert!(matches!(SceneBundle::from_json("{not json"), Err(SceneError::Json(_))));
    }

    #[test]
    fn invalid_settings_are_refused_both_ways() {
        let err = SceneBundle::from_json(r#"{"settings":{"penetrationEpsilon":-0.5}}"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidSetting { name: "penetration_epsilon", .. }));

        let mut scene = SceneBundle::default();
        assert!(scene.to_json().is_ok());
        scene.settings.penetration_epsilon = f64::NAN;
        assert!(matches!(scene.to_json(), Err(SceneError::InvalidSetting { name: "penetration_epsilon", .. })));
    }

    #[test]
    fn snapshot_rebuilds_same_geometry() {
        let body = Body::new_rect(3.0, 4.0, 6.0, 2.0, 2.5)
            .unwrap()
            .with_anchor(AnchorMode::Center)
            .with_angle(30.0)
            .unwrap();
        let rebuilt = BodyDesc::from_body(&body).build().unwrap();
        assert_eq!(rebuilt.moved_hit_box(), body.moved_hit_box());
        assert_eq!(rebuilt.weight(), 2.5);
    }
}
