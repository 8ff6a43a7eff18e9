use serde::{Deserialize, Serialize};

use crate::domain::error::GeometryError;

use super::vec2::Point;

/// Closed loop of at least three finite vertices.
///
/// The last vertex implicitly connects back to the first. Construction is
/// the only place vertices are checked, so every `Polygon` in circulation
/// is valid. Winding is whatever the author chose and is preserved by
/// rotation and translation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index });
        }
        Ok(Self { points })
    }

    /// Axis-aligned `width` x `height` rectangle with its top-left corner
    /// on the local origin.
    pub fn rect(width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(vec![
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ])
    }

    /// Wraps points produced by a rigid transform of an existing polygon.
    pub(crate) fn from_transformed(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 3);
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `edge[i] = vertex[i + 1] - vertex[i]`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = Point> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| self.points[(i + 1) % n] - self.points[i])
    }

    /// Mean of the vertices.
    pub fn centroid(&self) -> Point {
        let sum = self.points.iter().fold(Point::zero(), |acc, &p| acc + p);
        sum * (1.0 / self.points.len() as f64)
    }

    pub fn translated(&self, offset: Point) -> Self {
        Self::from_transformed(self.points.iter().map(|&p| p + offset).collect())
    }
}

impl TryFrom<Vec<[f64; 2]>> for Polygon {
    type Error = GeometryError;

    fn try_from(raw: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::new(raw.into_iter().map(Point::from).collect())
    }
}

impl From<Polygon> for Vec<[f64; 2]> {
    fn from(polygon: Polygon) -> Self {
        polygon.points.into_iter().map(<[f64; 2]>::from).collect()
    }
}
