//! Error types shared by the geometry, resolution and scene layers.

use crate::rigid_body::BodyId;

/// A polygon, body or change-set that would break the geometry invariants.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// Polygons are closed loops and need at least a triangle.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
    /// Weights are non-negative finite scalars.
    #[error("weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
    /// A scalar body field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    /// Nominal width and height must be finite and positive.
    #[error("dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}

/// A colliding pair that could not be separated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// Both bodies weigh nothing, so there is no way to split the correction.
    #[error("bodies {a} and {b} collide with zero total weight")]
    ZeroTotalWeight { a: BodyId, b: BodyId },
}

/// Failure of a world command.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WorldError {
    #[error("no body with id {0}")]
    UnknownBody(BodyId),
    /// A world setting outside its allowed range
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSetting { name: &'static str, value: f64 },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Failure to load a scene bundle.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSetting { name: &'static str, value: f64 },
    #[error("body {index} is invalid: {source}")]
    Body {
        index: usize,
        #[source]
        source: GeometryError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            GeometryError::TooFewVertices(2).to_string(),
            "polygon needs at least 3 vertices, got 2"
        );
        assert_eq!(
            ResolveError::ZeroTotalWeight { a: 3, b: 7 }.to_string(),
            "bodies 3 and 7 collide with zero total weight"
        );
        let err = SceneError::Body { index: 4, source: GeometryError::InvalidWeight(-1.0) };
        assert_eq!(err.to_string(), "body 4 is invalid: weight must be finite and non-negative, got -1");
    }
}
