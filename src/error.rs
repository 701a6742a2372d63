use thiserror::Error;

/// Top-level error type for the Triangberg growth engine.
#[derive(Debug, Error)]
pub enum TriangbergError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Growth(#[from] GrowthError),
}

/// Errors raised while validating drawing parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("branch edge {edge} does not exist; a triangle has edges 0, 1 and 2")]
    EdgeOutOfRange { edge: usize },

    #[error("parameter {parameter} must be finite")]
    NonFinite { parameter: &'static str },
}

/// Errors related to the vertex/triangle arena.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors raised during a growth step.
#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("candidate picker returned index {picked} but only {count} candidates exist")]
    PickOutOfRange { picked: usize, count: usize },

    #[error("degenerate triangle: {0}")]
    DegenerateTriangle(String),
}

/// Convenience type alias for results using [`TriangbergError`].
pub type Result<T> = std::result::Result<T, TriangbergError>;
