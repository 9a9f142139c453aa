use thiserror::Error;

/// Result type alias for simulation setup operations.
pub type SimResult<T> = Result<T, SimError>;

/// Raised before a body list or viewport is accepted. Per-frame physics never fails.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// Mass must be finite and strictly positive.
    #[error("body {index} has invalid mass {mass}")]
    InvalidMass { index: usize, mass: f64 },

    /// Position or velocity contains NaN or infinity.
    #[error("body {index} has a non-finite {field}")]
    NonFiniteState { index: usize, field: &'static str },

    /// Two bodies share a position, leaving their force direction undefined.
    #[error("bodies {first} and {second} start at the same position")]
    CoincidentBodies { first: usize, second: usize },

    #[error("viewport {width}x{height} must have positive, finite dimensions")]
    InvalidViewport { width: f64, height: f64 },

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
}
