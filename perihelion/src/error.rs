//! Error types for scenario construction

use thiserror::Error;

/// Result type for scenario construction
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Reasons a scenario configuration cannot be turned into a runnable system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("expected a central body and one or two planets, got {0} bodies")]
    BodyCount(usize),

    #[error("body '{name}': field '{field}' must have 3 components, got {len}")]
    Dimension {
        name: String,
        field: &'static str,
        len: usize,
    },

    #[error("body '{0}': planets need an initial velocity")]
    MissingVelocity(String),

    #[error("body '{name}': invalid mass {m}")]
    InvalidMass { name: String, m: f64 },

    #[error("bodies '{0}' and '{1}' start at the same position")]
    CoincidentBodies(String, String),

    #[error("parameter '{name}' is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
