use thiserror::Error;

/// Invalid values found while validating a scenario
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("total time must be finite and non-negative, got {0}")]
    InvalidDuration(f64),

    #[error("total_time / dt gives {steps} steps, more than the {max} allowed")]
    TooManySteps { steps: f64, max: usize },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must have exactly 2 components, got {len}")]
    WrongDimension { name: &'static str, len: usize },

    #[error("{0} has a non-finite component")]
    NonFiniteVector(&'static str),

    #[error("degenerate epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    #[error("viewer frame_skip must be at least 1")]
    ZeroFrameSkip,
}
