//! Engine errors.

use crate::schema::ConfigError;

/// Errors raised by engine construction, state replacement and stepping.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Kernel of radius {radius} has no weight on a {width}x{height} grid")]
    DegenerateKernel {
        radius: f64,
        width: usize,
        height: usize,
    },
    #[error(
        "State shape {actual_width}x{actual_height} does not match engine shape {width}x{height}"
    )]
    ShapeMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
    #[error("Buffer of {len} values cannot hold a {width}x{height} grid")]
    BufferLength {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("Rows have differing lengths")]
    RaggedRows,
    #[error("Non-finite value {value} at cell ({x}, {y}) during step {step}")]
    NonFinite {
        x: usize,
        y: usize,
        value: f64,
        step: u64,
    },
}
