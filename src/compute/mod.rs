//! Compute module - Numerical computation for Lenia.

mod engine;
mod error;
mod fft;
mod grid;
mod growth;
mod kernel;
mod sink;

pub use engine::*;
pub use error::*;
pub use fft::*;
pub use grid::*;
pub use growth::*;
pub use kernel::*;
pub use sink::*;
