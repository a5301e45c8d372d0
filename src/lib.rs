//! Lenia - continuous cellular automata on a toroidal grid.
//!
//! Every step convolves the state with a ring-shaped kernel (in the frequency
//! domain), passes the neighborhood density through a bell-shaped growth function
//! and adds the scaled result back, clamped to `[0, 1]`.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Parameters, configuration and seeding
//! - `compute`: Numerical computation (grid, kernel, FFT, growth, engine)
//!
//! # Example
//!
//! ```rust,no_run
//! use lenia::{
//!     compute::{LeniaEngine, SimulationStats},
//!     schema::{Pattern, Seed, SimulationConfig},
//! };
//!
//! let config = SimulationConfig::default();
//! let seed = Seed {
//!     pattern: Pattern::Orbium { center: (0.5, 0.5) },
//! };
//!
//! let mut engine = LeniaEngine::from_config(&config, &seed)?;
//! engine.run(100)?;
//!
//! let stats = SimulationStats::from_grid(engine.state());
//! println!("Total mass after 100 steps: {}", stats.total_mass);
//! # Ok::<(), lenia::compute::EngineError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{EngineError, FrameSink, Grid, LeniaEngine, SimulationStats};
pub use schema::{LeniaParameters, Pattern, Seed, SimulationConfig};
