//! Lenia engine - owns the grid and advances it one step at a time.

use std::f64::consts::PI;

use log::{debug, trace, warn};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::schema::{LeniaParameters, Seed, SimulationConfig, validate_dimensions};

use super::{
    EngineError, FftConvolver, FftScratch, FrameSink, Grid, Kernel, advance, growth, wrap_coord,
};

/// Lenia simulation engine.
///
/// The kernel spectrum is computed once at construction, so the kernel radius is
/// fixed for the lifetime of an engine.
pub struct LeniaEngine {
    parameters: LeniaParameters,
    state: Grid,
    initial_state: Grid,
    kernel: Kernel,
    kernel_spectrum: Vec<Complex<f64>>,
    convolver: FftConvolver,
    scratch: FftScratch,
    /// Neighborhood potential `u` from the last convolution.
    potential: Vec<f64>,
    /// Pre-allocated buffer for the next state (swapped in each step).
    next: Grid,
    steps: u64,
}

impl LeniaEngine {
    /// Create an engine.
    ///
    /// Without an initial state the grid is filled with uniform noise from an
    /// entropy-seeded generator; use [`LeniaEngine::with_rng`] for reproducible runs.
    pub fn new(
        width: usize,
        height: usize,
        initial_state: Option<Grid>,
        parameters: LeniaParameters,
    ) -> Result<Self, EngineError> {
        match initial_state {
            Some(state) => Self::build(width, height, state, parameters),
            None => Self::with_rng(width, height, parameters, &mut StdRng::from_entropy()),
        }
    }

    /// Create an engine whose initial state is uniform noise drawn from `rng`.
    pub fn with_rng<R: Rng>(
        width: usize,
        height: usize,
        parameters: LeniaParameters,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        validate_dimensions(width, height)?;
        Self::build(width, height, Grid::random(width, height, rng), parameters)
    }

    /// Create an engine from a configuration and seed pattern.
    pub fn from_config(config: &SimulationConfig, seed: &Seed) -> Result<Self, EngineError> {
        config.validate()?;
        let state = seed.generate(config.width, config.height);
        Self::build(config.width, config.height, state, config.parameters)
    }

    fn build(
        width: usize,
        height: usize,
        state: Grid,
        parameters: LeniaParameters,
    ) -> Result<Self, EngineError> {
        validate_dimensions(width, height)?;
        parameters.validate()?;
        check_shape(width, height, &state)?;

        let kernel = Kernel::new(width, height, parameters.radius)?;
        let convolver = FftConvolver::new(width, height);
        let kernel_spectrum = convolver.fft2d(&kernel.shifted());
        let scratch = FftScratch::new(&convolver);

        debug!(
            "Created {}x{} engine: frequency={}, R={}, m={}, s={}",
            width, height, parameters.frequency, parameters.radius, parameters.mu, parameters.sigma
        );

        Ok(Self {
            parameters,
            initial_state: state.clone(),
            state,
            kernel,
            kernel_spectrum,
            convolver,
            scratch,
            potential: vec![0.0; width * height],
            next: Grid::zeros(width, height),
            steps: 0,
        })
    }

    /// Perform one simulation step.
    ///
    /// On a non-finite result the step is rejected and the state is left untouched.
    pub fn step(&mut self) -> Result<(), EngineError> {
        let LeniaParameters {
            frequency,
            mu,
            sigma,
            ..
        } = self.parameters;

        // 1. Convolution: u = K * state
        self.convolver.convolve_spectrum_into(
            self.state.as_slice(),
            &self.kernel_spectrum,
            &mut self.scratch,
            &mut self.potential,
        );

        // 2. Growth and clamped update into the next buffer
        #[cfg(not(target_arch = "wasm32"))]
        self.next
            .as_mut_slice()
            .par_iter_mut()
            .zip(self.state.as_slice().par_iter())
            .zip(self.potential.par_iter())
            .for_each(|((next, &current), &u)| {
                *next = advance(current, u, frequency, mu, sigma);
            });

        #[cfg(target_arch = "wasm32")]
        for ((next, &current), &u) in self
            .next
            .as_mut_slice()
            .iter_mut()
            .zip(self.state.as_slice())
            .zip(&self.potential)
        {
            *next = advance(current, u, frequency, mu, sigma);
        }

        // clamp() passes NaN through, so one scan covers u, growth and the update
        if let Some(idx) = self.next.as_slice().iter().position(|v| !v.is_finite()) {
            let width = self.width();
            let value = self.next.as_slice()[idx];
            warn!(
                "Rejecting step {}: non-finite value {} (u = {})",
                self.steps + 1,
                value,
                self.potential[idx]
            );
            return Err(EngineError::NonFinite {
                x: idx % width,
                y: idx / width,
                value,
                step: self.steps + 1,
            });
        }

        std::mem::swap(&mut self.state, &mut self.next);
        self.steps += 1;
        trace!("Step {}: mass={:.6}", self.steps, self.state.total_mass());
        Ok(())
    }

    /// Run simulation for specified number of steps.
    pub fn run(&mut self, steps: u64) -> Result<(), EngineError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    /// Run `steps` steps, handing every new frame to `sink`.
    pub fn run_with_sink<S: FrameSink>(
        &mut self,
        steps: u64,
        sink: &mut S,
    ) -> Result<(), EngineError> {
        for _ in 0..steps {
            self.step()?;
            sink.present(self.steps, &self.state);
        }
        Ok(())
    }

    /// Whether the caller should keep stepping. There is no convergence detection.
    pub fn needs_update(&self) -> bool {
        true
    }

    /// Replace the state and make it the new reset target.
    pub fn set_state(&mut self, state: Grid) -> Result<(), EngineError> {
        check_shape(self.width(), self.height(), &state)?;
        self.initial_state.clone_from(&state);
        self.state = state;
        self.steps = 0;
        debug!("State replaced, mass={:.6}", self.state.total_mass());
        Ok(())
    }

    /// Restore the state captured at construction or by the last `set_state`.
    pub fn reset(&mut self) {
        self.state.clone_from(&self.initial_state);
        self.steps = 0;
        debug!("State reset, mass={:.6}", self.state.total_mass());
    }

    /// Zero every cell. The reset target is unchanged.
    pub fn clear(&mut self) {
        self.state.fill(0.0);
    }

    /// Refill the state with uniform noise. The reset target is unchanged.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.state = Grid::random(self.width(), self.height(), rng);
    }

    /// Paint a soft disc of `radius` cells centred at `(x, y)`, wrapping at the edges.
    ///
    /// Cells take `max(0, cos(d * pi / (2 * radius)))` at distance `d`, and are only
    /// ever raised, never lowered. Radii beyond the larger grid side are clamped to it.
    pub fn stamp(&mut self, x: i64, y: i64, radius: usize) {
        let (width, height) = self.state.shape();
        let radius = radius.min(width.max(height));
        let r = radius as i64;

        for dy in -r..=r {
            for dx in -r..=r {
                let value = if radius == 0 {
                    1.0
                } else {
                    let d = ((dx * dx + dy * dy) as f64).sqrt();
                    (d * PI / (2.0 * radius as f64)).cos().max(0.0)
                };

                let cx = wrap_coord(x + dx, width);
                let cy = wrap_coord(y + dy, height);
                if self.state.get(cx, cy) < value {
                    self.state.set(cx, cy, value);
                }
            }
        }
    }

    /// Growth response for a neighborhood density `u`.
    #[inline]
    pub fn growth(&self, u: f64) -> f64 {
        growth(u, self.parameters.mu, self.parameters.sigma)
    }

    /// Current state.
    pub fn state(&self) -> &Grid {
        &self.state
    }

    /// State that `reset` returns to.
    pub fn initial_state(&self) -> &Grid {
        &self.initial_state
    }

    /// Neighborhood potential `u` computed by the last step (zeros before the first).
    pub fn potential(&self) -> &[f64] {
        &self.potential
    }

    pub fn parameters(&self) -> &LeniaParameters {
        &self.parameters
    }

    /// Spatial kernel, centred.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.state.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.state.height()
    }

    /// Steps since construction, the last `set_state` or the last `reset`.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time: steps scaled by frequency.
    pub fn time(&self) -> f64 {
        self.steps as f64 * self.parameters.frequency
    }
}

fn check_shape(width: usize, height: usize, state: &Grid) -> Result<(), EngineError> {
    let (actual_width, actual_height) = state.shape();
    if (actual_width, actual_height) != (width, height) {
        return Err(EngineError::ShapeMismatch {
            width,
            height,
            actual_width,
            actual_height,
        });
    }
    Ok(())
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationStats {
    pub total_mass: f64,
    pub max_value: f64,
    pub min_value: f64,
    pub mean_value: f64,
    pub active_cells: usize,
}

impl SimulationStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut total_mass = 0.0;
        let mut max_value = f64::NEG_INFINITY;
        let mut min_value = f64::INFINITY;
        let mut active_cells = 0usize;

        for &v in grid.as_slice() {
            total_mass += v;
            max_value = max_value.max(v);
            min_value = min_value.min(v);
            if v > 1e-6 {
                active_cells += 1;
            }
        }

        Self {
            total_mass,
            max_value,
            min_value,
            mean_value: total_mass / grid.as_slice().len().max(1) as f64,
            active_cells,
        }
    }
}
