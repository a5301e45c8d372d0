//! Kernel generation for Lenia.
//!
//! The kernel is a single Gaussian ring truncated at radius `R`, normalized to unit
//! mass and laid out over the full grid so it can be transformed once and reused.

use log::debug;

use super::{EngineError, bell};

/// Ring position as a fraction of the kernel radius.
pub const RING_CENTER: f64 = 0.5;
/// Ring width as a fraction of the kernel radius.
pub const RING_WIDTH: f64 = 0.15;

/// Radial profile at normalized distance `d` (0 at centre, 1 at the rim).
#[inline]
pub fn radial_profile(d: f64) -> f64 {
    if d < 1.0 {
        bell(d, RING_CENTER, RING_WIDTH)
    } else {
        0.0
    }
}

/// Normalized kernel covering the whole grid, centred at `(width / 2, height / 2)`.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Kernel values, row-major, centred.
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
    /// Kernel radius in cells.
    pub radius: f64,
    /// Total weight before normalization.
    pub raw_sum: f64,
}

impl Kernel {
    /// Build the kernel for a `width x height` grid.
    ///
    /// Fails when the truncated profile carries no weight, which would otherwise
    /// turn every convolution into a division by zero.
    pub fn new(width: usize, height: usize, radius: f64) -> Result<Self, EngineError> {
        let half_width = (width / 2) as f64;
        let half_height = (height / 2) as f64;

        let mut data = vec![0.0; width * height];
        for y in 0..height {
            let dy = y as f64 - half_height;
            for x in 0..width {
                let dx = x as f64 - half_width;
                let d = (dx * dx + dy * dy).sqrt() / radius;
                data[y * width + x] = radial_profile(d);
            }
        }

        // Sequential sum keeps normalization deterministic
        let raw_sum: f64 = data.iter().sum();
        if !raw_sum.is_finite() || raw_sum <= 0.0 {
            return Err(EngineError::DegenerateKernel {
                radius,
                width,
                height,
            });
        }

        let inv_sum = 1.0 / raw_sum;
        for v in &mut data {
            *v *= inv_sum;
        }

        debug!(
            "Built {}x{} kernel, radius {}, raw weight {:.6}",
            width, height, radius, raw_sum
        );

        Ok(Self {
            data,
            width,
            height,
            radius,
            raw_sum,
        })
    }

    /// Get centred kernel value at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Sum of the normalized values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Circularly shift the kernel so its centre lands on index (0, 0).
    ///
    /// Circular convolution expects the kernel origin at the first element.
    pub fn shifted(&self) -> Vec<f64> {
        let (width, height) = (self.width, self.height);
        let (half_width, half_height) = (width / 2, height / 2);

        let mut shifted = vec![0.0; width * height];
        for y in 0..height {
            let ty = (y + height - half_height) % height;
            for x in 0..width {
                let tx = (x + width - half_width) % width;
                shifted[ty * width + tx] = self.data[y * width + x];
            }
        }
        shifted
    }
}
