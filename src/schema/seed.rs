//! Seed types for initializing Lenia simulations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::compute::{Grid, wrap_coord};

/// Orbium, the classic gliding Lenia creature, as `ORBIUM[row][column]`.
pub const ORBIUM: [[f64; 20]; 20] = [
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.14, 0.1, 0.0, 0.0, 0.03, 0.03, 0.0, 0.0, 0.3, 0.0, 0.0,
        0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.08, 0.24, 0.3, 0.3, 0.18, 0.14, 0.15, 0.16, 0.15, 0.09, 0.2, 0.0,
        0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.15, 0.34, 0.44, 0.46, 0.38, 0.18, 0.14, 0.11, 0.13, 0.19, 0.18,
        0.45, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.06, 0.13, 0.39, 0.5, 0.5, 0.37, 0.06, 0.0, 0.0, 0.0, 0.02, 0.16, 0.68,
        0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.11, 0.17, 0.17, 0.33, 0.4, 0.38, 0.28, 0.14, 0.0, 0.0, 0.0, 0.0, 0.0, 0.18,
        0.42, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.09, 0.18, 0.13, 0.06, 0.08, 0.26, 0.32, 0.32, 0.27, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.82, 0.0, 0.0,
    ],
    [
        0.27, 0.0, 0.16, 0.12, 0.0, 0.0, 0.0, 0.25, 0.38, 0.44, 0.45, 0.34, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.22, 0.17, 0.0,
    ],
    [
        0.0, 0.07, 0.2, 0.02, 0.0, 0.0, 0.0, 0.31, 0.48, 0.57, 0.6, 0.57, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.49, 0.0,
    ],
    [
        0.0, 0.59, 0.19, 0.0, 0.0, 0.0, 0.0, 0.2, 0.57, 0.69, 0.76, 0.76, 0.49, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.36, 0.0,
    ],
    [
        0.0, 0.58, 0.19, 0.0, 0.0, 0.0, 0.0, 0.0, 0.67, 0.83, 0.9, 0.92, 0.87, 0.12, 0.0, 0.0, 0.0,
        0.0, 0.22, 0.07,
    ],
    [
        0.0, 0.0, 0.46, 0.0, 0.0, 0.0, 0.0, 0.0, 0.7, 0.93, 1.0, 1.0, 1.0, 0.61, 0.0, 0.0, 0.0, 0.0,
        0.18, 0.11,
    ],
    [
        0.0, 0.0, 0.82, 0.0, 0.0, 0.0, 0.0, 0.0, 0.47, 1.0, 1.0, 0.98, 1.0, 0.96, 0.27, 0.0, 0.0,
        0.0, 0.19, 0.1,
    ],
    [
        0.0, 0.0, 0.46, 0.0, 0.0, 0.0, 0.0, 0.0, 0.25, 1.0, 1.0, 0.84, 0.92, 0.97, 0.54, 0.14, 0.04,
        0.1, 0.21, 0.05,
    ],
    [
        0.0, 0.0, 0.0, 0.4, 0.0, 0.0, 0.0, 0.0, 0.09, 0.8, 1.0, 0.82, 0.8, 0.85, 0.63, 0.31, 0.18,
        0.19, 0.2, 0.01,
    ],
    [
        0.0, 0.0, 0.0, 0.36, 0.1, 0.0, 0.0, 0.0, 0.05, 0.54, 0.86, 0.79, 0.74, 0.72, 0.6, 0.39,
        0.28, 0.24, 0.13, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.01, 0.3, 0.07, 0.0, 0.0, 0.08, 0.36, 0.64, 0.7, 0.64, 0.6, 0.51, 0.39,
        0.29, 0.19, 0.04, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.1, 0.24, 0.14, 0.1, 0.15, 0.29, 0.45, 0.53, 0.52, 0.46, 0.4, 0.31,
        0.21, 0.08, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.08, 0.21, 0.21, 0.22, 0.29, 0.36, 0.39, 0.37, 0.33, 0.26, 0.18,
        0.09, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.03, 0.13, 0.19, 0.22, 0.24, 0.24, 0.23, 0.18, 0.13, 0.05,
        0.0, 0.0, 0.0, 0.0,
    ],
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.02, 0.06, 0.08, 0.09, 0.07, 0.05, 0.01, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
];

/// Complete seed specification for simulation initialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
///
/// Positions and radii given as fractions are relative to the grid size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells zero.
    Empty,
    /// Uniform random noise in `[0, amplitude)`.
    Noise {
        amplitude: f64,
        /// Random seed; `None` draws from system entropy.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// A single orbium, wrapping around the edges. Rows run bottom to top.
    Orbium {
        /// Center position as fraction of grid size (0.0-1.0).
        center: (f64, f64),
    },
    /// Single Gaussian blob. A non-positive radius paints a single point.
    GaussianBlob {
        center: (f64, f64),
        /// Radius as fraction of the smaller grid side.
        radius: f64,
        /// Peak amplitude.
        amplitude: f64,
    },
    /// One cell set to `value`.
    Point { x: usize, y: usize, value: f64 },
    /// Custom grid values (sparse representation).
    Custom {
        /// List of (x, y, value) entries.
        values: Vec<(usize, usize, f64)>,
    },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Noise {
            amplitude: 1.0,
            seed: None,
        }
    }
}

impl Seed {
    /// Generate initial grid state from seed. Values are clamped to `[0, 1]` and
    /// non-finite values become zero.
    pub fn generate(&self, width: usize, height: usize) -> Grid {
        let mut grid = Grid::zeros(width, height);
        if width == 0 || height == 0 {
            return grid;
        }

        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Noise { amplitude, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                apply_noise(&mut grid, *amplitude, &mut rng);
            }
            Pattern::Orbium { center } => {
                let cx = (center.0 * width as f64).round() as i64;
                let cy = (center.1 * height as f64).round() as i64;
                apply_orbium(&mut grid, cx, cy);
            }
            Pattern::GaussianBlob {
                center,
                radius,
                amplitude,
            } => {
                let cx = center.0 * width as f64;
                let cy = center.1 * height as f64;
                let r = radius * width.min(height) as f64;
                apply_gaussian(&mut grid, cx, cy, r, *amplitude);
            }
            Pattern::Point { x, y, value } => {
                if *x < width && *y < height {
                    grid.set(*x, *y, *value);
                }
            }
            Pattern::Custom { values } => {
                for &(x, y, v) in values {
                    if y < height && x < width {
                        grid.set(x, y, v);
                    }
                }
            }
        }

        for v in grid.as_mut_slice() {
            *v = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        }
        grid
    }
}

fn apply_noise<R: Rng>(grid: &mut Grid, amplitude: f64, rng: &mut R) {
    for cell in grid.as_mut_slice() {
        *cell = amplitude * rng.r#gen::<f64>();
    }
}

fn apply_orbium(grid: &mut Grid, cx: i64, cy: i64) {
    let (width, height) = grid.shape();
    let half = (ORBIUM.len() / 2) as i64;

    // Row 0 is the top of the creature, so it is painted at the highest y.
    for (dy, row) in ORBIUM.iter().enumerate() {
        for (dx, &value) in row.iter().enumerate() {
            let x = wrap_coord(cx - half + dx as i64, width);
            let y = wrap_coord(cy + half - dy as i64, height);
            grid.set(x, y, value);
        }
    }
}

fn apply_gaussian(grid: &mut Grid, cx: f64, cy: f64, radius: f64, amplitude: f64) {
    let (width, height) = grid.shape();
    let sigma_sq = (radius / 2.0).powi(2);

    if !(radius > 0.0 && sigma_sq.is_normal()) {
        if cx.is_finite() && cy.is_finite() {
            let x = wrap_coord(cx.round() as i64, width);
            let y = wrap_coord(cy.round() as i64, height);
            let idx = grid.idx(x, y);
            grid.as_mut_slice()[idx] += amplitude;
        }
        return;
    }

    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist_sq = dx * dx + dy * dy;
            let value = amplitude * (-dist_sq / (2.0 * sigma_sq)).exp();
            let idx = grid.idx(x, y);
            grid.as_mut_slice()[idx] += value;
        }
    }
}
