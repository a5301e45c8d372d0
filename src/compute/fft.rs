//! FFT-based 2D convolution for efficient kernel application.
//!
//! Uses rustfft for O(N log N) circular convolution instead of O(N * R^2) direct
//! convolution. Circular convolution is what gives the grid its toroidal topology.

use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

/// Reusable buffers for one forward/inverse round trip.
pub struct FftScratch {
    /// Frequency-domain working buffer, row-major `height x width`.
    pub spectrum: Vec<Complex<f64>>,
    /// Transposed copy used for the column pass, row-major `width x height`.
    transposed: Vec<Complex<f64>>,
}

impl FftScratch {
    /// Allocate scratch sized for the convolver's grid.
    pub fn new(convolver: &FftConvolver) -> Self {
        let size = convolver.width * convolver.height;
        Self {
            spectrum: vec![Complex::new(0.0, 0.0); size],
            transposed: vec![Complex::new(0.0, 0.0); size],
        }
    }
}

/// 2D FFT engine with plans cached for a fixed grid size.
pub struct FftConvolver {
    width: usize,
    height: usize,
    // Plans are expensive to create, reuse across every transform
    fft_row: Arc<dyn Fft<f64>>,
    fft_col: Arc<dyn Fft<f64>>,
    ifft_row: Arc<dyn Fft<f64>>,
    ifft_col: Arc<dyn Fft<f64>>,
}

impl FftConvolver {
    /// Plan transforms for a `width x height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft_row = planner.plan_fft_forward(width);
        let fft_col = planner.plan_fft_forward(height);
        let ifft_row = planner.plan_fft_inverse(width);
        let ifft_col = planner.plan_fft_inverse(height);

        Self {
            width,
            height,
            fft_row,
            fft_col,
            ifft_row,
            ifft_col,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward 2D FFT of a real grid into `scratch.spectrum`.
    pub fn forward(&self, input: &[f64], scratch: &mut FftScratch) {
        assert_eq!(input.len(), self.len());

        for (c, &x) in scratch.spectrum.iter_mut().zip(input) {
            *c = Complex::new(x, 0.0);
        }
        self.transform(scratch, &self.fft_row, &self.fft_col);
    }

    /// Inverse 2D FFT of `scratch.spectrum`, writing the normalized real part to `output`.
    pub fn inverse_real(&self, scratch: &mut FftScratch, output: &mut [f64]) {
        assert_eq!(output.len(), self.len());

        self.transform(scratch, &self.ifft_row, &self.ifft_col);

        let scale = 1.0 / self.len() as f64;
        for (o, c) in output.iter_mut().zip(&scratch.spectrum) {
            *o = c.re * scale;
        }
    }

    /// Forward transform returning a fresh spectrum.
    pub fn fft2d(&self, input: &[f64]) -> Vec<Complex<f64>> {
        let mut scratch = FftScratch::new(self);
        self.forward(input, &mut scratch);
        scratch.spectrum
    }

    /// Convolve `input` with a precomputed spectrum, writing into `output`.
    pub fn convolve_spectrum_into(
        &self,
        input: &[f64],
        kernel_spectrum: &[Complex<f64>],
        scratch: &mut FftScratch,
        output: &mut [f64],
    ) {
        assert_eq!(kernel_spectrum.len(), self.len());

        self.forward(input, scratch);
        for (s, k) in scratch.spectrum.iter_mut().zip(kernel_spectrum) {
            *s = *s * *k;
        }
        self.inverse_real(scratch, output);
    }

    /// Convolve input grid with kernel (both in spatial domain).
    pub fn convolve(&self, input: &[f64], kernel: &[f64]) -> Vec<f64> {
        let kernel_spectrum = self.fft2d(kernel);
        let mut scratch = FftScratch::new(self);
        let mut output = vec![0.0; self.len()];
        self.convolve_spectrum_into(input, &kernel_spectrum, &mut scratch, &mut output);
        output
    }

    /// Row pass then column pass (via transpose) over `scratch.spectrum`.
    fn transform(
        &self,
        scratch: &mut FftScratch,
        row: &Arc<dyn Fft<f64>>,
        col: &Arc<dyn Fft<f64>>,
    ) {
        process_lines(row, &mut scratch.spectrum, self.width);

        transpose(&scratch.spectrum, &mut scratch.transposed, self.width, self.height);
        process_lines(col, &mut scratch.transposed, self.height);
        transpose(&scratch.transposed, &mut scratch.spectrum, self.height, self.width);
    }
}

/// Run `fft` over every contiguous line of length `len`.
#[cfg(not(target_arch = "wasm32"))]
fn process_lines(fft: &Arc<dyn Fft<f64>>, data: &mut [Complex<f64>], len: usize) {
    data.par_chunks_exact_mut(len).for_each(|line| fft.process(line));
}

#[cfg(target_arch = "wasm32")]
fn process_lines(fft: &Arc<dyn Fft<f64>>, data: &mut [Complex<f64>], len: usize) {
    for line in data.chunks_exact_mut(len) {
        fft.process(line);
    }
}

/// Transpose a row-major `rows x cols` matrix (`cols` values per row).
fn transpose(src: &[Complex<f64>], dst: &mut [Complex<f64>], cols: usize, rows: usize) {
    for (r, line) in src.chunks_exact(cols).enumerate().take(rows) {
        for (c, &v) in line.iter().enumerate() {
            dst[c * rows + r] = v;
        }
    }
}
