//! Toroidal 2D grid of cell intensities.

use rand::Rng;

use super::EngineError;

/// Row-major `width x height` grid, indexed `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Create a zero-filled grid.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self, EngineError> {
        if data.len() != width * height {
            return Err(EngineError::BufferLength {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from `rows[y][x]`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(EngineError::RaggedRows);
        }
        Self::from_vec(width, height, rows.concat())
    }

    /// Fill a grid with independent uniform samples in `[0, 1)`.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let data = (0..width * height).map(|_| rng.r#gen::<f64>()).collect();
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert (x, y) coordinates to flat index.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let idx = self.idx(x, y);
        self.data[idx] = value;
    }

    /// Value at signed coordinates, wrapping around the torus.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64) -> f64 {
        self.get(wrap_coord(x, self.width), wrap_coord(y, self.height))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterate rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Copy out as `rows[y][x]`.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Sum of all cell values.
    pub fn total_mass(&self) -> f64 {
        self.data.iter().sum()
    }

    /// True when every cell lies in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        self.data.iter().all(|v| (0.0..=1.0).contains(v))
    }
}

/// Wrap a signed coordinate into `[0, size)`.
#[inline]
pub fn wrap_coord(coord: i64, size: usize) -> usize {
    coord.rem_euclid(size as i64) as usize
}

/// Shortest distance between two coordinates on a ring of `size` cells.
#[inline]
pub fn toroidal_delta(a: usize, b: usize, size: usize) -> usize {
    let d = a.abs_diff(b) % size;
    d.min(size - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_indexing_is_row_major() {
        let mut grid = Grid::zeros(4, 3);
        grid.set(3, 1, 0.5);
        assert_eq!(grid.as_slice()[7], 0.5);
        assert_eq!(grid.get(3, 1), 0.5);
        assert_eq!(grid.shape(), (4, 3));
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert!(Grid::from_vec(4, 4, vec![0.0; 15]).is_err());
        assert!(Grid::from_vec(4, 4, vec![0.0; 16]).is_ok());
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]).unwrap();
        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid.get(2, 1), 0.6);
        assert_eq!(grid.to_rows()[0], vec![0.1, 0.2, 0.3]);

        let ragged = Grid::from_rows(&[vec![0.1, 0.2], vec![0.3]]);
        assert!(matches!(ragged, Err(EngineError::RaggedRows)));
    }

    #[test]
    fn test_random_range_and_seeding() {
        let a = Grid::random(16, 8, &mut StdRng::seed_from_u64(7));
        let b = Grid::random(16, 8, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(wrap_coord(-1, 10), 9);
        assert_eq!(wrap_coord(10, 10), 0);
        assert_eq!(wrap_coord(-21, 10), 9);
        assert_eq!(toroidal_delta(0, 9, 10), 1);
        assert_eq!(toroidal_delta(2, 7, 10), 5);

        let mut grid = Grid::zeros(5, 5);
        grid.set(4, 0, 1.0);
        assert_eq!(grid.get_wrapped(-1, 5), 1.0);
    }
}
