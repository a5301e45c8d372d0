//! Bell curve and growth function.
//!
//! The growth function determines how a cell reacts to its neighborhood density.

/// Gaussian bump: `exp(-((x - m) / s)^2 / 2)`.
#[inline]
pub fn bell(x: f64, m: f64, s: f64) -> f64 {
    let z = (x - m) / s;
    (-z * z / 2.0).exp()
}

/// Compute growth function: G(u; mu, sigma) = 2 * bell(u, mu, sigma) - 1
///
/// Output range: [-1, 1]
/// - Returns 1.0 when u == mu (optimal density)
/// - Returns -1.0 when u is far from mu
#[inline]
pub fn growth(u: f64, mu: f64, sigma: f64) -> f64 {
    bell(u, mu, sigma) * 2.0 - 1.0
}

/// Advance one cell: `clamp(state + dt * growth(u), 0, 1)`.
#[inline]
pub fn advance(state: f64, u: f64, dt: f64, mu: f64, sigma: f64) -> f64 {
    (state + dt * growth(u, mu, sigma)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_peak_and_tail() {
        assert_eq!(bell(0.5, 0.5, 0.15), 1.0);
        let one_sigma = bell(0.65, 0.5, 0.15);
        assert!((one_sigma - (-0.5f64).exp()).abs() < 1e-12);
        assert!(bell(0.0, 0.15, 0.015) < 1e-20);
    }

    #[test]
    fn test_growth_peak() {
        let mu = 0.15;
        let sigma = 0.015;

        let g = growth(mu, mu, sigma);
        assert!((g - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_growth_far() {
        let g = growth(1.0, 0.15, 0.015);
        assert!((g + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_growth_symmetric() {
        let mu = 0.5;
        let sigma = 0.1;

        let g1 = growth(mu - 0.1, mu, sigma);
        let g2 = growth(mu + 0.1, mu, sigma);
        assert!((g1 - g2).abs() < 1e-12);
    }

    #[test]
    fn test_advance_clamps() {
        assert_eq!(advance(0.0, 0.0, 0.1, 0.15, 0.015), 0.0);
        assert_eq!(advance(0.95, 0.15, 0.1, 0.15, 0.015), 1.0);
        let mid = advance(0.5, 0.15, 0.1, 0.15, 0.015);
        assert!((mid - 0.6).abs() < 1e-12);
    }
}
