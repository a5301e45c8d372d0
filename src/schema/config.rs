//! Configuration types for Lenia simulation parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Update rule parameters.
///
/// A fresh value is built for every engine; nothing shares a process-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeniaParameters {
    /// Time step scale: how strongly growth affects state per step.
    #[serde(alias = "dt")]
    pub frequency: f64,
    /// Kernel radius in cells.
    #[serde(rename = "R", alias = "radius")]
    pub radius: f64,
    /// Growth function: optimal neighborhood density.
    #[serde(rename = "m", alias = "mu")]
    pub mu: f64,
    /// Growth function: response width.
    #[serde(rename = "s", alias = "sigma")]
    pub sigma: f64,
}

impl Default for LeniaParameters {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            radius: 13.0,
            mu: 0.15,
            sigma: 0.015,
        }
    }
}

impl LeniaParameters {
    /// Validate parameter values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.mu.is_finite() {
            return Err(ConfigError::InvalidGrowthCenter(self.mu));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(ConfigError::InvalidGrowthSpread(self.sigma));
        }
        Ok(())
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells (X dimension).
    pub width: usize,
    /// Grid height in cells (Y dimension).
    pub height: usize,
    /// Update rule parameters.
    #[serde(default)]
    pub parameters: LeniaParameters,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            parameters: LeniaParameters::default(),
        }
    }
}

impl SimulationConfig {
    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.width, self.height)?;
        self.parameters.validate()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Reject empty grids.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Frequency must be positive and finite, got {0}")]
    InvalidFrequency(f64),
    #[error("Kernel radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("Growth center must be finite, got {0}")]
    InvalidGrowthCenter(f64),
    #[error("Growth spread must be positive and finite, got {0}")]
    InvalidGrowthSpread(f64),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_parameters() {
        let params = LeniaParameters::default();
        assert_eq!(params.frequency, 0.1);
        assert_eq!(params.radius, 13.0);
        assert_eq!(params.mu, 0.15);
        assert_eq!(params.sigma, 0.015);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let bad = [
            LeniaParameters {
                frequency: 0.0,
                ..Default::default()
            },
            LeniaParameters {
                radius: -1.0,
                ..Default::default()
            },
            LeniaParameters {
                radius: f64::NAN,
                ..Default::default()
            },
            LeniaParameters {
                mu: f64::INFINITY,
                ..Default::default()
            },
            LeniaParameters {
                sigma: 0.0,
                ..Default::default()
            },
        ];
        for params in bad {
            assert!(params.validate().is_err(), "accepted {:?}", params);
        }
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = SimulationConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 128
            })
        ));
    }

    #[test]
    fn test_parse_short_names() {
        let json = r#"{
            "width": 64,
            "height": 32,
            "parameters": { "frequency": 0.2, "R": 8, "m": 0.14, "s": 0.02 }
        }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.parameters.radius, 8.0);
        assert_eq!(config.parameters.mu, 0.14);
        assert_eq!(config.parameters.sigma, 0.02);
        assert_eq!(config.grid_size(), 64 * 32);
    }

    #[test]
    fn test_parse_missing_parameters_uses_defaults() {
        let config = SimulationConfig::from_json_str(r#"{"width": 16, "height": 16}"#).unwrap();
        assert_eq!(config.parameters, LeniaParameters::default());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = SimulationConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let config = SimulationConfig {
            width: 48,
            height: 40,
            parameters: LeniaParameters {
                radius: 6.0,
                ..Default::default()
            },
        };
        write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = SimulationConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SimulationConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
