use crate::error::{Result, SoilError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default CSV written by the upstream moisture exporter.
pub const DEFAULT_INPUT_PATH: &str = "soil_moisture_output.csv";

/// Default destination for the rendered chart.
pub const DEFAULT_OUTPUT_PATH: &str = "soil_moisture_analysis.png";

/// Default moving-average width in samples.
pub const DEFAULT_WINDOW: usize = 7;

/// Moisture percentage below which a reading counts as drought.
pub const DEFAULT_DROUGHT_THRESHOLD: f64 = 20.0;

/// Moisture percentage above which a reading counts as flood.
pub const DEFAULT_FLOOD_THRESHOLD: f64 = 80.0;

/// Figure size is 14x10 inches rendered at 100 pixels per inch.
pub const DEFAULT_WIDTH: u32 = 1400;
pub const DEFAULT_HEIGHT: u32 = 1000;

/// Drought and flood cut-offs, both exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub drought: f64,
    pub flood: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            drought: DEFAULT_DROUGHT_THRESHOLD,
            flood: DEFAULT_FLOOD_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(drought: f64, flood: f64) -> Result<Self> {
        let thresholds = Thresholds { drought, flood };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Both values must be finite and the drought band must lie strictly
    /// below the flood band so the two shadings never overlap.
    pub fn validate(&self) -> Result<()> {
        if !self.drought.is_finite() || !self.flood.is_finite() || self.drought >= self.flood {
            return Err(SoilError::InvalidThresholds {
                drought: self.drought,
                flood: self.flood,
            });
        }
        Ok(())
    }

    pub fn is_drought(&self, value: f64) -> bool {
        value < self.drought
    }

    pub fn is_flood(&self, value: f64) -> bool {
        value > self.flood
    }
}

/// Everything a single report run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub window: usize,
    pub thresholds: Thresholds,
    pub width: u32,
    pub height: u32,
    /// Open the written image in the platform viewer.
    pub show: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            window: DEFAULT_WINDOW,
            thresholds: Thresholds::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show: true,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(SoilError::InvalidWindow(self.window));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SoilError::InvalidFigureSize {
                width: self.width,
                height: self.height,
            });
        }
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window, 7);
        assert_eq!(config.thresholds.drought, 20.0);
        assert_eq!(config.thresholds.flood, 80.0);
        assert_eq!((config.width, config.height), (1400, 1000));
        assert_eq!(config.output_path, PathBuf::from("soil_moisture_analysis.png"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = ReportConfig {
            window: 0,
            ..ReportConfig::default()
        };
        assert!(matches!(config.validate(), Err(SoilError::InvalidWindow(0))));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = ReportConfig {
            height: 0,
            ..ReportConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SoilError::InvalidFigureSize { .. })
        ));
    }

    #[test]
    fn test_thresholds_must_be_ordered() {
        assert!(Thresholds::new(20.0, 80.0).is_ok());
        assert!(Thresholds::new(80.0, 80.0).is_err());
        assert!(Thresholds::new(90.0, 10.0).is_err());
        assert!(Thresholds::new(f64::NAN, 80.0).is_err());
    }

    #[test]
    fn test_threshold_predicates_are_strict() {
        let t = Thresholds::default();
        assert!(t.is_drought(19.9));
        assert!(!t.is_drought(20.0));
        assert!(t.is_flood(80.1));
        assert!(!t.is_flood(80.0));
    }
}
