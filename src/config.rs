//! Plot configuration.
//!
//! Every tunable of a run lives in [`PlotConfig`]. The defaults reproduce the
//! classic plot: a degree-6 easing curve on a 1024×1024 canvas written to
//! `out.bmp`. A TOML file may override any subset of the fields:
//!
//! ```toml
//! width = 512
//! height = 512
//! resolution = 50
//! control_points = [[0.0, 0.0], [0.5, 1.0], [1.0, 0.0]]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::basics::PointD;
use crate::curves::ControlPolygon;
use crate::error::{Error, Result};

/// Control points of the default degree-6 curve.
pub const DEFAULT_CONTROL_POINTS: [[f64; 2]; 7] = [
    [0.00, 0.00],
    [0.01, 0.00],
    [0.40, 0.00],
    [0.70, 0.00],
    [0.85, 1.00],
    [0.90, 1.00],
    [1.00, 1.00],
];

/// Largest accepted canvas side. Larger images no longer fit the 4 GiB a BMP
/// header can describe.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// Inset in pixels between the canvas edge and the unit square.
    pub margin: u32,
    /// Diameter of each sampled curve point.
    pub curve_point_size: f64,
    /// Side length of the outer control-point square.
    pub control_point_size: f64,
    /// Amount subtracted from the outer side to get the inner square's side.
    pub control_point_border: f64,
    /// Number of curve samples.
    pub resolution: usize,
    pub control_points: Vec<[f64; 2]>,
    pub output: PathBuf,
    pub backup: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            margin: 20,
            curve_point_size: 2.0,
            control_point_size: 10.0,
            control_point_border: 4.0,
            resolution: 200,
            control_points: DEFAULT_CONTROL_POINTS.to_vec(),
            output: PathBuf::from("out.bmp"),
            backup: PathBuf::from("old.bmp"),
        }
    }
}

impl PlotConfig {
    /// Parse a configuration from TOML text; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PlotConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading configuration from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Check the values a run cannot proceed without.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
            return Err(Error::InvalidConfig(format!(
                "canvas size {}x{} exceeds the {} pixel limit per side",
                self.width, self.height, MAX_CANVAS_SIDE
            )));
        }
        if 2 * self.margin as u64 >= self.width.min(self.height) as u64 {
            return Err(Error::InvalidConfig(format!(
                "margin {} leaves no drawable area on a {}x{} canvas",
                self.margin, self.width, self.height
            )));
        }
        if self.resolution == 0 {
            return Err(Error::InvalidResolution(self.resolution));
        }
        if self.control_points.is_empty() {
            return Err(Error::EmptyPolygon);
        }
        for (name, v) in [
            ("curve_point_size", self.curve_point_size),
            ("control_point_size", self.control_point_size),
            ("control_point_border", self.control_point_border),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, v
                )));
            }
        }
        if self
            .control_points
            .iter()
            .flatten()
            .any(|c| !c.is_finite())
        {
            return Err(Error::InvalidConfig(
                "control point coordinates must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured control points as a validated polygon.
    pub fn control_polygon(&self) -> Result<ControlPolygon> {
        ControlPolygon::new(self.control_points.iter().map(|&p| PointD::from(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = PlotConfig::default();
        assert_eq!((c.width, c.height, c.margin), (1024, 1024, 20));
        assert_eq!(c.curve_point_size, 2.0);
        assert_eq!(c.control_point_size, 10.0);
        assert_eq!(c.control_point_border, 4.0);
        assert_eq!(c.resolution, 200);
        assert_eq!(c.output, PathBuf::from("out.bmp"));
        assert_eq!(c.backup, PathBuf::from("old.bmp"));
        assert!(c.validate().is_ok());

        let poly = c.control_polygon().unwrap();
        assert_eq!(poly.degree(), 6);
        assert_eq!(poly.points()[1], PointD::new(0.01, 0.0));
    }

    #[test]
    fn test_partial_toml() {
        let c = PlotConfig::from_toml_str(
            r#"
            width = 512
            resolution = 10
            output = "plot.bmp"
            control_points = [[0.0, 0.0], [1.0, 1.0]]
            "#,
        )
        .unwrap();
        assert_eq!(c.width, 512);
        assert_eq!(c.height, 1024);
        assert_eq!(c.resolution, 10);
        assert_eq!(c.output, PathBuf::from("plot.bmp"));
        assert_eq!(c.backup, PathBuf::from("old.bmp"));
        assert_eq!(c.control_polygon().unwrap().degree(), 1);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(PlotConfig::from_toml_str("").unwrap(), PlotConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            PlotConfig::from_toml_str("width = \"wide\""),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            PlotConfig::from_toml_str("colour = 3"),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            PlotConfig::from_toml_str("resolution = -4"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_validation() {
        let bad = |f: fn(&mut PlotConfig)| {
            let mut c = PlotConfig::default();
            f(&mut c);
            c.validate()
        };
        assert!(matches!(bad(|c| c.width = 0), Err(Error::InvalidConfig(_))));
        assert!(matches!(bad(|c| c.margin = 512), Err(Error::InvalidConfig(_))));
        assert!(matches!(bad(|c| c.width = 32_768), Err(Error::InvalidConfig(_))));
        assert!(matches!(
            bad(|c| c.height = MAX_CANVAS_SIDE + 1),
            Err(Error::InvalidConfig(_))
        ));
        assert!(bad(|c| c.width = MAX_CANVAS_SIDE).is_ok());
        assert!(matches!(
            bad(|c| c.resolution = 0),
            Err(Error::InvalidResolution(0))
        ));
        assert!(matches!(
            bad(|c| c.control_points.clear()),
            Err(Error::EmptyPolygon)
        ));
        assert!(matches!(
            bad(|c| c.control_point_border = -1.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            bad(|c| c.control_points[0][1] = f64::NAN),
            Err(Error::InvalidConfig(_))
        ));
        assert!(bad(|c| c.control_point_border = 20.0).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlotConfig::load(Path::new("/nonexistent/plot.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
