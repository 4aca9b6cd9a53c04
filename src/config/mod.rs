use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::geometry::{BoundingBox, EARTH_RADIUS_KM, haversine_with_radius};

fn default_earth_radius_km() -> f64 {
    EARTH_RADIUS_KM
}

/// Settings read from `geohelpers.toml`
///
/// ```toml
/// earth_radius_km = 6367.0
/// min_area_threshold = 0.01
/// coast_file = "data/coastline.geojson"
///
/// [bbox]
/// lonmin = 4.0
/// lonmax = 6.5
/// latmin = 58.5
/// latmax = 61.0
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default = "default_earth_radius_km")]
    pub earth_radius_km: f64,
    /// Polygons below this planar area (degrees²) are dropped after extraction
    #[serde(default)]
    pub min_area_threshold: f64,
    #[serde(default)]
    pub coast_file: Option<PathBuf>,
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: default_earth_radius_km(),
            min_area_threshold: 0.0,
            coast_file: None,
            bbox: None,
        }
    }
}

impl FileConfig {
    /// First parseable config file on the search path, if any
    pub fn load() -> Option<Self> {
        Self::load_first(&get_config_paths())
    }

    /// First file in `paths` that exists and parses; unparseable files are
    /// skipped with a warning
    pub fn load_first(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        log::debug!("loaded settings from {:?}", path);
                        return Some(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load from an explicit path
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Haversine distance using the configured Earth radius
    pub fn distance_km(&self, a: (f64, f64), b: (f64, f64)) -> f64 {
        haversine_with_radius(self.earth_radius_km, a, b)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("geohelpers.toml"));
    paths.push(PathBuf::from(".geohelpers.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("geohelpers").join("config.toml"));
        paths.push(config_dir.join("geohelpers.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".geohelpers.toml"));
    }

    paths
}
