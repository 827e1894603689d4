//! Input file layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File names of the inputs, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLayout {
    pub labels: String,
    pub solar_wind: String,
    pub satellite_positions: String,
    pub sunspots: String,
}

impl Default for InputLayout {
    fn default() -> Self {
        Self {
            labels: "dst_labels.csv".to_string(),
            solar_wind: "solar_wind.csv".to_string(),
            satellite_positions: "satellite_positions.csv".to_string(),
            sunspots: "sunspots.csv".to_string(),
        }
    }
}

impl InputLayout {
    /// Resolve every file against `data_dir`.
    pub fn resolve(&self, data_dir: &Path) -> InputPaths {
        InputPaths {
            labels: data_dir.join(&self.labels),
            solar_wind: data_dir.join(&self.solar_wind),
            satellite_positions: data_dir.join(&self.satellite_positions),
            sunspots: data_dir.join(&self.sunspots),
        }
    }
}

/// Absolute or working-directory-relative paths of the four inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub labels: PathBuf,
    pub solar_wind: PathBuf,
    pub satellite_positions: PathBuf,
    pub sunspots: PathBuf,
}

impl InputPaths {
    pub fn all(&self) -> [&Path; 4] {
        [
            self.labels.as_path(),
            self.solar_wind.as_path(),
            self.satellite_positions.as_path(),
            self.sunspots.as_path(),
        ]
    }
}
