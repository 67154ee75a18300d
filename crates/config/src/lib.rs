//! Configuration models and loaders for glider vehicle profiles.
//!
//! A vehicle profile carries the thruster calibration, the electrical loads, the
//! speed band, and the grid-search settings. Every section is optional and falls
//! back to the documented defaults, so an empty file describes the reference glider.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One vehicle profile, as stored in a catalog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct VehicleConfig {
    pub name: String,
    pub thruster: ThrusterConfig,
    pub loads: LoadConfig,
    pub speed: SpeedConfig,
    pub search: SearchConfig,
    /// Usable battery capacity (A·h) for range estimates.
    pub battery_capacity_ah: Option<f64>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            name: "Reference Glider".to_string(),
            thruster: ThrusterConfig::default(),
            loads: LoadConfig::default(),
            speed: SpeedConfig::default(),
            search: SearchConfig::default(),
            battery_capacity_ah: None,
        }
    }
}

/// Quadratic thruster fit `c0 + c1·i + c2·i²`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ThrusterConfig {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Default for ThrusterConfig {
    fn default() -> Self {
        Self {
            c0: 0.0,
            c1: 0.5,
            c2: -0.05,
        }
    }
}

/// Hotel and buoyancy engine draws in amperes.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LoadConfig {
    pub hotel_sensor_on_a: f64,
    pub hotel_sensor_off_a: f64,
    pub buoyancy_a: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            hotel_sensor_on_a: 0.37,
            hotel_sensor_off_a: 0.04,
            buoyancy_a: 0.10,
        }
    }
}

/// Through-water speed band in m/s.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpeedConfig {
    pub floor_m_s: f64,
    pub ceiling_m_s: f64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            floor_m_s: 0.05,
            ceiling_m_s: 1.0,
        }
    }
}

/// Grid search over the thruster input current.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub samples: usize,
    /// Also evaluate the lower end of the current band.
    pub include_lower_bound: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            include_lower_bound: false,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("expected exactly one vehicle in {path}, found {count}")]
    NotSingle { path: PathBuf, count: usize },
}

/// Load vehicle profiles from a TOML file, a YAML list, or a directory of TOML files.
pub fn load_vehicle_configs<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleConfig>, ConfigError> {
    load_records(path)
}

/// Load exactly one vehicle profile.
pub fn load_vehicle_config<P: AsRef<Path>>(path: P) -> Result<VehicleConfig, ConfigError> {
    let path = path.as_ref();
    let mut records: Vec<VehicleConfig> = load_records(path)?;
    if records.len() != 1 {
        return Err(ConfigError::NotSingle {
            path: path.to_path_buf(),
            count: records.len(),
        });
    }
    Ok(records.remove(0))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let cfg: VehicleConfig = toml::from_str("").expect("empty document");
        assert_eq!(cfg, VehicleConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg: VehicleConfig = toml::from_str(
            r#"
            name = "Trimmed"
            [speed]
            ceiling_m_s = 0.8
            "#,
        )
        .expect("partial document");
        assert_eq!(cfg.name, "Trimmed");
        assert_eq!(cfg.speed.ceiling_m_s, 0.8);
        assert_eq!(cfg.speed.floor_m_s, 0.05);
        assert_eq!(cfg.search.samples, 100);
    }
}
