//! Typed run configuration, loaded from a YAML document.
//!
//! Everything the pipeline needs is validated here before any network or
//! filesystem work starts: target group lists, the CDN mirror host used in
//! generated snippets, and the GeoLite2 CSV sources.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("config has no targets: both `namelist` and `country` are empty")]
    NoTargets,
    #[error("config field `cdn` must not be empty")]
    EmptyCdn,
}

/// Run configuration for the aggregation pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Free-text search targets, written under the `data` directory.
    #[serde(default)]
    pub namelist: Vec<String>,
    /// ISO country codes, written under the `country` directory.
    #[serde(default)]
    pub country: Vec<String>,
    /// CDN mirror host used in generated rule-provider snippets.
    pub cdn: String,
    /// GitHub `owner/name` the generated snippet URLs point at.
    #[serde(default = "default_repo")]
    pub repo: String,
    /// GeoLite2 ASN-to-CIDR CSV sources.
    #[serde(default = "default_csv")]
    pub csv: Vec<PathBuf>,
    /// Root directory the `data/` and `country/` trees are written under.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_repo() -> String {
    "Kwisma/ASN-List".to_string()
}

fn default_csv() -> Vec<PathBuf> {
    vec![PathBuf::from("GeoLite2-ASN-Blocks-IPv4.csv")]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cdn.trim().is_empty() {
            return Err(ConfigError::EmptyCdn);
        }
        if self.namelist.is_empty() && self.country.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        Ok(())
    }
}
