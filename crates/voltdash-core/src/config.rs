//! Configuration types for Voltdash components.
//!
//! Binaries parse flags and environment variables with `clap` and feed the
//! results into these types; library code only sees the typed values.

use std::path::PathBuf;
use std::time::Duration;

/// Public Electric Vehicle Population dataset published as CSV.
pub const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/vedant-patil-mapup/analytics-dashboard-assessment/main/data-to-visualize/Electric_Vehicle_Population_Data.csv";

/// HTTP client configuration for dataset downloads.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_base_delay: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

/// Where the vehicle dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    /// Download over HTTP(S).
    Url(String),
    /// Read a local CSV file.
    File(PathBuf),
}

impl std::fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Dataset source configuration.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub location: DatasetLocation,
    pub http: HttpConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            location: DatasetLocation::Url(DEFAULT_DATASET_URL.to_string()),
            http: HttpConfig::default(),
        }
    }
}

impl DatasetConfig {
    /// Builds a configuration from the `--dataset-url` / `--dataset-path` pair.
    ///
    /// A local path takes precedence over the URL.
    pub fn from_args(url: Option<String>, path: Option<PathBuf>) -> Self {
        let location = match (path, url) {
            (Some(path), _) => DatasetLocation::File(path),
            (None, Some(url)) => DatasetLocation::Url(url),
            (None, None) => DatasetLocation::Url(DEFAULT_DATASET_URL.to_string()),
        };

        Self {
            location,
            http: HttpConfig::default(),
        }
    }
}
