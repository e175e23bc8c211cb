//! Source selection and enum dispatch.
//!
//! [`VehicleSource`] uses `impl Future` return types and is not object-safe,
//! so the configured source is picked at runtime through
//! [`DatasetSourceEnum`] instead of `Box<dyn VehicleSource>`.

use voltdash_core::config::{DatasetConfig, DatasetLocation};
use voltdash_core::error::AppError;
use voltdash_core::traits::VehicleSource;

use crate::file::FileCsvSource;
use crate::http::HttpCsvSource;

/// Unified dataset source wrapping the concrete implementations.
#[derive(Clone)]
pub enum DatasetSourceEnum {
    /// Remote CSV over HTTP(S).
    Http(HttpCsvSource),
    /// Local CSV file.
    File(FileCsvSource),
}

impl DatasetSourceEnum {
    /// Builds the source named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidUrl` if a URL location cannot be parsed.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, AppError> {
        match &config.location {
            DatasetLocation::Url(url) => Ok(Self::Http(HttpCsvSource::with_config(
                url,
                config.http.clone(),
            )?)),
            DatasetLocation::File(path) => Ok(Self::File(FileCsvSource::new(path.clone()))),
        }
    }
}

impl VehicleSource for DatasetSourceEnum {
    fn describe(&self) -> String {
        match self {
            Self::Http(s) => s.describe(),
            Self::File(s) => s.describe(),
        }
    }

    async fn fetch_csv(&self) -> Result<String, AppError> {
        match self {
            Self::Http(s) => s.fetch_csv().await,
            Self::File(s) => s.fetch_csv().await,
        }
    }
}
