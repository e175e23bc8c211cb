//! Local file source, for offline runs and reproducible tests.

use std::path::{Path, PathBuf};

use tracing::debug;

use voltdash_core::error::AppError;
use voltdash_core::traits::VehicleSource;

/// Reads the dataset from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct FileCsvSource {
    path: PathBuf,
}

impl FileCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VehicleSource for FileCsvSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }

    async fn fetch_csv(&self) -> Result<String, AppError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes from {}", text.len(), self.path.display());
        Ok(text)
    }
}
