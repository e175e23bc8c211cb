//! Dataset loading service.
//!
//! [`DatasetLoader`] ties a [`VehicleSource`] to the CSV parser and publishes
//! the outcome into a [`DatasetCache`]. Failures never propagate past the
//! loader: they are logged and an empty dataset carrying the error message is
//! published instead.

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::dataset::{Dataset, DatasetCache, LoadStatus};
use crate::error::AppError;
use crate::ingest::parse_vehicles;
use crate::models::Vehicle;
use crate::traits::VehicleSource;

/// Loads the vehicle dataset from a source.
///
/// # Example
///
/// ```ignore
/// use voltdash_core::{DatasetCache, DatasetLoader};
/// use tokio_util::sync::CancellationToken;
///
/// let cache = DatasetCache::new();
/// let loader = DatasetLoader::new(source);
/// let status = loader.load_into(&cache, CancellationToken::new()).await;
/// ```
#[derive(Clone)]
pub struct DatasetLoader<S: VehicleSource> {
    source: S,
}

impl<S: VehicleSource> DatasetLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches and parses the dataset, propagating any error.
    pub async fn fetch(&self) -> Result<Vec<Vehicle>, AppError> {
        let text = self.source.fetch_csv().await?;
        if text.trim().is_empty() {
            return Err(AppError::EmptyResponse);
        }

        // Parsing tens of thousands of rows is CPU-bound.
        tokio::task::spawn_blocking(move || parse_vehicles(&text))
            .await
            .map_err(|e| AppError::Generic(format!("CSV parser task failed: {}", e)))?
    }

    /// Fetches and parses the dataset; failures yield an empty dataset.
    pub async fn load(&self) -> Dataset {
        let source = self.source.describe();
        info!("Loading vehicle dataset from {}", source);

        match self.fetch().await {
            Ok(vehicles) => {
                info!("Loaded {} EV records", vehicles.len());
                Dataset::loaded(vehicles, source)
            }
            Err(e) => {
                error!("Error loading dataset from {}: {}", source, e);
                Dataset::failed(source, e.to_string())
            }
        }
    }

    /// Loads the dataset and publishes it into `cache`.
    ///
    /// If `cancel` fires first, nothing is published and the cache keeps
    /// reporting [`LoadStatus::Loading`].
    pub async fn load_into(&self, cache: &DatasetCache, cancel: CancellationToken) -> LoadStatus {
        tokio::select! {
            _ = cancel.cancelled() => {
                warn!("Dataset load cancelled before completion");
            }
            dataset = self.load() => {
                if !cache.publish(dataset) {
                    warn!("Dataset already published; discarding new load");
                }
            }
        }

        cache.status()
    }
}
