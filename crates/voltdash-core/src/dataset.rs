//! The in-memory vehicle dataset and its write-once cache.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};

use crate::models::Vehicle;

/// A loaded (or failed) dataset snapshot.
#[derive(Debug, Clone)]
pub struct Dataset {
    vehicles: Vec<Vehicle>,
    source: String,
    loaded_at: DateTime<Utc>,
    failure: Option<String>,
}

impl Dataset {
    /// Creates a dataset from parsed vehicles.
    pub fn loaded(vehicles: Vec<Vehicle>, source: impl Into<String>) -> Self {
        Self {
            vehicles,
            source: source.into(),
            loaded_at: Utc::now(),
            failure: None,
        }
    }

    /// Creates an empty dataset recording why the load failed.
    pub fn failed(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            vehicles: Vec::new(),
            source: source.into(),
            loaded_at: Utc::now(),
            failure: Some(message.into()),
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Looks up a vehicle by id.
    ///
    /// Ids are assigned sequentially from 1, so this is an index lookup.
    pub fn get(&self, id: u64) -> Option<&Vehicle> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.vehicles.get(index).filter(|v| v.id == id)
    }
}

/// Load state as reported by health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No dataset published yet.
    Loading,
    Ready { records: usize },
    Failed { message: String },
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready { .. } => "ready",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Write-once, read-many holder for the process-wide dataset.
///
/// Readers never block: until a dataset is published they observe an empty
/// vehicle list. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct DatasetCache {
    slot: Arc<OnceLock<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache that is already populated.
    pub fn with_dataset(dataset: Dataset) -> Self {
        let cache = Self::new();
        cache.publish(dataset);
        cache
    }

    /// Publishes the dataset. Returns false if one was already published,
    /// in which case the argument is dropped.
    pub fn publish(&self, dataset: Dataset) -> bool {
        self.slot.set(dataset).is_ok()
    }

    pub fn get(&self) -> Option<&Dataset> {
        self.slot.get()
    }

    /// All vehicles, or an empty slice while loading.
    pub fn vehicles(&self) -> &[Vehicle] {
        self.slot.get().map(Dataset::vehicles).unwrap_or(&[])
    }

    pub fn find(&self, id: u64) -> Option<&Vehicle> {
        self.slot.get().and_then(|d| d.get(id))
    }

    pub fn status(&self) -> LoadStatus {
        match self.slot.get() {
            None => LoadStatus::Loading,
            Some(dataset) => match dataset.failure() {
                Some(message) => LoadStatus::Failed {
                    message: message.to_string(),
                },
                None => LoadStatus::Ready {
                    records: dataset.len(),
                },
            },
        }
    }
}
