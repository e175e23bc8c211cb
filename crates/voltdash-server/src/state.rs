use voltdash_core::DatasetCache;

/// Shared application state for all handlers.
///
/// Cloned per request by axum; the cache clones share one dataset slot.
#[derive(Clone)]
pub struct AppState {
    /// Write-once holder of the loaded vehicles
    pub cache: DatasetCache,

    /// Where the dataset is loaded from, for health output
    pub source: String,
}

impl AppState {
    pub fn new(cache: DatasetCache, source: impl Into<String>) -> Self {
        Self {
            cache,
            source: source.into(),
        }
    }
}
