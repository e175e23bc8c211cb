//! Request DTOs for API endpoints.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Optional paging for the vehicle list.
///
/// Without either parameter the full dataset is returned.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListQuery {
    /// Maximum number of records to return
    #[param(example = 100)]
    pub limit: Option<usize>,

    /// Number of records to skip (default: 0)
    #[param(example = 0)]
    pub offset: Option<usize>,
}

impl ListQuery {
    /// Returns the requested window of `items`, clamped to its bounds.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.unwrap_or(0).min(items.len());
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(items.len()),
            None => items.len(),
        };
        &items[start..end]
    }
}
