//! Trait definitions for external dependencies.
//!
//! The loader only needs "give me the CSV text"; where the text comes from
//! (HTTP download, local file, a fixture in tests) is behind [`VehicleSource`].

use std::future::Future;

use crate::AppError;

/// Source of the raw vehicle CSV document.
pub trait VehicleSource: Send + Sync + Clone {
    /// Short human-readable description used in logs and health output.
    fn describe(&self) -> String;

    /// Fetches the full CSV document as text.
    fn fetch_csv(&self) -> impl Future<Output = Result<String, AppError>> + Send;
}
