//! Voltdash Core - Domain types, CSV ingestion and statistics.
//!
//! This crate provides the core functionality for Voltdash, including:
//!
//! - **Domain models**: [`Vehicle`], [`CafvEligibility`], [`GeoPoint`]
//! - **Ingestion**: [`parse_vehicles`] turns the published CSV into records
//! - **Statistics**: [`compute_stats`] derives the dashboard aggregates
//! - **Dataset**: [`DatasetCache`] holds the loaded records, [`DatasetLoader`] fills it
//! - **Traits**: [`VehicleSource`] abstracts where the CSV comes from
//!
//! # Architecture
//!
//! This crate is designed to be reusable by different frontends (CLI, server).
//! I/O lives behind the [`VehicleSource`] trait; concrete HTTP and file
//! sources are in `voltdash-client`.
//!
//! # Example
//!
//! ```
//! use voltdash_core::{compute_stats, parse_vehicles};
//!
//! let csv = "Make,Model,Model Year,Electric Range\nNISSAN,LEAF,2015,84\n";
//! let vehicles = parse_vehicles(csv).unwrap();
//! let stats = compute_stats(&vehicles);
//! assert_eq!(stats.total_vehicles, 1);
//! assert_eq!(stats.range_distribution[1].value, 1);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod ingest;
pub mod loader;
pub mod models;
pub mod stats;
pub mod traits;

// Configuration
pub use config::{DEFAULT_DATASET_URL, DatasetConfig, DatasetLocation, HttpConfig};

// Error handling
pub use error::AppError;

// Domain models
pub use models::{CafvEligibility, GeoPoint, Vehicle};

// Ingestion and statistics
pub use ingest::parse_vehicles;
pub use stats::{RangeBucket, VehicleStats, compute_stats};

// Dataset cache and loading
pub use dataset::{Dataset, DatasetCache, LoadStatus};
pub use loader::DatasetLoader;

// Export
pub use export::{ExportFormat, export_to_writer};

// Traits for dependency injection
pub use traits::VehicleSource;
