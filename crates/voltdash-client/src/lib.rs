//! Voltdash Client - Dataset sources
//!
//! This crate provides the [`VehicleSource`](voltdash_core::VehicleSource)
//! implementations used by the server and CLI:
//!
//! - [`http`] - Download the CSV over HTTP(S) with retries
//! - [`file`] - Read the CSV from a local path
//! - [`source`] - Runtime selection between the two

pub mod file;
pub mod http;
pub mod source;

pub use file::FileCsvSource;
pub use http::HttpCsvSource;
pub use source::DatasetSourceEnum;
