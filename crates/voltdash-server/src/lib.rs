//! Voltdash Server - REST API for the EV registration dashboard
//!
//! This crate serves the in-memory vehicle dataset over HTTP:
//!
//! - **Vehicles**: list all records, or fetch one by id
//! - **Stats**: eligibility, utility, range and adoption aggregates
//! - **Health**: dataset load status
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
