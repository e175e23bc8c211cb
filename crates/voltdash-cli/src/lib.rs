//! Voltdash CLI - command-line access to the EV registration dataset.

pub mod config;

pub use config::{Command, Config, ExportFormat, version_info};
