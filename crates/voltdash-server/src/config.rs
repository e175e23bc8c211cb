use clap::Parser;
use std::path::PathBuf;

use voltdash_core::DatasetConfig;

/// Origins of the dashboard frontend allowed by default.
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,https://electro-khaki.vercel.app";

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "voltdash-server")]
#[command(author, version, about = "REST API server for the Voltdash EV dashboard")]
pub struct ServerConfig {
    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// URL of the vehicle population CSV
    #[arg(long, env = "DATASET_URL")]
    pub dataset_url: Option<String>,

    /// Local CSV file to load instead of downloading (takes precedence over the URL)
    #[arg(long, env = "DATASET_PATH")]
    pub dataset_path: Option<PathBuf>,

    /// Comma-separated list of allowed CORS origins, or "*" for any
    #[arg(long, env = "CORS_ORIGINS", default_value = DEFAULT_CORS_ORIGINS)]
    pub cors_origins: String,

    /// Requests per second allowed per client IP (0 disables rate limiting)
    #[arg(long, env = "RATE_LIMIT_RPS", default_value = "10")]
    pub rate_limit_rps: u32,

    /// Burst size for the per-IP rate limiter
    #[arg(long, env = "RATE_LIMIT_BURST", default_value = "50")]
    pub rate_limit_burst: u32,
}

impl ServerConfig {
    pub fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig::from_args(self.dataset_url.clone(), self.dataset_path.clone())
    }
}
