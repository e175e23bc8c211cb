use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::LazyLock;

use voltdash_core::{DatasetConfig, ExportFormat as CoreExportFormat};

static VERSION_INFO: LazyLock<String> = LazyLock::new(|| {
    let version = env!("CARGO_PKG_VERSION");

    let commit = option_env!("VERGEN_GIT_SHA")
        .map(|s| s.chars().take(7).collect::<String>())
        .unwrap_or_else(|| "unknown".to_string());

    let built = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"); // YYYY-MM-DD
    let target = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");
    let rustc = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");

    format!("{version}\ncommit: {commit}\nbuilt: {built}\ntarget: {target}\nrustc: {rustc}")
});

pub fn version_info() -> &'static str {
    &VERSION_INFO
}

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "voltdash")]
#[command(
    author,
    version = version_info(),
    about = "Explore electric vehicle registration data"
)]
#[command(after_help = "Examples:
  voltdash stats
  voltdash stats --json > stats.json
  voltdash show 42
  voltdash export --format csv --limit 100 > sample.csv
  voltdash --dataset-path ./Electric_Vehicle_Population_Data.csv stats")]
pub struct Config {
    /// URL of the vehicle population CSV
    #[arg(long, global = true, env = "DATASET_URL")]
    pub dataset_url: Option<String>,

    /// Local CSV file to read instead of downloading (takes precedence over the URL)
    #[arg(long, global = true, env = "DATASET_PATH")]
    pub dataset_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    pub fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig::from_args(self.dataset_url.clone(), self.dataset_path.clone())
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show aggregate statistics for the dataset
    Stats {
        /// Print the raw statistics object as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single vehicle record
    #[command(after_help = "Example: voltdash show 42")]
    Show {
        /// Sequential record id (1-based)
        id: u64,
    },
    /// Export vehicle records to stdout
    #[command(after_help = "Examples:
  voltdash export --format jsonl > vehicles.jsonl
  voltdash export --format json --limit 10")]
    Export {
        /// Output format for exported data
        #[arg(short, long, default_value = "jsonl")]
        format: ExportFormat,
        /// Maximum number of records to export
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Supported export formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON Lines format (one JSON object per line)
    Jsonl,
    /// Standard JSON array format
    Json,
    /// CSV format (comma-separated values)
    Csv,
}

impl From<ExportFormat> for CoreExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Jsonl => CoreExportFormat::Jsonl,
            ExportFormat::Json => CoreExportFormat::Json,
            ExportFormat::Csv => CoreExportFormat::Csv,
        }
    }
}
