use std::io;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use voltdash_client::DatasetSourceEnum;
use voltdash_core::{
    AppError, DatasetLoader, Vehicle, VehicleSource, VehicleStats, compute_stats,
    export_to_writer,
};
use voltdash_cli::{Command, Config, ExportFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::parse();

    let source = DatasetSourceEnum::from_config(&config.dataset_config())
        .context("Invalid dataset source")?;
    let vehicles = load_vehicles(DatasetLoader::new(source)).await?;

    match config.command {
        Command::Stats { json } => show_stats(&vehicles, json)?,
        Command::Show { id } => show_vehicle(&vehicles, id)?,
        Command::Export { format, limit } => export(&vehicles, format, limit)?,
    }

    Ok(())
}

/// Fetches and parses the dataset, surfacing failures as errors.
async fn load_vehicles(loader: DatasetLoader<DatasetSourceEnum>) -> anyhow::Result<Vec<Vehicle>> {
    info!("Loading vehicle dataset from {}", loader.source().describe());
    let vehicles = loader
        .fetch()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to load vehicle dataset")?;
    info!("Loaded {} EV records", vehicles.len());

    Ok(vehicles)
}

fn show_stats(vehicles: &[Vehicle], json: bool) -> anyhow::Result<()> {
    let stats = compute_stats(vehicles);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_stats(&stats));
    }

    Ok(())
}

fn show_vehicle(vehicles: &[Vehicle], id: u64) -> anyhow::Result<()> {
    let vehicle = vehicles
        .iter()
        .find(|v| v.id == id)
        .ok_or(AppError::VehicleNotFound(id))?;

    print!("{}", render_vehicle(vehicle));
    Ok(())
}

fn export(vehicles: &[Vehicle], format: ExportFormat, limit: Option<usize>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let count = export_to_writer(&mut writer, vehicles, format.into(), limit)?;

    if count == 0 {
        eprintln!("No vehicles found to export.");
    } else {
        info!("Export complete: {} vehicles", count);
    }

    Ok(())
}

fn render_stats(stats: &VehicleStats) -> String {
    let mut out = String::new();

    out.push_str("\nEV Registration Statistics\n\n");
    out.push_str(&format!("  Total vehicles:        {}\n", stats.total_vehicles));
    out.push_str(&format!(
        "  CAFV eligible:         {} ({})\n",
        stats.cafv_eligible_count,
        percent(stats.cafv_eligible_count, stats.total_vehicles)
    ));
    out.push_str(&format!("  Average range:         {:.1} mi\n", stats.average_range));
    out.push_str(&format!("  Utilities:             {}\n", stats.utility_breakdown.len()));

    out.push_str("\n  Range distribution:\n");
    for bucket in &stats.range_distribution {
        out.push_str(&format!("    {:<10} {:>8}\n", bucket.range, bucket.value));
    }

    if !stats.yearly_adoption.is_empty() || stats.unknown_year_count > 0 {
        out.push_str("\n  Registrations by model year:\n");
        for year in &stats.yearly_adoption {
            out.push_str(&format!("    {:<10} {:>8}\n", year.year, year.count));
        }
    }
    if stats.unknown_year_count > 0 {
        out.push_str(&format!("    {:<10} {:>8}\n", "unknown", stats.unknown_year_count));
    }

    if !stats.top_makes.is_empty() {
        out.push_str("\n  Top makes:\n");
        for make in &stats.top_makes {
            out.push_str(&format!("    {:<20} {:>8}\n", make.make, make.count));
        }
    }

    out.push('\n');
    out
}

fn render_vehicle(vehicle: &Vehicle) -> String {
    let year = if vehicle.has_year() {
        vehicle.year.to_string()
    } else {
        "unknown".to_string()
    };
    let location = vehicle
        .location
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "\nEV #{}\n\n  Make:      {}\n  Model:     {}\n  Year:      {}\n  Range:     {} mi\n  CAFV:      {}\n  Utility:   {}\n  Location:  {}\n\n",
        vehicle.id,
        vehicle.make,
        vehicle.model,
        year,
        vehicle.range,
        vehicle.cafv,
        vehicle.utility,
        location
    )
}

fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}
