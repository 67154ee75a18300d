use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use glider_planner::config::{VehicleConfig, load_vehicle_configs};
use glider_planner::export::curve::{CurveRow, write_curve};
use glider_planner::export::report::{RangeLine, Report, write_report};
use glider_planner::export::summary::{Summary, write_summary};
use glider_planner::export::writer_for_path;
use glider_planner::optimizer::vehicle;
use glider_planner::optimizer::{
    CurrentVector, GridSample, OptimizationResult, RangeEstimate, TransitionRequest, Waypoint,
    estimate_range,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Find the thruster current that minimizes energy per distance for one glider leg.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Energy-optimal thruster setting for a glider transition"
)]
struct Cli {
    /// Start waypoint x (m)
    #[arg(long, allow_negative_numbers = true)]
    start_x: f64,

    /// Start waypoint y (m)
    #[arg(long, allow_negative_numbers = true)]
    start_y: f64,

    /// End waypoint x (m)
    #[arg(long, allow_negative_numbers = true)]
    end_x: f64,

    /// End waypoint y (m)
    #[arg(long, allow_negative_numbers = true)]
    end_y: f64,

    /// Eastward current component (m/s)
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    current_u: f64,

    /// Northward current component (m/s)
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    current_v: f64,

    /// Science sensor powered during the leg
    #[arg(long, default_value_t = false)]
    sensor_on: bool,

    /// Vehicle catalog: TOML file, YAML list, or directory of TOML files
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Vehicle name from the catalog (defaults to the first entry)
    #[arg(long)]
    vehicle: Option<String>,

    /// Battery capacity in Ah for a range estimate (overrides the catalog value)
    #[arg(long)]
    battery_ah: Option<f64>,

    /// Write a JSON summary (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the sampled cost curve as CSV (use '-' for stdout)
    #[arg(long)]
    curve: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let configs = match &cli.catalog {
        Some(path) => load_vehicle_configs(path)
            .with_context(|| format!("failed to load vehicle catalog {}", path.display()))?,
        None => vec![VehicleConfig::default()],
    };
    let vehicle = vehicle::select(&configs, cli.vehicle.as_deref())?;

    let request = TransitionRequest::new(
        Waypoint::new(cli.start_x, cli.start_y),
        Waypoint::new(cli.end_x, cli.end_y),
        CurrentVector::new(cli.current_u, cli.current_v),
        cli.sensor_on,
    );
    let (result, samples) = vehicle.glider.optimize_with_samples(&request)?;

    let range = cli
        .battery_ah
        .or(vehicle.battery_capacity_ah)
        .map(|capacity| estimate_range(&result, capacity))
        .transpose()?;

    let stdout_taken = [&cli.json, &cli.curve]
        .iter()
        .any(|path| path.as_deref() == Some(Path::new("-")));
    if !stdout_taken {
        let report = Report {
            vehicle: &vehicle.name,
            optimal_current_a: result.optimal_current_a,
            optimal_speed_m_s: result.optimal_speed_m_s,
            energy_ah_per_km: result.energy_loss(),
            local_velocity_m_s: result.local_velocity_m_s,
            global_velocity_m_s: result.global_velocity_m_s,
            range: range.map(|r| RangeLine {
                capacity_ah: r.capacity_ah,
                endurance_h: r.endurance_h,
                range_km: r.range_km,
            }),
        };
        let mut stdout = io::stdout().lock();
        write_report(&mut stdout, &report)?;
        stdout.flush()?;
    }

    if let Some(path) = &cli.json {
        let summary = build_summary(&vehicle.name, &request, &result, range.as_ref());
        let mut writer = writer_for_path(path)?;
        write_summary(&mut *writer, &summary)?;
        writer.flush()?;
    }

    if let Some(path) = &cli.curve {
        let rows = curve_rows(&samples, &result);
        let writer = writer_for_path(path)?;
        write_curve(writer, &rows)?;
    }

    Ok(())
}

fn build_summary<'a>(
    vehicle: &'a str,
    request: &TransitionRequest,
    result: &OptimizationResult,
    range: Option<&RangeEstimate>,
) -> Summary<'a> {
    Summary {
        vehicle,
        start: request.start.as_vector(),
        end: request.end.as_vector(),
        current: request.current.as_vector(),
        sensor_on: request.sensor_on,
        heading_rad: result.heading_rad,
        optimal_current_a: result.optimal_current_a,
        optimal_speed_m_s: result.optimal_speed_m_s,
        energy_ah_per_km: result.energy_loss(),
        local_velocity_m_s: result.local_velocity_m_s,
        global_velocity_m_s: result.global_velocity_m_s,
        speed_band_m_s: [result.speed_band.min_m_s, result.speed_band.max_m_s],
        current_band_a: result.current_band_a,
        range_km: range.map(|r| r.range_km),
        endurance_h: range.map(|r| r.endurance_h),
    }
}

fn curve_rows(samples: &[GridSample], result: &OptimizationResult) -> Vec<CurveRow> {
    samples
        .iter()
        .map(|sample| CurveRow {
            current_a: sample.current_a,
            speed_m_s: sample.speed_m_s,
            progress_m_s: sample.progress_m_s,
            cost_amp_s_per_m: sample.cost,
            selected: sample.current_a == result.optimal_current_a,
        })
        .collect()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
