//! Export helpers for optimization reports, JSON summaries, and cost-curve CSVs.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::io::{self, Write};

    /// Figures printed by the diagnostic report.
    #[derive(Debug, Clone)]
    pub struct Report<'a> {
        pub vehicle: &'a str,
        pub optimal_current_a: f64,
        pub optimal_speed_m_s: f64,
        pub energy_ah_per_km: f64,
        pub local_velocity_m_s: [f64; 2],
        pub global_velocity_m_s: [f64; 2],
        pub range: Option<RangeLine>,
    }

    #[derive(Debug, Clone, Copy)]
    pub struct RangeLine {
        pub capacity_ah: f64,
        pub endurance_h: f64,
        pub range_km: f64,
    }

    /// Write the human-readable report.
    pub fn write_report(writer: &mut dyn Write, report: &Report<'_>) -> io::Result<()> {
        writeln!(writer, "=== Transition Optimum ({}) ===", report.vehicle)?;
        writeln!(
            writer,
            "Input current   : {:.4} A",
            report.optimal_current_a
        )?;
        writeln!(
            writer,
            "Optimal velocity: {:.4} m/s",
            report.optimal_speed_m_s
        )?;
        writeln!(
            writer,
            "Energy loss     : {:.4} Ah/km",
            report.energy_ah_per_km
        )?;
        writeln!(
            writer,
            "Local velocity  : vx = {:.4} m/s, vy = {:.4} m/s",
            report.local_velocity_m_s[0], report.local_velocity_m_s[1]
        )?;
        writeln!(
            writer,
            "Global velocity : vx = {:.4} m/s, vy = {:.4} m/s",
            report.global_velocity_m_s[0], report.global_velocity_m_s[1]
        )?;
        if let Some(range) = &report.range {
            writeln!(
                writer,
                "Battery range   : {:.1} km over {:.1} h ({:.1} Ah)",
                range.range_km, range.endurance_h, range.capacity_ah
            )?;
        }
        Ok(())
    }
}

pub mod summary {
    use std::io::Write;

    use serde::Serialize;

    use crate::ExportError;

    /// JSON summary of one optimized transition.
    #[derive(Debug, Clone, Serialize)]
    pub struct Summary<'a> {
        pub vehicle: &'a str,
        pub start: [f64; 2],
        pub end: [f64; 2],
        pub current: [f64; 2],
        pub sensor_on: bool,
        pub heading_rad: f64,
        pub optimal_current_a: f64,
        pub optimal_speed_m_s: f64,
        pub energy_ah_per_km: f64,
        pub local_velocity_m_s: [f64; 2],
        pub global_velocity_m_s: [f64; 2],
        pub speed_band_m_s: [f64; 2],
        pub current_band_a: [f64; 2],
        #[serde(skip_serializing_if = "Option::is_none")]
        pub range_km: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub endurance_h: Option<f64>,
    }

    pub fn write_summary(writer: &mut dyn Write, summary: &Summary<'_>) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, summary)?;
        writeln!(writer)?;
        Ok(())
    }
}

pub mod curve {
    use std::io::Write;

    use serde::Serialize;

    use crate::ExportError;

    /// One sampled point of the energy-per-distance curve.
    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct CurveRow {
        pub current_a: f64,
        pub speed_m_s: f64,
        pub progress_m_s: f64,
        /// Empty when the glider makes no headway at this setting.
        pub cost_amp_s_per_m: Option<f64>,
        pub selected: bool,
    }

    /// Write the sampled cost curve as CSV with a header row.
    pub fn write_curve<W: Write>(writer: W, rows: &[CurveRow]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in rows {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }
}
