use std::fs;
use std::io::Write;

use glider_planner::export::curve::{CurveRow, write_curve};
use glider_planner::export::report::{RangeLine, Report, write_report};
use glider_planner::export::summary::{Summary, write_summary};
use glider_planner::export::writer_for_path;
use glider_planner::optimize;
use tempfile::tempdir;

#[test]
fn report_lists_every_figure() {
    let result = optimize(0.0, 0.0, 1.0, 1.0, 0.0, 0.0, false).unwrap();
    let report = Report {
        vehicle: "Reference Glider",
        optimal_current_a: result.optimal_current_a,
        optimal_speed_m_s: result.optimal_speed_m_s,
        energy_ah_per_km: result.energy_loss(),
        local_velocity_m_s: result.local_velocity_m_s,
        global_velocity_m_s: result.global_velocity_m_s,
        range: Some(RangeLine {
            capacity_ah: 800.0,
            endurance_h: 1200.0,
            range_km: 3456.7,
        }),
    };

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.starts_with("=== Transition Optimum (Reference Glider) ==="));
    assert!(text.contains(&format!("Input current   : {:.4} A", result.optimal_current_a)));
    assert!(text.contains("Energy loss"));
    assert!(text.contains("Local velocity  : vx ="));
    assert!(text.contains("vy = 0.0000 m/s"));
    assert!(text.contains("Battery range   : 3456.7 km over 1200.0 h (800.0 Ah)"));
}

#[test]
fn summary_is_pretty_json_without_missing_range() {
    let summary = Summary {
        vehicle: "Coastal Glider",
        start: [0.0, 0.0],
        end: [10.0, 0.0],
        current: [0.1, 0.0],
        sensor_on: true,
        heading_rad: 0.0,
        optimal_current_a: 1.2,
        optimal_speed_m_s: 0.53,
        energy_ah_per_km: 0.4,
        local_velocity_m_s: [0.53, 0.0],
        global_velocity_m_s: [0.53, 0.0],
        speed_band_m_s: [0.1, 0.9],
        current_band_a: [0.1, 2.9],
        range_km: None,
        endurance_h: None,
    };

    let dir = tempdir().unwrap();
    let path = dir.path().join("out/summary.json");
    {
        let mut writer = writer_for_path(&path).unwrap();
        write_summary(&mut *writer, &summary).unwrap();
        writer.flush().unwrap();
    }

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["vehicle"], "Coastal Glider");
    assert_eq!(value["sensor_on"], true);
    assert_eq!(value["current_band_a"][1], 2.9);
    assert!(value.get("range_km").is_none());
    assert!(value.get("endurance_h").is_none());
}

#[test]
fn curve_leaves_cost_empty_without_headway() {
    let rows = [
        CurveRow {
            current_a: 0.5,
            speed_m_s: 0.2375,
            progress_m_s: -0.0625,
            cost_amp_s_per_m: None,
            selected: false,
        },
        CurveRow {
            current_a: 1.0,
            speed_m_s: 0.45,
            progress_m_s: 0.15,
            cost_amp_s_per_m: Some(7.6),
            selected: true,
        },
    ];

    let mut buffer = Vec::new();
    write_curve(&mut buffer, &rows).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "current_a,speed_m_s,progress_m_s,cost_amp_s_per_m,selected"
    );
    assert_eq!(lines[1], "0.5,0.2375,-0.0625,,false");
    assert_eq!(lines[2], "1.0,0.45,0.15,7.6,true");
}
