use glider_core::vector::Vector2;

use crate::band::SpeedBand;
use crate::decompose::CurrentDecomposition;

/// Outcome of a single transition optimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationResult {
    /// Thruster input current minimizing energy per distance (A).
    pub optimal_current_a: f64,
    /// Glider-relative speed at that current (m/s).
    pub optimal_speed_m_s: f64,
    /// Minimized cost (A·s/m).
    pub cost_amp_s_per_m: f64,
    /// Minimized cost (A·h/km).
    pub energy_ah_per_km: f64,
    /// Hotel, buoyancy, and thruster draw combined (A).
    pub total_current_a: f64,
    /// Ground speed made good along the track (m/s).
    pub along_track_speed_m_s: f64,
    /// Heading from start to end, `[0, 2π)`.
    pub heading_rad: f64,
    /// Glider velocity in the track-aligned frame (x along track, y to the left).
    pub local_velocity_m_s: Vector2,
    /// Glider velocity in the fixed projected frame.
    pub global_velocity_m_s: Vector2,
    pub current: CurrentDecomposition,
    pub speed_band: SpeedBand,
    /// Input currents bounding the grid search (A).
    pub current_band_a: [f64; 2],
    pub sensor_on: bool,
}

impl OptimizationResult {
    /// Energy loss per kilometre made good (A·h/km).
    pub fn energy_loss(&self) -> f64 {
        self.energy_ah_per_km
    }

    /// Global-frame glider velocity `(vx, vy)`.
    pub fn global_velocity(&self) -> (f64, f64) {
        (self.global_velocity_m_s[0], self.global_velocity_m_s[1])
    }

    /// Track-frame glider velocity `(vx, vy)`.
    pub fn local_velocity(&self) -> (f64, f64) {
        (self.local_velocity_m_s[0], self.local_velocity_m_s[1])
    }
}
