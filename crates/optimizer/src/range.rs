//! Battery-limited range and endurance for an optimized leg.

use crate::OptimizeError;
use crate::result::OptimizationResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeEstimate {
    pub capacity_ah: f64,
    /// Hours until the battery is flat at the optimal setting.
    pub endurance_h: f64,
    /// Distance made good along track before the battery is flat.
    pub range_km: f64,
}

/// Range and endurance if the whole `capacity_ah` is spent at the optimum of `result`.
pub fn estimate_range(
    result: &OptimizationResult,
    capacity_ah: f64,
) -> Result<RangeEstimate, OptimizeError> {
    if !capacity_ah.is_finite() || capacity_ah <= 0.0 {
        return Err(OptimizeError::InvalidInput(format!(
            "battery capacity must be positive, got {capacity_ah}"
        )));
    }
    Ok(RangeEstimate {
        capacity_ah,
        endurance_h: capacity_ah / result.total_current_a,
        range_km: capacity_ah / result.energy_loss(),
    })
}
