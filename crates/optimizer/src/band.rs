//! Feasible through-water speed band for a transition.

use tracing::debug;

use crate::OptimizeError;
use crate::decompose::CurrentDecomposition;

/// Vehicle speed limits (m/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    /// Slowest speed worth commanding.
    pub floor_m_s: f64,
    /// Fastest the vehicle is allowed to go.
    pub ceiling_m_s: f64,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            floor_m_s: 0.05,
            ceiling_m_s: 1.0,
        }
    }
}

impl SpeedLimits {
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if !self.floor_m_s.is_finite() || !self.ceiling_m_s.is_finite() {
            return Err(OptimizeError::InvalidInput(
                "speed limits must be finite".to_string(),
            ));
        }
        if self.floor_m_s < 0.0 || self.ceiling_m_s <= 0.0 {
            return Err(OptimizeError::InvalidInput(format!(
                "speed limits must be positive (floor {}, ceiling {})",
                self.floor_m_s, self.ceiling_m_s
            )));
        }
        if self.floor_m_s > self.ceiling_m_s {
            return Err(OptimizeError::InvalidInput(format!(
                "speed floor {} m/s is above the ceiling {} m/s",
                self.floor_m_s, self.ceiling_m_s
            )));
        }
        Ok(())
    }
}

/// Closed interval of admissible glider-relative speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBand {
    pub min_m_s: f64,
    pub max_m_s: f64,
}

/// Derive the speed band for a decomposed current.
///
/// The lower edge is the larger of the floor and the cross-track current the glider
/// has to cancel. The transition is rejected when that edge exceeds the ceiling, or
/// when the along-track current alone runs faster than the ceiling.
pub fn feasible_band(
    current: &CurrentDecomposition,
    limits: &SpeedLimits,
) -> Result<SpeedBand, OptimizeError> {
    let cross_requirement = if current.parallel < 0.0 {
        current.perpendicular.abs()
    } else {
        current.perpendicular
    };
    let min_m_s = limits.floor_m_s.max(cross_requirement);
    let max_m_s = limits.ceiling_m_s;

    if min_m_s > max_m_s {
        return Err(OptimizeError::InfeasibleTransition {
            required_m_s: min_m_s,
            ceiling_m_s: max_m_s,
        });
    }
    if current.parallel.abs() > max_m_s {
        return Err(OptimizeError::InfeasibleTransition {
            required_m_s: current.parallel.abs(),
            ceiling_m_s: max_m_s,
        });
    }

    debug!(min_m_s, max_m_s, "feasible speed band");
    Ok(SpeedBand { min_m_s, max_m_s })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decomposition(parallel: f64, perpendicular: f64) -> CurrentDecomposition {
        CurrentDecomposition {
            magnitude: parallel.hypot(perpendicular),
            theta: Some(perpendicular.atan2(parallel)),
            parallel,
            perpendicular,
            cross: perpendicular,
        }
    }

    #[test]
    fn weak_current_uses_the_floor() {
        let band = feasible_band(&decomposition(0.01, 0.02), &SpeedLimits::default()).unwrap();
        assert_eq!(band.min_m_s, 0.05);
        assert_eq!(band.max_m_s, 1.0);
    }

    #[test]
    fn strong_cross_current_raises_the_floor() {
        let band = feasible_band(&decomposition(-0.1, 0.6), &SpeedLimits::default()).unwrap();
        assert!((band.min_m_s - 0.6).abs() < 1e-12);
    }

    #[test]
    fn floor_above_ceiling_is_invalid() {
        let limits = SpeedLimits {
            floor_m_s: 0.9,
            ceiling_m_s: 0.6,
        };
        assert!(matches!(limits.validate(), Err(OptimizeError::InvalidInput(_))));
        assert!(SpeedLimits::default().validate().is_ok());
    }

    #[test]
    fn cross_current_above_ceiling_is_infeasible() {
        let err = feasible_band(&decomposition(0.0, 1.2), &SpeedLimits::default()).unwrap_err();
        assert!(matches!(err, OptimizeError::InfeasibleTransition { .. }));
    }
}
