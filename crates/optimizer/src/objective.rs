//! Energy spent per metre made good toward the goal.

use glider_thruster::ThrusterCalibration;

use crate::OptimizeError;

/// Rounding slack allowed below zero under a square root before it counts as a domain error.
pub const RADICAND_TOLERANCE: f64 = 1e-12;

/// Load and current terms that stay fixed across the grid search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveTerms {
    pub hotel_a: f64,
    pub buoyancy_a: f64,
    /// Along-track current (m/s).
    pub v_parallel: f64,
    /// Cross-track current (m/s).
    pub v_perpendicular: f64,
}

/// Everything the objective derives from a single input current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub current_a: f64,
    /// Glider-relative speed from the thruster curve.
    pub speed_m_s: f64,
    /// Total draw: hotel, buoyancy, and thruster (A).
    pub total_draw_a: f64,
    /// Ground speed along the track (m/s). Non-positive means no progress.
    pub progress_m_s: f64,
}

impl Evaluation {
    /// Cost in A·s/m, or `None` when the glider makes no headway.
    pub fn cost(&self) -> Option<f64> {
        (self.progress_m_s > 0.0).then(|| self.total_draw_a / self.progress_m_s)
    }
}

/// `sqrt(value)` for values that may dip below zero by rounding.
pub(crate) fn checked_sqrt(value: f64, context: &'static str) -> Result<f64, OptimizeError> {
    if value < -RADICAND_TOLERANCE || value.is_nan() {
        return Err(OptimizeError::NumericDomain { context, value });
    }
    Ok(value.max(0.0).sqrt())
}

/// Evaluate the thruster, loads, and current geometry at input current `i`.
pub fn evaluate(
    i: f64,
    terms: &ObjectiveTerms,
    calibration: &ThrusterCalibration,
) -> Result<Evaluation, OptimizeError> {
    let speed = calibration.speed_from_current(i);
    let along_track = checked_sqrt(
        speed * speed - terms.v_perpendicular * terms.v_perpendicular,
        "objective speed decomposition",
    )?;
    Ok(Evaluation {
        current_a: i,
        speed_m_s: speed,
        total_draw_a: terms.hotel_a + terms.buoyancy_a + i,
        progress_m_s: terms.v_parallel + along_track,
    })
}

/// `(hotel + buoyancy + i) / (v_parallel + sqrt(speed(i)² − v_perp²))` in A·s/m.
pub fn cost_per_distance(
    i: f64,
    terms: &ObjectiveTerms,
    calibration: &ThrusterCalibration,
) -> Result<f64, OptimizeError> {
    let eval = evaluate(i, terms, calibration)?;
    Ok(eval.total_draw_a / eval.progress_m_s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALM: ObjectiveTerms = ObjectiveTerms {
        hotel_a: 0.04,
        buoyancy_a: 0.10,
        v_parallel: 0.0,
        v_perpendicular: 0.0,
    };

    #[test]
    fn calm_water_cost_is_draw_over_speed() {
        let cal = ThrusterCalibration::default();
        let cost = cost_per_distance(1.0, &CALM, &cal).unwrap();
        // speed(1 A) = 0.45 m/s, draw = 1.14 A
        assert!((cost - 1.14 / 0.45).abs() < 1e-12);
    }

    #[test]
    fn cross_current_faster_than_glider_is_a_domain_error() {
        let cal = ThrusterCalibration::default();
        let terms = ObjectiveTerms {
            v_perpendicular: 0.8,
            ..CALM
        };
        let err = cost_per_distance(0.5, &terms, &cal).unwrap_err();
        assert!(matches!(err, OptimizeError::NumericDomain { .. }));
    }

    #[test]
    fn head_current_stronger_than_glider_makes_no_progress() {
        let cal = ThrusterCalibration::default();
        let terms = ObjectiveTerms {
            v_parallel: -0.6,
            ..CALM
        };
        let eval = evaluate(1.0, &terms, &cal).unwrap();
        assert!(eval.progress_m_s < 0.0);
        assert_eq!(eval.cost(), None);
    }
}
