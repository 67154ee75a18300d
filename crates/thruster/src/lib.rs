//! Thruster calibration and vehicle electrical load descriptors.

use thiserror::Error;

/// Errors raised when evaluating or validating the thruster model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThrusterError {
    #[error(
        "no real input current reaches {target_speed_m_s} m/s (discriminant {discriminant})"
    )]
    NegativeDiscriminant {
        target_speed_m_s: f64,
        discriminant: f64,
    },
    #[error("invalid thruster calibration: {0}")]
    InvalidCalibration(String),
    #[error("invalid load profile: {0}")]
    InvalidLoads(String),
}

/// Evaluate the speed curve `c0 + c1·i + c2·i²` (m/s) for input current `i` (A).
///
/// Values outside the calibrated range are returned as-is; callers bound `i`.
#[inline]
pub fn speed_from_current(i: f64, c0: f64, c1: f64, c2: f64) -> f64 {
    c0 + c1 * i + c2 * i * i
}

/// Invert the speed curve with the rising-branch root, floored at 0 A.
///
/// The discriminant `c1² − 4·c0·c2 + 4·c2·v` is not checked here; a negative
/// value produces `NaN`. Use [`ThrusterCalibration::try_current_from_speed`]
/// when the target speed is not already known to be reachable.
#[inline]
pub fn current_from_speed(v_target: f64, c0: f64, c1: f64, c2: f64) -> f64 {
    let discriminant = c1 * c1 - 4.0 * c0 * c2 + 4.0 * c2 * v_target;
    let root = (-c1 + discriminant.sqrt()) / (2.0 * c2);
    root.max(0.0)
}

/// Quadratic speed-vs-current fit for the propulsion thruster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrusterCalibration {
    /// Speed at zero input current (m/s).
    pub c0: f64,
    /// Linear coefficient (m/s per A).
    pub c1: f64,
    /// Quadratic coefficient (m/s per A²), negative for a saturating thruster.
    pub c2: f64,
}

impl Default for ThrusterCalibration {
    fn default() -> Self {
        Self {
            c0: 0.0,
            c1: 0.5,
            c2: -0.05,
        }
    }
}

impl ThrusterCalibration {
    pub const fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }

    /// Reject coefficients that leave the inverse model undefined.
    pub fn validate(&self) -> Result<(), ThrusterError> {
        if ![self.c0, self.c1, self.c2].iter().all(|c| c.is_finite()) {
            return Err(ThrusterError::InvalidCalibration(
                "coefficients must be finite".to_string(),
            ));
        }
        if self.c2 >= 0.0 {
            return Err(ThrusterError::InvalidCalibration(format!(
                "c2 must be negative, got {}",
                self.c2
            )));
        }
        if self.c1 <= 0.0 {
            return Err(ThrusterError::InvalidCalibration(format!(
                "c1 must be positive, got {}",
                self.c1
            )));
        }
        Ok(())
    }

    /// Glider-relative speed produced by input current `i`.
    #[inline]
    pub fn speed_from_current(&self, i: f64) -> f64 {
        speed_from_current(i, self.c0, self.c1, self.c2)
    }

    /// Unchecked inverse; see [`current_from_speed`].
    #[inline]
    pub fn current_from_speed(&self, v_target: f64) -> f64 {
        current_from_speed(v_target, self.c0, self.c1, self.c2)
    }

    /// Discriminant of the inverse for `v_target`. Negative means unreachable.
    #[inline]
    pub fn discriminant(&self, v_target: f64) -> f64 {
        self.c1 * self.c1 - 4.0 * self.c0 * self.c2 + 4.0 * self.c2 * v_target
    }

    /// Inverse that refuses targets above the top of the curve.
    pub fn try_current_from_speed(&self, v_target: f64) -> Result<f64, ThrusterError> {
        let discriminant = self.discriminant(v_target);
        if discriminant < 0.0 || !discriminant.is_finite() {
            return Err(ThrusterError::NegativeDiscriminant {
                target_speed_m_s: v_target,
                discriminant,
            });
        }
        Ok(self.current_from_speed(v_target))
    }

    /// Vertex of the curve: the fastest the thruster can push the glider.
    pub fn peak_speed(&self) -> f64 {
        self.c0 - self.c1 * self.c1 / (4.0 * self.c2)
    }

    /// Input current at the vertex of the curve.
    pub fn peak_current(&self) -> f64 {
        -self.c1 / (2.0 * self.c2)
    }
}

/// Steady electrical draws that do not depend on the thruster setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadProfile {
    /// Hotel load with the science sensor powered (A).
    pub hotel_sensor_on_a: f64,
    /// Hotel load with the science sensor off (A).
    pub hotel_sensor_off_a: f64,
    /// Average buoyancy engine draw (A).
    pub buoyancy_a: f64,
}

impl Default for LoadProfile {
    fn default() -> Self {
        Self {
            hotel_sensor_on_a: 0.37,
            hotel_sensor_off_a: 0.04,
            buoyancy_a: 0.10,
        }
    }
}

impl LoadProfile {
    pub fn validate(&self) -> Result<(), ThrusterError> {
        let loads = [
            ("hotel_sensor_on_a", self.hotel_sensor_on_a),
            ("hotel_sensor_off_a", self.hotel_sensor_off_a),
            ("buoyancy_a", self.buoyancy_a),
        ];
        for (name, value) in loads {
            if !value.is_finite() || value < 0.0 {
                return Err(ThrusterError::InvalidLoads(format!(
                    "{name} must be a finite non-negative current, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Hotel load selected by the sensor state flag.
    #[inline]
    pub fn hotel(&self, sensor_on: bool) -> f64 {
        if sensor_on {
            self.hotel_sensor_on_a
        } else {
            self.hotel_sensor_off_a
        }
    }

    /// Everything except the thruster: hotel plus buoyancy.
    #[inline]
    pub fn baseline(&self, sensor_on: bool) -> f64 {
        self.hotel(sensor_on) + self.buoyancy_a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_curve_reaches_the_one_metre_ceiling() {
        let cal = ThrusterCalibration::default();
        cal.validate().expect("default calibration is valid");
        assert!(cal.peak_speed() > 1.0);
        let i = cal.try_current_from_speed(1.0).expect("reachable");
        assert!((cal.speed_from_current(i) - 1.0).abs() < 1e-12);
        assert!(i < cal.peak_current());
    }

    #[test]
    fn speeds_above_the_vertex_are_rejected() {
        let cal = ThrusterCalibration::default();
        let err = cal.try_current_from_speed(2.0).unwrap_err();
        assert!(matches!(err, ThrusterError::NegativeDiscriminant { .. }));
    }

    #[test]
    fn inverse_is_floored_at_zero() {
        let cal = ThrusterCalibration::new(0.2, 0.5, -0.05);
        assert_eq!(cal.current_from_speed(0.1), 0.0);
    }

    #[test]
    fn positive_quadratic_term_is_invalid() {
        let cal = ThrusterCalibration::new(0.0, 0.5, 0.01);
        assert!(cal.validate().is_err());
    }

    #[test]
    fn hotel_load_follows_sensor_flag() {
        let loads = LoadProfile::default();
        assert_eq!(loads.hotel(true), 0.37);
        assert_eq!(loads.hotel(false), 0.04);
        assert!((loads.baseline(false) - 0.14).abs() < 1e-12);
        let bad = LoadProfile {
            buoyancy_a: -1.0,
            ..LoadProfile::default()
        };
        assert!(bad.validate().is_err());
    }
}
