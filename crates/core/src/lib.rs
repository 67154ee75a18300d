//! Core units, constants, and shared primitives for the glider energy optimizer workspace.

/// Physical and unit constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Metres per kilometre.
    pub const METERS_PER_KM: f64 = 1_000.0;
    /// Seconds per minute, also minutes per hour.
    pub const SIXTY: f64 = 60.0;
    /// One full turn in radians.
    pub const FULL_TURN: f64 = std::f64::consts::TAU;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{METERS_PER_KM, SIXTY};

    /// Convert a cost in amp-seconds per metre into amp-hours per kilometre
    /// (`× 1000 × 1/60 × 1/60`).
    #[inline]
    pub fn amp_seconds_per_m_to_amp_hours_per_km(v: f64) -> f64 {
        v * METERS_PER_KM * (1.0 / SIXTY) * (1.0 / SIXTY)
    }
}

/// Minimal planar vector helpers to avoid ad-hoc `[f64; 2]` math everywhere.
pub mod vector {
    use std::f64::consts::PI;

    use super::constants::FULL_TURN;

    /// Alias for a 2D vector in metres or m/s depending on context.
    pub type Vector2 = [f64; 2];

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
        a[0] * b[0] + a[1] * b[1]
    }

    /// Signed scalar cross product `a × b`. Positive when `b` lies counter-clockwise of `a`.
    #[inline]
    pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
        a[0] * b[1] - a[1] * b[0]
    }

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        v[0].hypot(v[1])
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Rotate a vector counter-clockwise by `phi` radians.
    #[inline]
    pub fn rotate(v: &Vector2, phi: f64) -> Vector2 {
        let (sin, cos) = phi.sin_cos();
        [v[0] * cos - v[1] * sin, v[0] * sin + v[1] * cos]
    }

    /// Arc-cosine of a precomputed cosine ratio.
    ///
    /// Rounding can push a ratio of two magnitudes slightly outside `[-1, 1]`;
    /// such inputs map to `π` (below) and `0` (above) instead of `NaN`.
    pub fn angle_between(cosine: f64) -> f64 {
        if cosine < -1.0 {
            PI
        } else if cosine > 1.0 {
            0.0
        } else {
            cosine.acos()
        }
    }

    /// Heading of the displacement `from → to` measured from the positive x-axis, in `[0, 2π)`.
    pub fn heading(from: &Vector2, to: &Vector2) -> f64 {
        let d = sub(to, from);
        let raw = d[1].atan2(d[0]);
        if raw < 0.0 { raw + FULL_TURN } else { raw }
    }
}

/// Value types describing a single transition.
pub mod geometry {
    use super::vector::{self, Vector2};

    /// A point in a planar projected frame (metres).
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Waypoint {
        pub x: f64,
        pub y: f64,
    }

    impl Waypoint {
        pub const fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }

        pub fn as_vector(&self) -> Vector2 {
            [self.x, self.y]
        }

        /// Displacement vector pointing from `self` to `other`.
        pub fn displacement_to(&self, other: &Waypoint) -> Vector2 {
            vector::sub(&other.as_vector(), &self.as_vector())
        }

        /// Straight-line distance to `other` in metres.
        pub fn distance_to(&self, other: &Waypoint) -> f64 {
            vector::norm(&self.displacement_to(other))
        }
    }

    /// Steady ocean current velocity (m/s), eastward `u` and northward `v`.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct CurrentVector {
        pub u: f64,
        pub v: f64,
    }

    impl CurrentVector {
        pub const fn new(u: f64, v: f64) -> Self {
            Self { u, v }
        }

        pub fn as_vector(&self) -> Vector2 {
            [self.u, self.v]
        }

        /// Current speed, always non-negative.
        pub fn magnitude(&self) -> f64 {
            vector::norm(&self.as_vector())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::units::amp_seconds_per_m_to_amp_hours_per_km;
    use super::vector::*;

    #[test]
    fn angle_between_clamps_out_of_domain_ratios() {
        assert_eq!(angle_between(-1.000_000_1), PI);
        assert_eq!(angle_between(1.000_000_1), 0.0);
        assert!((angle_between(0.0) - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn heading_is_normalised_into_one_turn() {
        assert!((heading(&[0.0, 0.0], &[1.0, 1.0]) - FRAC_PI_4).abs() < 1e-15);
        let south = heading(&[0.0, 0.0], &[0.0, -1.0]);
        assert!((south - 1.5 * PI).abs() < 1e-12);
        assert_eq!(heading(&[2.0, 3.0], &[5.0, 3.0]), 0.0);
    }

    #[test]
    fn cross_sign_tracks_side() {
        assert!(cross(&[1.0, 0.0], &[0.0, 1.0]) > 0.0);
        assert!(cross(&[1.0, 0.0], &[0.0, -1.0]) < 0.0);
        assert_eq!(cross(&[1.0, 1.0], &[2.0, 2.0]), 0.0);
    }

    #[test]
    fn waypoint_distance_and_current_speed() {
        use super::geometry::{CurrentVector, Waypoint};

        let a = Waypoint::new(1.0, 2.0);
        let b = Waypoint::new(4.0, 6.0);
        assert_eq!(a.displacement_to(&b), [3.0, 4.0]);
        assert_eq!(a.distance_to(&b), 5.0);
        assert!((CurrentVector::new(-0.3, 0.4).magnitude() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn cost_conversion_matches_hand_calculation() {
        let v = amp_seconds_per_m_to_amp_hours_per_km(3.6);
        assert!((v - 1.0).abs() < 1e-12);
    }
}
