//! Split the ocean current into along-track and cross-track components.

use glider_core::vector::{self, Vector2};

use crate::OptimizeError;

/// Current expressed relative to the intended heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentDecomposition {
    /// Current speed (m/s).
    pub magnitude: f64,
    /// Angle between displacement and current. `None` when there is no current.
    pub theta: Option<f64>,
    /// Along-track component; negative for an adverse current.
    pub parallel: f64,
    /// Cross-track component, `magnitude · sin θ`.
    pub perpendicular: f64,
    /// Signed `displacement × current`; positive when the current sets to the left of track.
    pub cross: f64,
}

impl CurrentDecomposition {
    pub fn is_adverse(&self) -> bool {
        self.parallel < 0.0
    }
}

/// Decompose `current` against the `displacement` direction.
pub fn decompose_current(
    displacement: &Vector2,
    current: &Vector2,
) -> Result<CurrentDecomposition, OptimizeError> {
    let distance = vector::norm(displacement);
    if distance == 0.0 {
        return Err(OptimizeError::DegenerateTransition);
    }

    let magnitude = vector::norm(current);
    let cross = vector::cross(displacement, current);
    if magnitude == 0.0 {
        return Ok(CurrentDecomposition {
            magnitude,
            theta: None,
            parallel: 0.0,
            perpendicular: 0.0,
            cross,
        });
    }

    let cosine = vector::dot(displacement, current) / (distance * magnitude);
    let theta = vector::angle_between(cosine);
    Ok(CurrentDecomposition {
        magnitude,
        theta: Some(theta),
        parallel: magnitude * theta.cos(),
        perpendicular: magnitude * theta.sin(),
        cross,
    })
}
