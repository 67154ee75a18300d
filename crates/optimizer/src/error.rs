use glider_thruster::ThrusterError;

/// Errors surfaced while optimizing a transition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    /// The glider cannot hold the track within its speed band. Deterministic; retrying
    /// with the same inputs cannot succeed.
    #[error(
        "unreachable transition: required speed {required_m_s:.3} m/s exceeds the {ceiling_m_s:.3} m/s ceiling"
    )]
    InfeasibleTransition { required_m_s: f64, ceiling_m_s: f64 },
    /// A square root or inverse would have been taken outside its domain.
    #[error("numeric domain violation in {context}: {value}")]
    NumericDomain { context: &'static str, value: f64 },
    #[error("start and end waypoints coincide; heading is undefined")]
    DegenerateTransition,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<ThrusterError> for OptimizeError {
    fn from(err: ThrusterError) -> Self {
        match err {
            ThrusterError::NegativeDiscriminant { discriminant, .. } => {
                OptimizeError::NumericDomain {
                    context: "inverse thruster model",
                    value: discriminant,
                }
            }
            other => OptimizeError::InvalidInput(other.to_string()),
        }
    }
}
