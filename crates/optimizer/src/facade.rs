//! Re-exported APIs for consumers of the optimizer crate.

pub use crate::band::{SpeedBand, SpeedLimits, feasible_band};
pub use crate::decompose::{CurrentDecomposition, decompose_current};
pub use crate::objective::{ObjectiveTerms, cost_per_distance};
pub use crate::range::{RangeEstimate, estimate_range};
pub use crate::result::OptimizationResult;
pub use crate::search::{GridOptimum, GridSearch, MAX_SAMPLES};
pub use crate::transition::{GridSample, TransitionRequest, optimize};
pub use glider_core::geometry::{CurrentVector, Waypoint};
pub use glider_thruster::{LoadProfile, ThrusterCalibration};

pub mod vehicle {
    use glider_config::VehicleConfig;
    use glider_thruster::{LoadProfile, ThrusterCalibration};
    use thiserror::Error;

    use crate::band::SpeedLimits;
    use crate::search::GridSearch;
    use crate::{Glider, OptimizeError};

    /// Errors surfaced when selecting or converting vehicles.
    #[derive(Debug, Error)]
    pub enum VehicleError {
        #[error("vehicle '{0}' not found in catalog")]
        NotFound(String),
        #[error("vehicle catalog is empty")]
        EmptyCatalog,
        #[error("vehicle '{name}' is misconfigured: {source}")]
        Invalid {
            name: String,
            #[source]
            source: OptimizeError,
        },
    }

    /// A named, validated glider from the catalog.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Vehicle {
        pub name: String,
        pub glider: Glider,
        pub battery_capacity_ah: Option<f64>,
    }

    /// Convert a `VehicleConfig` into a runtime `Vehicle`.
    pub fn from_config(config: &VehicleConfig) -> Result<Vehicle, VehicleError> {
        let glider = Glider {
            calibration: ThrusterCalibration::new(
                config.thruster.c0,
                config.thruster.c1,
                config.thruster.c2,
            ),
            loads: LoadProfile {
                hotel_sensor_on_a: config.loads.hotel_sensor_on_a,
                hotel_sensor_off_a: config.loads.hotel_sensor_off_a,
                buoyancy_a: config.loads.buoyancy_a,
            },
            limits: SpeedLimits {
                floor_m_s: config.speed.floor_m_s,
                ceiling_m_s: config.speed.ceiling_m_s,
            },
            search: GridSearch {
                samples: config.search.samples,
                include_lower_bound: config.search.include_lower_bound,
            },
        };
        glider.validate().map_err(|source| VehicleError::Invalid {
            name: config.name.clone(),
            source,
        })?;

        Ok(Vehicle {
            name: config.name.clone(),
            glider,
            battery_capacity_ah: config.battery_capacity_ah,
        })
    }

    /// Select a vehicle by case-insensitive name, defaulting to the first catalog entry.
    pub fn select(
        configs: &[VehicleConfig],
        requested: Option<&str>,
    ) -> Result<Vehicle, VehicleError> {
        if configs.is_empty() {
            return Err(VehicleError::EmptyCatalog);
        }

        let chosen = if let Some(name) = requested {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| VehicleError::NotFound(name.to_string()))?
        } else {
            &configs[0]
        };

        from_config(chosen)
    }
}
