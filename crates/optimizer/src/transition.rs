//! Transition orchestrator: decompose the current, bound the speed, search, reconstruct.

use glider_core::geometry::{CurrentVector, Waypoint};
use glider_core::units::amp_seconds_per_m_to_amp_hours_per_km;
use glider_core::vector::{self, Vector2};
use tracing::{debug, warn};

use crate::band::feasible_band;
use crate::decompose::{CurrentDecomposition, decompose_current};
use crate::objective::{ObjectiveTerms, checked_sqrt, evaluate};
use crate::result::OptimizationResult;
use crate::{Glider, OptimizeError};

/// One start-to-end leg under a steady current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub start: Waypoint,
    pub end: Waypoint,
    pub current: CurrentVector,
    /// Science sensor powered during the leg.
    pub sensor_on: bool,
}

impl TransitionRequest {
    pub fn new(start: Waypoint, end: Waypoint, current: CurrentVector, sensor_on: bool) -> Self {
        Self {
            start,
            end,
            current,
            sensor_on,
        }
    }

    pub fn validate(&self) -> Result<(), OptimizeError> {
        let values = [
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            self.current.u,
            self.current.v,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(OptimizeError::InvalidInput(
                "waypoints and current must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Objective value at one grid point, recorded for cost-curve exports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    pub current_a: f64,
    pub speed_m_s: f64,
    pub progress_m_s: f64,
    /// A·s/m, `None` when the glider makes no headway at this setting.
    pub cost: Option<f64>,
}

impl Glider {
    /// Optimize the thruster setting for `request`.
    pub fn optimize(&self, request: &TransitionRequest) -> Result<OptimizationResult, OptimizeError> {
        self.solve(request, |_| {})
    }

    /// Like [`Glider::optimize`], also returning every evaluated grid point in order.
    pub fn optimize_with_samples(
        &self,
        request: &TransitionRequest,
    ) -> Result<(OptimizationResult, Vec<GridSample>), OptimizeError> {
        let mut samples = Vec::with_capacity(self.search.samples.saturating_add(1));
        let result = self.solve(request, |sample| samples.push(sample))?;
        Ok((result, samples))
    }

    fn solve<F>(
        &self,
        request: &TransitionRequest,
        mut observe: F,
    ) -> Result<OptimizationResult, OptimizeError>
    where
        F: FnMut(GridSample),
    {
        self.validate()?;
        request.validate()?;

        let displacement = request.start.displacement_to(&request.end);
        let current = decompose_current(&displacement, &request.current.as_vector())?;
        debug!(
            distance_m = request.start.distance_to(&request.end),
            magnitude = current.magnitude,
            parallel = current.parallel,
            perpendicular = current.perpendicular,
            "decomposed current"
        );

        let band = feasible_band(&current, &self.limits)?;
        let i_min = self.calibration.try_current_from_speed(band.min_m_s)?;
        let i_max = self.calibration.try_current_from_speed(band.max_m_s)?;

        let terms = ObjectiveTerms {
            hotel_a: self.loads.hotel(request.sensor_on),
            buoyancy_a: self.loads.buoyancy_a,
            v_parallel: current.parallel,
            v_perpendicular: current.perpendicular,
        };
        let calibration = self.calibration;
        let optimum = self.search.minimize(i_min, i_max, |i| {
            let eval = evaluate(i, &terms, &calibration)?;
            let cost = eval.cost();
            observe(GridSample {
                current_a: i,
                speed_m_s: eval.speed_m_s,
                progress_m_s: eval.progress_m_s,
                cost,
            });
            Ok(cost)
        })?;

        let Some(optimum) = optimum else {
            warn!(
                current_m_s = current.magnitude,
                "no thruster setting makes headway against the current"
            );
            return Err(OptimizeError::InfeasibleTransition {
                required_m_s: current.magnitude,
                ceiling_m_s: band.max_m_s,
            });
        };
        if optimum.skipped > 0 {
            warn!(
                skipped = optimum.skipped,
                "grid points without headway were left out of the search"
            );
        }

        let best = evaluate(optimum.current_a, &terms, &calibration)?;
        let optimal_speed = best.speed_m_s;
        let heading = vector::heading(&request.start.as_vector(), &request.end.as_vector());
        let local = local_velocity(optimal_speed, &current)?;
        let global = vector::rotate(&local, heading);

        debug!(
            current_a = optimum.current_a,
            speed_m_s = optimal_speed,
            cost = optimum.cost,
            "optimal thruster setting"
        );

        Ok(OptimizationResult {
            optimal_current_a: optimum.current_a,
            optimal_speed_m_s: optimal_speed,
            cost_amp_s_per_m: optimum.cost,
            energy_ah_per_km: amp_seconds_per_m_to_amp_hours_per_km(optimum.cost),
            total_current_a: best.total_draw_a,
            along_track_speed_m_s: best.progress_m_s,
            heading_rad: heading,
            local_velocity_m_s: local,
            global_velocity_m_s: global,
            current,
            speed_band: band,
            current_band_a: [i_min, i_max],
            sensor_on: request.sensor_on,
        })
    }
}

/// Glider velocity in the track frame. With a cross-current the glider crabs into it,
/// so the lateral component cancels the current's.
fn local_velocity(speed: f64, current: &CurrentDecomposition) -> Result<Vector2, OptimizeError> {
    if current.cross == 0.0 {
        return Ok([speed, 0.0]);
    }
    let perpendicular = current.perpendicular;
    let vx = checked_sqrt(
        speed * speed - perpendicular * perpendicular,
        "local velocity reconstruction",
    )?;
    let vy = if current.cross > 0.0 {
        -perpendicular
    } else {
        perpendicular
    };
    Ok([vx, vy])
}

/// Optimize one leg with the reference glider.
pub fn optimize(
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    current_u: f64,
    current_v: f64,
    sensor_on: bool,
) -> Result<OptimizationResult, OptimizeError> {
    let request = TransitionRequest::new(
        Waypoint::new(start_x, start_y),
        Waypoint::new(end_x, end_y),
        CurrentVector::new(current_u, current_v),
        sensor_on,
    );
    Glider::default().optimize(&request)
}
