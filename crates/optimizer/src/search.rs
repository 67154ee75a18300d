//! Dense one-dimensional grid search over the thruster input current.

use tracing::trace;

use crate::OptimizeError;

/// Largest grid a vehicle profile may request.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Grid search settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSearch {
    /// Number of equal steps between the lower and upper current.
    pub samples: usize,
    /// Evaluate the lower end itself as well as the `samples` interior/upper points.
    pub include_lower_bound: bool,
}

impl Default for GridSearch {
    fn default() -> Self {
        Self {
            samples: 100,
            include_lower_bound: false,
        }
    }
}

/// Best grid point found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOptimum {
    pub current_a: f64,
    pub cost: f64,
    /// Points where the objective returned a cost.
    pub evaluated: usize,
    /// Points where the objective declined to score.
    pub skipped: usize,
}

impl GridSearch {
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if self.samples == 0 {
            return Err(OptimizeError::InvalidInput(
                "grid search needs at least one sample".to_string(),
            ));
        }
        if self.samples > MAX_SAMPLES {
            return Err(OptimizeError::InvalidInput(format!(
                "grid search allows at most {MAX_SAMPLES} samples, got {}",
                self.samples
            )));
        }
        Ok(())
    }

    /// Candidate currents `lower + k·step`, `k = 1..=samples` (from 0 when the lower end is included).
    pub fn candidates(self, lower: f64, upper: f64) -> impl Iterator<Item = f64> {
        let step = (upper - lower) / self.samples as f64;
        let first = if self.include_lower_bound { 0 } else { 1 };
        (first..=self.samples).map(move |k| lower + k as f64 * step)
    }

    /// Minimize `objective` over the grid. Ties keep the earliest point.
    ///
    /// The objective returns `Ok(None)` for points it cannot score; `Ok(None)` from this
    /// function means no point was scored.
    pub fn minimize<F>(
        &self,
        lower: f64,
        upper: f64,
        mut objective: F,
    ) -> Result<Option<GridOptimum>, OptimizeError>
    where
        F: FnMut(f64) -> Result<Option<f64>, OptimizeError>,
    {
        self.validate()?;
        let mut best: Option<(f64, f64)> = None;
        let mut evaluated = 0;
        let mut skipped = 0;

        for current in self.candidates(lower, upper) {
            let Some(cost) = objective(current)? else {
                skipped += 1;
                continue;
            };
            evaluated += 1;
            trace!(current, cost, "grid sample");
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((current, cost));
            }
        }

        Ok(best.map(|(current_a, cost)| GridOptimum {
            current_a,
            cost,
            evaluated,
            skipped,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bound_is_excluded_by_default() {
        let grid = GridSearch {
            samples: 4,
            include_lower_bound: false,
        };
        let points: Vec<f64> = grid.candidates(0.0, 1.0).collect();
        assert_eq!(points, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn lower_bound_can_be_included() {
        let grid = GridSearch {
            samples: 4,
            include_lower_bound: true,
        };
        assert_eq!(grid.candidates(0.0, 1.0).count(), 5);
    }

    #[test]
    fn ties_keep_the_first_minimum() {
        let grid = GridSearch {
            samples: 4,
            include_lower_bound: false,
        };
        let optimum = grid
            .minimize(0.0, 1.0, |x| Ok(Some(if x < 0.6 { 1.0 } else { 2.0 })))
            .unwrap()
            .unwrap();
        assert_eq!(optimum.current_a, 0.25);
        assert_eq!(optimum.evaluated, 4);
    }

    #[test]
    fn unscored_points_are_skipped() {
        let grid = GridSearch::default();
        let optimum = grid
            .minimize(0.0, 1.0, |x| Ok((x > 0.505).then_some(x)))
            .unwrap()
            .unwrap();
        assert_eq!(optimum.skipped, 50);
        assert!((optimum.current_a - 0.51).abs() < 1e-12);

        let none = grid.minimize(0.0, 1.0, |_| Ok(None)).unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn zero_samples_is_invalid() {
        let grid = GridSearch {
            samples: 0,
            include_lower_bound: false,
        };
        assert!(grid.minimize(0.0, 1.0, |x| Ok(Some(x))).is_err());
    }

    #[test]
    fn oversized_grid_is_invalid() {
        let grid = GridSearch {
            samples: MAX_SAMPLES + 1,
            include_lower_bound: true,
        };
        assert!(matches!(grid.validate(), Err(OptimizeError::InvalidInput(_))));
        let largest = GridSearch {
            samples: MAX_SAMPLES,
            ..grid
        };
        assert!(largest.validate().is_ok());
    }
}
