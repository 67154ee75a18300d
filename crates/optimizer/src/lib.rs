//! Thruster setting that minimizes energy per distance for a glider leg under a steady current.
//!
//! The pipeline is a single pass per call: decompose the current against the heading,
//! bound the through-water speed, grid-search the input current, then rebuild the
//! glider velocity in the track and global frames. Nothing is cached between calls,
//! so a [`Glider`] can be shared across threads freely.

pub mod band;
pub mod decompose;
pub mod objective;
pub mod range;
pub mod result;
pub mod search;
pub mod transition;

mod error;
mod facade;

pub use error::OptimizeError;
pub use facade::*;

/// Everything that describes a particular vehicle to the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glider {
    pub calibration: ThrusterCalibration,
    pub loads: LoadProfile,
    pub limits: SpeedLimits,
    pub search: GridSearch,
}

impl Glider {
    /// Check every part. A ceiling above the thruster peak is left to the search, which
    /// reports it as a numeric domain error.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        self.calibration.validate()?;
        self.loads.validate()?;
        self.limits.validate()?;
        self.search.validate()?;
        Ok(())
    }
}
