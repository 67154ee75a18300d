//! Energy-optimal thruster planning for a single underwater glider transition.
//!
//! The physics and search live in the workspace crates; this crate re-exports them
//! under one roof so the CLI and downstream tools share a single entry point.

pub use glider_config as config;
pub use glider_core as primitives;
pub use glider_export as export;
pub use glider_optimizer as optimizer;
pub use glider_thruster as thruster;

pub use glider_optimizer::{
    Glider, OptimizationResult, OptimizeError, TransitionRequest, optimize,
};
