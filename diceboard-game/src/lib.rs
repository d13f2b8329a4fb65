//! Diceboard Game Engine
//!
//! Platform-agnostic core logic for the Diceboard dice event: the 24-space
//! board model, the breakpoint-driven dice economy, the per-run simulation
//! engine, and the analytic multiplier optimizer. This crate performs no
//! I/O; batch driving and reporting live in `diceboard-sim`.

pub mod board;
pub mod constants;
pub mod engine;
pub mod numbers;
pub mod optimizer;
pub mod plan;
pub mod seed;
pub mod state;

// Re-export commonly used types
pub use board::{Space, SpaceValue, standard_board};
pub use constants::BOARD_LEN;
pub use engine::simulate_run;
pub use optimizer::{LandedValue, compute_best_multipliers, landed_values};
pub use plan::{MultiplierMap, MultiplierPlan, PlanError};
pub use seed::{derive_trial_seed, trial_rng};
pub use state::{HistoryEntry, RunResult, RunState};
