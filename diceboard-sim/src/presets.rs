//! Catalog of multiplier plans the driver can run.

use clap::ValueEnum;

use diceboard_game::{BOARD_LEN, MultiplierMap, MultiplierPlan, Space};

/// Hand-tuned map boosting the six spaces flanking both wheel clusters.
pub const SIX_BY_TEN: MultiplierMap = [
    1, 1, 1, 1, 1, 1, 1, 10, 10, 10, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 10, 10, 10, 1,
];

/// Hand-tuned map boosting five spaces around the wheels.
pub const FIVE_BY_TEN: MultiplierMap = [
    1, 1, 1, 1, 1, 1, 1, 1, 10, 10, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 10, 10, 10, 1,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanKind {
    /// Optimizer-derived assignment, one map per boost tier
    Best,
    /// Hand-tuned 6-space x10 map at every tier
    SixByTen,
    /// Hand-tuned 5-space x10 map at every tier
    FiveByTen,
    /// No boosts anywhere
    Unboosted,
}

impl PlanKind {
    #[must_use]
    pub fn build(self, board: &[Space; BOARD_LEN]) -> MultiplierPlan {
        match self {
            Self::Best => MultiplierPlan::optimized("BestMultipliers", board),
            Self::SixByTen => MultiplierPlan::uniform("6x10", SIX_BY_TEN),
            Self::FiveByTen => MultiplierPlan::uniform("5x10", FIVE_BY_TEN),
            Self::Unboosted => MultiplierPlan::uniform("Unboosted", [1; BOARD_LEN]),
        }
    }
}
