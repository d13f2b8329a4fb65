//! Multiplier plans: which boost each space rolls with at each turn-budget
//! tier. A plan is built once before simulation and read-only afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Space;
use crate::constants::{BOARD_LEN, TIER2_TURNS, TIER3_TURNS, TIER5_TURNS, TIER10_TURNS};
use crate::optimizer::compute_best_multipliers;

/// Per-space multipliers for one tier, clockwise from the start space.
pub type MultiplierMap = [u64; BOARD_LEN];

/// Validation failures for externally supplied multiplier maps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("multiplier map must have {expected} entries, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("multiplier for space {space} must be at least 1")]
    ZeroMultiplier { space: usize },
}

/// A labelled multiplier plan with one map per turn-budget tier.
///
/// The four tiers correspond to the maximum boost the event allows at each
/// remaining-turn threshold: x2 from 20 turns, x3 from 30, x5 from 50 and
/// x10 from 100. Below 20 turns every roll is unboosted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierPlan {
    pub label: String,
    tier2: MultiplierMap,
    tier3: MultiplierMap,
    tier5: MultiplierMap,
    tier10: MultiplierMap,
}

impl MultiplierPlan {
    /// Build a plan from explicit per-tier maps.
    #[must_use]
    pub fn from_tiers(
        label: impl Into<String>,
        tier2: MultiplierMap,
        tier3: MultiplierMap,
        tier5: MultiplierMap,
        tier10: MultiplierMap,
    ) -> Self {
        Self {
            label: label.into(),
            tier2,
            tier3,
            tier5,
            tier10,
        }
    }

    /// Build a plan applying the same map at every tier.
    #[must_use]
    pub fn uniform(label: impl Into<String>, map: MultiplierMap) -> Self {
        Self::from_tiers(label, map, map, map, map)
    }

    /// Build a uniform plan from an externally supplied slice.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` when the slice is not exactly board-length or
    /// contains a zero multiplier.
    pub fn uniform_from_slice(label: impl Into<String>, values: &[u64]) -> Result<Self, PlanError> {
        if values.len() != BOARD_LEN {
            return Err(PlanError::WrongLength {
                expected: BOARD_LEN,
                found: values.len(),
            });
        }
        if let Some(space) = values.iter().position(|&m| m == 0) {
            return Err(PlanError::ZeroMultiplier { space });
        }
        let mut map = [1; BOARD_LEN];
        map.copy_from_slice(values);
        Ok(Self::uniform(label, map))
    }

    /// Build the optimizer-derived plan: each tier map maximizes the
    /// steady-state points-per-die metric for that tier's boost budget.
    #[must_use]
    pub fn optimized(label: impl Into<String>, board: &[Space; BOARD_LEN]) -> Self {
        Self::from_tiers(
            label,
            compute_best_multipliers(board, 2),
            compute_best_multipliers(board, 3),
            compute_best_multipliers(board, 5),
            compute_best_multipliers(board, 10),
        )
    }

    /// The tier map unlocked by the given remaining turn budget, or `None`
    /// below the lowest tier (every roll is then unboosted).
    #[must_use]
    pub const fn map_for_turns(&self, turns: i64) -> Option<&MultiplierMap> {
        if turns >= TIER10_TURNS {
            Some(&self.tier10)
        } else if turns >= TIER5_TURNS {
            Some(&self.tier5)
        } else if turns >= TIER3_TURNS {
            Some(&self.tier3)
        } else if turns >= TIER2_TURNS {
            Some(&self.tier2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::standard_board;

    #[test]
    fn uniform_plan_serves_same_map_at_every_tier() {
        let map = [3; BOARD_LEN];
        let plan = MultiplierPlan::uniform("u", map);
        for turns in [20, 30, 50, 100, 5_000] {
            assert_eq!(plan.map_for_turns(turns), Some(&map));
        }
    }

    #[test]
    fn below_lowest_tier_is_unboosted() {
        let plan = MultiplierPlan::uniform("u", [10; BOARD_LEN]);
        assert_eq!(plan.map_for_turns(19), None);
        assert_eq!(plan.map_for_turns(0), None);
        assert_eq!(plan.map_for_turns(-3), None);
    }

    #[test]
    fn tier_thresholds_select_the_matching_map() {
        let plan = MultiplierPlan::from_tiers(
            "tiers",
            [2; BOARD_LEN],
            [3; BOARD_LEN],
            [5; BOARD_LEN],
            [10; BOARD_LEN],
        );
        assert_eq!(plan.map_for_turns(25), Some(&[2; BOARD_LEN]));
        assert_eq!(plan.map_for_turns(49), Some(&[3; BOARD_LEN]));
        assert_eq!(plan.map_for_turns(99), Some(&[5; BOARD_LEN]));
        assert_eq!(plan.map_for_turns(100), Some(&[10; BOARD_LEN]));
    }

    #[test]
    fn slice_validation_rejects_bad_maps() {
        assert_eq!(
            MultiplierPlan::uniform_from_slice("short", &[1; 23]),
            Err(PlanError::WrongLength {
                expected: BOARD_LEN,
                found: 23
            })
        );
        let mut values = [1; BOARD_LEN];
        values[7] = 0;
        assert_eq!(
            MultiplierPlan::uniform_from_slice("zero", &values),
            Err(PlanError::ZeroMultiplier { space: 7 })
        );
    }

    #[test]
    fn plan_roundtrips_through_serde() {
        let plan = MultiplierPlan::optimized("best", &standard_board());
        let json = serde_json::to_string(&plan).unwrap();
        let back: MultiplierPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn optimized_plan_uses_tier_budgets() {
        let board = standard_board();
        let plan = MultiplierPlan::optimized("best", &board);
        let tier10 = plan.map_for_turns(200).unwrap();
        assert!(tier10.iter().all(|&m| m == 1 || m == 10));
        let tier2 = plan.map_for_turns(20).unwrap();
        assert!(tier2.iter().all(|&m| m == 1 || m == 2));
    }
}
