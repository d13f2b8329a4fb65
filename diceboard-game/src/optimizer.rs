//! Analytic multiplier assignment.
//!
//! Converts per-visit space expectations into an infinite-horizon value for
//! each roll origin, then greedily boosts the highest-value origins until
//! the steady-state points-per-die metric stops improving. The search is a
//! heuristic: candidates are tried in one fixed order and the first
//! non-improving candidate ends it.

use crate::board::Space;
use crate::constants::{BOARD_LEN, DICE_SUM_MIN, DICE_SUM_TOTAL, DICE_SUM_WAYS};
use crate::numbers::{mean, u64_to_f64};
use crate::plan::MultiplierMap;

/// Expected yield of one roll taken from a given origin space, averaged
/// over the 2d6 landing distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandedValue {
    pub points: f64,
    pub dice: f64,
    /// Points plus dice converted at the global dice value.
    pub score: f64,
}

/// Point value of one free die under the infinite renewal closure: each
/// die yields the mean per-visit points, plus `mean_dice` further dice.
///
/// Precondition: the mean dice yield per visit is below 1, otherwise the
/// geometric series diverges. That is a board configuration error, not a
/// runtime fault.
fn global_dice_value(values: &[(f64, f64)]) -> f64 {
    let mean_points = mean(&values.iter().map(|v| v.0).collect::<Vec<_>>());
    let mean_dice = mean(&values.iter().map(|v| v.1).collect::<Vec<_>>());
    debug_assert!(mean_dice < 1.0, "board yields a die per die on average");
    mean_points / (1.0 - mean_dice)
}

/// Expected landed points, dice and score for every roll origin.
#[must_use]
pub fn landed_values(board: &[Space; BOARD_LEN]) -> [LandedValue; BOARD_LEN] {
    let per_visit: Vec<(f64, f64)> = board
        .iter()
        .map(|space| {
            let v = space.expected_value();
            (v.points, v.dice)
        })
        .collect();
    let dice_value = global_dice_value(&per_visit);

    let mut landed = [LandedValue {
        points: 0.0,
        dice: 0.0,
        score: 0.0,
    }; BOARD_LEN];
    for (origin, slot) in landed.iter_mut().enumerate() {
        for (offset, ways) in DICE_SUM_WAYS.iter().enumerate() {
            let target = (origin + DICE_SUM_MIN + offset) % BOARD_LEN;
            let weight = u64_to_f64(*ways) / u64_to_f64(DICE_SUM_TOTAL);
            let (p, d) = per_visit[target];
            slot.points += p * weight;
            slot.dice += d * weight;
            slot.score += (p + d * dice_value) * weight;
        }
    }
    landed
}

fn weighted_mean(multipliers: &MultiplierMap, values: impl Fn(usize) -> f64) -> f64 {
    let total: f64 = multipliers.iter().copied().map(u64_to_f64).sum();
    let weighted: f64 = multipliers
        .iter()
        .enumerate()
        .map(|(i, &m)| u64_to_f64(m) * values(i))
        .sum();
    weighted / total
}

/// Steady-state points-per-die for a candidate assignment.
fn points_per_die(multipliers: &MultiplierMap, landed: &[LandedValue; BOARD_LEN]) -> f64 {
    let avg_dice = weighted_mean(multipliers, |i| landed[i].dice);
    weighted_mean(multipliers, |i| landed[i].points) / (1.0 - avg_dice)
}

/// Greedily assign the boost budget to the board.
///
/// Returns one multiplier per space, each either 1 or `budget`. Candidates
/// are visited in descending landed-score order; a candidate that does not
/// strictly improve the metric is reverted and ends the search, so the
/// boosted set is always a prefix of that order.
#[must_use]
pub fn compute_best_multipliers(board: &[Space; BOARD_LEN], budget: u64) -> MultiplierMap {
    let landed = landed_values(board);

    let mut order: [usize; BOARD_LEN] = core::array::from_fn(|i| i);
    order.sort_by(|&a, &b| landed[b].score.total_cmp(&landed[a].score));

    let mut assignment: MultiplierMap = [1; BOARD_LEN];
    let mut best_metric = weighted_mean(&assignment, |i| landed[i].score);
    for &candidate in &order {
        assignment[candidate] = budget;
        let metric = points_per_die(&assignment, &landed);
        if metric <= best_metric {
            assignment[candidate] = 1;
            break;
        }
        best_metric = metric;
    }
    assignment
}
