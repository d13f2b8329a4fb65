//! The per-run simulation loop.

use rand::Rng;

use crate::board::Space;
use crate::constants::{BOARD_LEN, TIER2_TURNS, TIER3_TURNS, TIER5_TURNS, TIER10_TURNS};
use crate::numbers::u64_to_i64;
use crate::plan::MultiplierPlan;
use crate::state::RunResult;

/// Largest boost a run with the given remaining turn budget may spend.
/// Mirrors the tier unlock thresholds so a run near its budget edge never
/// commits to a boosted roll it cannot economically sustain.
const fn multiplier_cap(turns: i64) -> u64 {
    if turns >= TIER10_TURNS {
        u64::MAX
    } else if turns >= TIER5_TURNS {
        5
    } else if turns >= TIER3_TURNS {
        3
    } else if turns >= TIER2_TURNS {
        2
    } else {
        1
    }
}

/// Simulate one run around the board to completion.
///
/// The run continues while the points target is unmet (`None` never meets,
/// running the dice budget to exhaustion) and dice remain: either starting
/// budget not yet fully drawn, or bonus dice still banked. Reaching the
/// target ends the run even with starting dice left over.
///
/// A zero starting budget with no bonus income returns an all-zero result
/// without rolling; that is a degenerate but valid run, not an error.
pub fn simulate_run(
    board: &[Space; BOARD_LEN],
    plan: &MultiplierPlan,
    starting_dice: u64,
    points_target: Option<u64>,
    capture_history: bool,
    rng: &mut impl Rng,
) -> RunResult {
    let mut run = RunResult::new();
    let mut position = 0_usize;

    loop {
        let target_met = points_target.is_some_and(|t| run.state.points >= t);
        let dice_left = run.state.initial_dice_spent < starting_dice || run.state.free_dice > 0;
        if target_met || !dice_left {
            break;
        }

        // Signed: a boosted roll can overshoot the starting budget by up
        // to multiplier - 1, making the next budget reading negative.
        let turns_remaining = u64_to_i64(starting_dice) - u64_to_i64(run.state.initial_dice_spent)
            + u64_to_i64(run.state.free_dice);

        let planned = plan
            .map_for_turns(turns_remaining)
            .map_or(1, |map| map[position]);
        let multiplier = planned.min(multiplier_cap(turns_remaining));

        let sum = board[position].take_roll(multiplier, &mut run, rng);
        position = (position + sum) % BOARD_LEN;
        board[position].resolve_reward(multiplier, &mut run, rng);

        if capture_history {
            run.record(position);
        }
    }

    run
}
