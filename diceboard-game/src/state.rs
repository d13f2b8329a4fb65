//! Per-run counters and milestone bookkeeping.
//!
//! `RunState` is the flat counter record a single simulated player
//! accumulates; `RunResult` wraps it with the two milestone cursors and the
//! optional landing history. Both milestone ladders are monotone: a cursor
//! only ever advances, so each threshold pays out at most once per run.

use serde::{Deserialize, Serialize};

use crate::constants::{
    POINTS_BREAKPOINT_DICE, POINTS_BREAKPOINTS, ROLL_BREAKPOINT_DICE, ROLL_BREAKPOINTS,
};

/// Cumulative counters for one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Event points earned so far.
    pub points: u64,
    /// Total dice rolled, boosted rolls counted at their multiplier.
    pub rolls_done: u64,
    /// Dice drawn from the starting budget. Only grows when banked free
    /// dice cannot cover a roll charge.
    pub initial_dice_spent: u64,
    /// Bonus dice currently banked.
    pub free_dice: u64,
    pub gems: u64,
    pub chroma: u64,
    pub obsidian: u64,
    pub otta: u64,
    pub gold: u64,
}

/// One captured landing: board position plus an independent deep copy of
/// the counters at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub position: usize,
    pub state: RunState,
}

/// Result of a single run: terminal counters, milestone cursors, and the
/// optional per-landing history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub state: RunState,
    pub history: Vec<HistoryEntry>,
    /// Count of points thresholds already paid out.
    points_bp_met: usize,
    /// Count of roll thresholds already paid out.
    roll_bp_met: usize,
}

impl RunResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add earned points and bank the milestone dice for every points
    /// threshold the new total crosses. There is no cap on how many
    /// thresholds a single large award may cross.
    pub fn add_points(&mut self, points: u64) {
        if points == 0 {
            return;
        }
        self.state.points += points;

        let mut dice = 0;
        for bp in &POINTS_BREAKPOINTS[self.points_bp_met..] {
            if self.state.points < *bp {
                break;
            }
            self.points_bp_met += 1;
            dice += POINTS_BREAKPOINT_DICE;
        }
        self.state.free_dice += dice;
    }

    /// Charge `rolls` dice against the run's economy: banked free dice are
    /// consumed first and only the shortfall draws from the starting
    /// budget. Crossing roll thresholds banks the reward of the highest
    /// newly crossed threshold only.
    pub fn add_rolls(&mut self, rolls: u64) {
        if rolls == 0 {
            return;
        }
        self.state.rolls_done += rolls;

        if self.state.free_dice <= rolls {
            self.state.initial_dice_spent += rolls - self.state.free_dice;
        }
        self.state.free_dice = self.state.free_dice.saturating_sub(rolls);

        let mut dice = 0;
        for (i, bp) in ROLL_BREAKPOINTS.iter().enumerate().skip(self.roll_bp_met) {
            if self.state.rolls_done < *bp {
                break;
            }
            self.roll_bp_met = i + 1;
            dice = ROLL_BREAKPOINT_DICE[i];
        }
        self.state.free_dice += dice;
    }

    /// Snapshot the counters after landing on `position`. The snapshot is
    /// a deep copy; later mutation of the live state never aliases it.
    pub fn record(&mut self, position: usize) {
        self.history.push(HistoryEntry {
            position,
            state: self.state.clone(),
        });
    }

    /// Points thresholds paid out so far.
    #[must_use]
    pub const fn points_breakpoints_met(&self) -> usize {
        self.points_bp_met
    }

    /// Roll thresholds paid out so far.
    #[must_use]
    pub const fn roll_breakpoints_met(&self) -> usize {
        self.roll_bp_met
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_points_zero_is_a_noop() {
        let mut run = RunResult::new();
        run.add_points(0);
        assert_eq!(run, RunResult::new());
    }

    #[test]
    fn points_milestones_pay_two_dice_each() {
        let mut run = RunResult::new();
        run.add_points(1_999);
        assert_eq!(run.state.free_dice, 0);
        run.add_points(1); // crosses 2000
        assert_eq!(run.state.free_dice, 2);
        assert_eq!(run.points_breakpoints_met(), 1);
    }

    #[test]
    fn one_award_can_cross_many_points_milestones() {
        let mut run = RunResult::new();
        // 9000 crosses 2000, 5000, 8000 in one addition.
        run.add_points(9_000);
        assert_eq!(run.points_breakpoints_met(), 3);
        assert_eq!(run.state.free_dice, 6);
    }

    #[test]
    fn points_milestone_never_pays_twice() {
        let mut run = RunResult::new();
        run.add_points(2_000);
        assert_eq!(run.state.free_dice, 2);
        run.add_points(10); // still past 2000, before 5000
        assert_eq!(run.state.free_dice, 2);
    }

    #[test]
    fn add_rolls_consumes_free_dice_before_budget() {
        let mut run = RunResult::new();
        run.state.free_dice = 3;
        run.add_rolls(2);
        assert_eq!(run.state.free_dice, 1);
        assert_eq!(run.state.initial_dice_spent, 0);
        assert_eq!(run.state.rolls_done, 2);
    }

    #[test]
    fn add_rolls_shortfall_draws_from_budget() {
        let mut run = RunResult::new();
        run.state.free_dice = 1;
        run.add_rolls(3);
        assert_eq!(run.state.initial_dice_spent, 2);
        // Shortfall consumed the bank; no roll threshold reached yet.
        assert_eq!(run.state.free_dice, 0);
    }

    #[test]
    fn roll_milestones_pay_highest_newly_crossed_only() {
        let mut run = RunResult::new();
        // 25 rolls crosses 5, 10 and 20; reward is the 20-roll payout (2),
        // not the sum of all three.
        run.add_rolls(25);
        assert_eq!(run.roll_breakpoints_met(), 3);
        assert_eq!(run.state.free_dice, 2);
        assert_eq!(run.state.initial_dice_spent, 25);
    }

    #[test]
    fn roll_milestone_reward_lands_after_the_charge() {
        let mut run = RunResult::new();
        run.add_rolls(5);
        // Charge emptied the bank, then the 5-roll threshold paid 1.
        assert_eq!(run.state.initial_dice_spent, 5);
        assert_eq!(run.state.free_dice, 1);
    }

    #[test]
    fn points_never_decrease_across_additions() {
        let mut run = RunResult::new();
        let mut last = 0;
        for award in [100, 0, 2_500, 7, 40_000] {
            run.add_points(award);
            assert!(run.state.points >= last);
            last = run.state.points;
        }
    }

    #[test]
    fn recorded_snapshots_are_independent_copies() {
        let mut run = RunResult::new();
        run.add_points(300);
        run.record(7);
        run.add_points(5_000);
        assert_eq!(run.history.len(), 1);
        assert_eq!(run.history[0].position, 7);
        assert_eq!(run.history[0].state.points, 300);
        assert_eq!(run.state.points, 5_300);
    }
}
