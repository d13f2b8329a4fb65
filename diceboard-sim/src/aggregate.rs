//! Cross-run aggregation.
//!
//! The engine hands back one `RunResult` per trial; this module flattens
//! each into a report row and folds a batch into averages. Ratio
//! denominators can legitimately be zero (a degenerate run draws no dice
//! at all), so every ratio here is guarded to 0.0.

use serde::Serialize;

use diceboard_game::numbers::{u64_to_f64, usize_to_f64};
use diceboard_game::{BOARD_LEN, RunResult};

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// One report row per finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub points: u64,
    pub initial_dice_spent: u64,
    pub points_per_initial_die: f64,
    pub rolls_done: u64,
    pub points_per_roll: f64,
    pub gems: u64,
    pub chroma: u64,
    pub obsidian: u64,
    pub otta: u64,
    pub gold: u64,
}

impl RunRecord {
    #[must_use]
    pub fn from_run(run: &RunResult) -> Self {
        let s = &run.state;
        Self {
            points: s.points,
            initial_dice_spent: s.initial_dice_spent,
            points_per_initial_die: ratio(u64_to_f64(s.points), u64_to_f64(s.initial_dice_spent)),
            rolls_done: s.rolls_done,
            points_per_roll: ratio(u64_to_f64(s.points), u64_to_f64(s.rolls_done)),
            gems: s.gems,
            chroma: s.chroma,
            obsidian: s.obsidian,
            otta: s.otta,
            gold: s.gold,
        }
    }
}

/// Batch-level averages plus landing frequencies per board position.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregate {
    pub runs: usize,
    pub avg_points: f64,
    pub avg_initial_dice: f64,
    /// Average points per net initial die: leftover banked dice are
    /// credited back against the initial spend.
    pub points_per_initial_die: f64,
    pub avg_rolls: f64,
    pub points_per_roll: f64,
    pub avg_free_dice: f64,
    pub avg_gems: f64,
    pub avg_chroma: f64,
    pub avg_obsidian: f64,
    pub avg_otta: f64,
    pub avg_gold: f64,
    /// Average landings per run on each space. All zeros unless runs were
    /// simulated with history capture.
    pub landing_frequency: Vec<f64>,
}

#[must_use]
pub fn aggregate(runs: &[RunResult]) -> Aggregate {
    let count = usize_to_f64(runs.len());
    let mut totals = [0_u64; 9];
    let mut landings = vec![0_u64; BOARD_LEN];
    for run in runs {
        let s = &run.state;
        for (slot, value) in totals.iter_mut().zip([
            s.points,
            s.rolls_done,
            s.initial_dice_spent,
            s.free_dice,
            s.gems,
            s.chroma,
            s.obsidian,
            s.otta,
            s.gold,
        ]) {
            *slot += value;
        }
        for entry in &run.history {
            landings[entry.position] += 1;
        }
    }

    let avg = |total: u64| ratio(u64_to_f64(total), count);
    let avg_points = avg(totals[0]);
    let avg_initial_dice = avg(totals[2]);
    let avg_free_dice = avg(totals[3]);
    Aggregate {
        runs: runs.len(),
        avg_points,
        avg_initial_dice,
        points_per_initial_die: ratio(avg_points, avg_initial_dice - avg_free_dice),
        avg_rolls: avg(totals[1]),
        points_per_roll: ratio(avg_points, avg(totals[1])),
        avg_free_dice,
        avg_gems: avg(totals[4]),
        avg_chroma: avg(totals[5]),
        avg_obsidian: avg(totals[6]),
        avg_otta: avg(totals[7]),
        avg_gold: avg(totals[8]),
        landing_frequency: landings.into_iter().map(avg).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diceboard_game::{BOARD_LEN, MultiplierPlan, simulate_run, standard_board, trial_rng};

    fn sample_runs(capture: bool) -> Vec<RunResult> {
        let board = standard_board();
        let plan = MultiplierPlan::uniform("ones", [1; BOARD_LEN]);
        (0..20)
            .map(|trial| {
                simulate_run(&board, &plan, 40, None, capture, &mut trial_rng(11, trial))
            })
            .collect()
    }

    #[test]
    fn empty_batch_aggregates_to_zeros() {
        let agg = aggregate(&[]);
        assert_eq!(agg.runs, 0);
        assert!((agg.avg_points - 0.0).abs() < f64::EPSILON);
        assert!((agg.points_per_initial_die - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_run_produces_guarded_zero_ratios() {
        let record = RunRecord::from_run(&RunResult::new());
        assert!((record.points_per_initial_die - 0.0).abs() < f64::EPSILON);
        assert!((record.points_per_roll - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn averages_reflect_the_batch() {
        let runs = sample_runs(false);
        let agg = aggregate(&runs);
        assert_eq!(agg.runs, runs.len());
        assert!(agg.avg_points > 0.0);
        assert!(agg.avg_rolls > 0.0);
        assert!(agg.points_per_roll > 0.0);
        // Unbounded runs always drain the bank.
        assert!((agg.avg_free_dice - 0.0).abs() < f64::EPSILON);
        assert!(agg.landing_frequency.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn landing_frequencies_come_from_history() {
        let runs = sample_runs(true);
        let agg = aggregate(&runs);
        let total: f64 = agg.landing_frequency.iter().sum();
        assert!((total - agg.avg_rolls).abs() < 1e-9);
    }

    #[test]
    fn record_ratios_match_counters() {
        for run in sample_runs(false) {
            let record = RunRecord::from_run(&run);
            assert_eq!(record.points, run.state.points);
            let expected = u64_to_f64(record.points) / u64_to_f64(record.rolls_done);
            assert!((record.points_per_roll - expected).abs() < 1e-12);
        }
    }
}
