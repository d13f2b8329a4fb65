//! Board spaces and reward resolution.
//!
//! The board is a fixed ring of 24 spaces. Each space either pays a flat
//! reward or spins one of three weighted wheels; wheel partitions are
//! cumulative thresholds over a uniform draw in `1..=WHEEL_SPAN` and always
//! cover the full draw range, so every spin lands in exactly one branch.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_LEN, WHEEL_SPAN};
use crate::numbers::u64_to_f64;
use crate::state::RunResult;

// Grand prize wheel partition (cumulative).
const GRAND_CHROMA2: u32 = 666;
const GRAND_OBSIDIAN: u32 = 666 + 2_666;
const GRAND_GEMS: u32 = 666 + 2_666 + 2_666;
const GRAND_CHROMA1: u32 = 666 + 2_666 + 2_666 + 666;
const GRAND_DICE2: u32 = 666 + 2_666 + 2_666 + 666 + 666;

// Point wheel partitions (cumulative).
const POINT_200: u32 = 3_478;
const POINT_500: u32 = 3_478 + 2_608;
const POINT_1000: u32 = 3_478 + 2_608 + 434;
const SPIN_MULT_3: u32 = 3_076;
const SPIN_MULT_5: u32 = 3_076 + 769;

// Fate wheel partition (cumulative).
const FATE_POINTS: u32 = 2_500;
const FATE_OTTA: u32 = 2_500 + 300;
const FATE_CHROMA: u32 = 2_500 + 300 + 700;
const FATE_DICE: u32 = 2_500 + 300 + 700 + 1_500;

/// Expected yield of a single visit to a space, multiplier-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceValue {
    pub points: f64,
    pub dice: f64,
}

/// One space on the board. The set is closed: the production board is
/// fixed at 24 members and no open extension point is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Space {
    Flat { points: u64, gems: u64, dice: u64 },
    GrandPrize,
    PointWheel,
    FateWheel,
}

fn spin(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=WHEEL_SPAN)
}

impl Space {
    #[must_use]
    pub const fn flat_points(points: u64) -> Self {
        Self::Flat {
            points,
            gems: 0,
            dice: 0,
        }
    }

    #[must_use]
    pub const fn flat_gems(gems: u64) -> Self {
        Self::Flat {
            points: 0,
            gems,
            dice: 0,
        }
    }

    #[must_use]
    pub const fn flat_dice(dice: u64) -> Self {
        Self::Flat {
            points: 0,
            gems: 0,
            dice,
        }
    }

    /// A present space: cosmetic reward, nothing tracked.
    #[must_use]
    pub const fn present() -> Self {
        Self::Flat {
            points: 0,
            gems: 0,
            dice: 0,
        }
    }

    /// Roll two dice from this space, charging `multiplier` rolls against
    /// the run's dice economy. Returns the movement sum in `2..=12`.
    pub fn take_roll(&self, multiplier: u64, run: &mut RunResult, rng: &mut impl Rng) -> usize {
        run.add_rolls(multiplier);
        rng.gen_range(1..=6) + rng.gen_range(1..=6)
    }

    /// Resolve the reward for landing here with the given multiplier.
    pub fn resolve_reward(&self, multiplier: u64, run: &mut RunResult, rng: &mut impl Rng) {
        match *self {
            Self::Flat { points, gems, dice } => {
                run.add_points(points * multiplier);
                run.state.gems += gems * multiplier;
                run.state.free_dice += dice * multiplier;
            }
            Self::GrandPrize => match spin(rng) {
                s if s <= GRAND_CHROMA2 => run.state.chroma += 2 * multiplier,
                s if s <= GRAND_OBSIDIAN => run.state.obsidian += multiplier,
                s if s <= GRAND_GEMS => run.state.gems += 100 * multiplier,
                s if s <= GRAND_CHROMA1 => run.state.chroma += multiplier,
                s if s <= GRAND_DICE2 => run.state.free_dice += 2 * multiplier,
                _ => run.state.free_dice += multiplier,
            },
            Self::PointWheel => {
                let base = match spin(rng) {
                    s if s <= POINT_200 => 200,
                    s if s <= POINT_500 => 500,
                    s if s <= POINT_1000 => 1_000,
                    _ => 100,
                };
                let wheel = match spin(rng) {
                    s if s <= SPIN_MULT_3 => 3,
                    s if s <= SPIN_MULT_5 => 5,
                    _ => 1,
                };
                run.add_points(base * wheel * multiplier);
            }
            Self::FateWheel => match spin(rng) {
                s if s <= FATE_POINTS => run.add_points(500 * multiplier),
                s if s <= FATE_OTTA => run.state.otta += 2 * multiplier,
                s if s <= FATE_CHROMA => run.state.chroma += multiplier,
                s if s <= FATE_DICE => run.state.free_dice += multiplier,
                _ => run.state.gold += 2_000 * multiplier,
            },
        }
    }

    /// Expected points and dice from a single visit.
    ///
    /// The grand prize dice expectation intentionally counts only the
    /// obsidian-correlated branch, matching the production sheet math that
    /// the optimizer ranking was tuned against.
    #[must_use]
    pub fn expected_value(&self) -> SpaceValue {
        match *self {
            Self::Flat { points, dice, .. } => SpaceValue {
                points: u64_to_f64(points),
                dice: u64_to_f64(dice),
            },
            Self::GrandPrize => SpaceValue {
                points: 0.0,
                dice: (666.0 * 2.0 + 2_666.0 * 1.0) / 10_000.0,
            },
            Self::PointWheel => {
                let base = (3_478.0 * 100.0 + 3_478.0 * 200.0 + 2_608.0 * 500.0 + 434.0 * 1_000.0)
                    / 10_000.0;
                let wheel = (6_153.0 * 1.0 + 3_076.0 * 3.0 + 769.0 * 5.0) / 10_000.0;
                SpaceValue {
                    points: base * wheel,
                    dice: 0.0,
                }
            }
            Self::FateWheel => SpaceValue {
                points: (500.0 * 2_500.0) / 10_000.0,
                dice: (1_500.0 * 1.0) / 10_000.0,
            },
        }
    }
}

/// The fixed production board, clockwise from the start space.
#[must_use]
pub const fn standard_board() -> [Space; BOARD_LEN] {
    [
        Space::flat_points(400),
        Space::flat_gems(50),
        Space::flat_points(50),
        Space::flat_points(400),
        Space::flat_points(800),
        Space::flat_points(50),
        Space::flat_dice(2),
        Space::flat_gems(50),
        Space::GrandPrize,
        Space::present(),
        Space::PointWheel,
        Space::flat_points(50),
        Space::flat_points(200),
        Space::present(),
        Space::flat_dice(2),
        Space::flat_points(200),
        Space::flat_points(800),
        Space::present(),
        Space::flat_points(50),
        Space::flat_points(200),
        Space::PointWheel,
        Space::present(),
        Space::FateWheel,
        Space::flat_points(200),
    ]
}
