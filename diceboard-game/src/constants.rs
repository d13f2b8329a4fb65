//! Centralized balance tables for the Diceboard event math.
//!
//! These values define the deterministic shape of the dice economy. Keeping
//! them together ensures the event can only be retuned via code changes
//! reviewed in version control, rather than through external assets.

/// Number of spaces on the cyclic board.
pub const BOARD_LEN: usize = 24;

/// Upper bound (inclusive) of a wheel spin draw.
pub(crate) const WHEEL_SPAN: u32 = 10_000;

// Points milestone ladder ---------------------------------------------------
// Base ladder {2000..20000} repeated at +20k offsets per lap, 30 thresholds,
// strictly increasing. Each crossing banks POINTS_BREAKPOINT_DICE free dice.
pub const POINTS_BREAKPOINTS: [u64; 30] = [
    2_000, 5_000, 8_000, 12_000, 16_000, 20_000, //
    22_000, 25_000, 28_000, 32_000, 36_000, 40_000, //
    42_000, 45_000, 48_000, 52_000, 56_000, 60_000, //
    62_000, 65_000, 68_000, 72_000, 76_000, 80_000, //
    82_000, 85_000, 88_000, 92_000, 96_000, 100_000,
];

pub const POINTS_BREAKPOINT_DICE: u64 = 2;

// Roll-count task ladder ----------------------------------------------------
// Crossing several thresholds in one charge pays only the highest newly
// crossed reward; later crossings overwrite, they do not accumulate.
pub const ROLL_BREAKPOINTS: [u64; 17] = [
    5, 10, 20, 30, 40, 60, 80, 100, 150, 200, 250, 300, 350, 400, 450, 500, 600,
];

pub const ROLL_BREAKPOINT_DICE: [u64; 17] = [1, 2, 2, 2, 2, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5];

// Two-die sum distribution --------------------------------------------------
/// Ways to roll each two-die sum 2..=12 out of `DICE_SUM_TOTAL`.
pub const DICE_SUM_WAYS: [u64; 11] = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Total outcomes of two independent d6 draws.
pub const DICE_SUM_TOTAL: u64 = 36;

/// Smallest two-die sum.
pub const DICE_SUM_MIN: usize = 2;

// Turn-budget tiers ---------------------------------------------------------
// A multiplier tier unlocks when the remaining turn budget reaches its
// threshold; the same thresholds cap how large a boost a run may spend.
pub(crate) const TIER10_TURNS: i64 = 100;
pub(crate) const TIER5_TURNS: i64 = 50;
pub(crate) const TIER3_TURNS: i64 = 30;
pub(crate) const TIER2_TURNS: i64 = 20;
