//! Report rendering for batch results.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::aggregate::{Aggregate, RunRecord};

/// Human-readable summary printed after each batch.
pub fn print_console_report(label: &str, starting_dice: u64, aggregate: &Aggregate) {
    println!();
    println!("{}", format!("🎲 {label}").bright_cyan().bold());
    println!("{}", "=".repeat(label.len() + 3).cyan());
    println!(
        "Simulated {} runs starting with {} dice each",
        aggregate.runs.to_string().bold(),
        starting_dice.to_string().bold()
    );
    println!();
    println!("Averages per run:");
    println!("  Points earned:          {:>14.2}", aggregate.avg_points);
    println!(
        "  Initial dice spent:     {:>14.2}",
        aggregate.avg_initial_dice
    );
    println!(
        "  Points per initial die: {:>14.2}",
        aggregate.points_per_initial_die
    );
    println!("  Rolls overall:          {:>14.2}", aggregate.avg_rolls);
    println!(
        "  Points per roll:        {:>14.2}",
        aggregate.points_per_roll
    );
    println!(
        "  Bonus dice left over:   {:>14.2}",
        aggregate.avg_free_dice
    );
    println!("  Gems:                   {:>14.2}", aggregate.avg_gems);
    println!("  Chroma keys:            {:>14.2}", aggregate.avg_chroma);
    println!("  Obsidian keys:          {:>14.2}", aggregate.avg_obsidian);
    println!("  Otta shards:            {:>14.2}", aggregate.avg_otta);
    println!("  Gold:                   {:>14.2}", aggregate.avg_gold);

    if aggregate.landing_frequency.iter().any(|&f| f > 0.0) {
        println!();
        println!("Landings per run by space:");
        for (position, frequency) in aggregate.landing_frequency.iter().enumerate() {
            println!("  space {position:>2}: {frequency:>8.3}");
        }
    }
}

/// Markdown rendering of the same summary, written to any sink.
///
/// # Errors
///
/// Returns an error when the sink rejects a write.
pub fn write_markdown_report(
    output: &mut impl Write,
    label: &str,
    starting_dice: u64,
    aggregate: &Aggregate,
) -> Result<()> {
    writeln!(output, "## {label}\n")?;
    writeln!(
        output,
        "{} runs, {starting_dice} starting dice each\n",
        aggregate.runs
    )?;
    writeln!(output, "| Metric | Average |")?;
    writeln!(output, "|--------|---------|")?;
    let rows = [
        ("Points earned", aggregate.avg_points),
        ("Initial dice spent", aggregate.avg_initial_dice),
        ("Points per initial die", aggregate.points_per_initial_die),
        ("Rolls overall", aggregate.avg_rolls),
        ("Points per roll", aggregate.points_per_roll),
        ("Bonus dice left over", aggregate.avg_free_dice),
        ("Gems", aggregate.avg_gems),
        ("Chroma keys", aggregate.avg_chroma),
        ("Obsidian keys", aggregate.avg_obsidian),
        ("Otta shards", aggregate.avg_otta),
        ("Gold", aggregate.avg_gold),
    ];
    for (name, value) in rows {
        writeln!(output, "| {name} | {value:.2} |")?;
    }
    writeln!(output)?;
    Ok(())
}

/// JSON rendering of the aggregate.
///
/// # Errors
///
/// Returns an error when serialization or the sink fails.
pub fn write_json_report(output: &mut impl Write, aggregate: &Aggregate) -> Result<()> {
    let json = serde_json::to_string_pretty(aggregate)?;
    writeln!(output, "{json}")?;
    Ok(())
}

/// CSV export, one row per run.
///
/// # Errors
///
/// Returns an error when the sink rejects a write.
pub fn write_csv_report(output: &mut impl Write, records: &[RunRecord]) -> Result<()> {
    writeln!(
        output,
        "points,initial_dice_spent,points_per_initial_die,rolls_done,points_per_roll,gems,chroma_keys,obsidian_keys,otta_shards,gold"
    )?;
    for r in records {
        writeln!(
            output,
            "{},{},{:.4},{},{:.4},{},{},{},{},{}",
            r.points,
            r.initial_dice_spent,
            r.points_per_initial_die,
            r.rolls_done,
            r.points_per_roll,
            r.gems,
            r.chroma,
            r.obsidian,
            r.otta,
            r.gold
        )?;
    }
    Ok(())
}
