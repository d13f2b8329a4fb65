mod aggregate;
mod presets;
mod reports;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use diceboard_game::{
    BOARD_LEN, MultiplierPlan, RunResult, Space, derive_trial_seed, simulate_run, standard_board,
    trial_rng,
};

use aggregate::{RunRecord, aggregate};
use presets::PlanKind;
use reports::{
    print_console_report, write_csv_report, write_json_report, write_markdown_report,
};

const PROGRESS_INTERVAL: u64 = 10_000;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Human-readable summary on stdout
    Console,
    /// Aggregate as pretty-printed JSON
    Json,
    /// Aggregate as a markdown table
    Markdown,
    /// One CSV row per run
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "diceboard-sim", version)]
#[command(about = "Monte Carlo batch runner for the Diceboard dice event")]
struct Args {
    /// Plans to simulate (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',', default_value = "best")]
    plans: Vec<PlanKind>,

    /// Extra uniform multiplier map, 24 comma-separated values
    #[arg(long)]
    map: Option<String>,

    /// Number of runs per plan and dice budget
    #[arg(long, default_value_t = 10_000)]
    rounds: u64,

    /// Starting dice budgets (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "130")]
    dice: Vec<u64>,

    /// Stop a run once it reaches this many points; without it runs go to
    /// dice exhaustion
    #[arg(long)]
    points_target: Option<u64>,

    /// Base seed for per-trial RNG streams
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Capture per-landing history (enables landing frequencies, slower)
    #[arg(long)]
    save_history: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

enum OutputTarget {
    Stdout,
    File(BufWriter<File>),
}

impl OutputTarget {
    fn open(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            None => Ok(Self::Stdout),
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("creating report file {}", path.display()))?;
                Ok(Self::File(BufWriter::new(file)))
            }
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout => io::stdout().write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().flush(),
            Self::File(file) => file.flush(),
        }
    }
}

fn parse_custom_map(spec: &str) -> Result<MultiplierPlan> {
    let values = spec
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .with_context(|| format!("invalid multiplier {part:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    MultiplierPlan::uniform_from_slice("Custom", &values).context("invalid multiplier map")
}

fn run_batch(
    board: &[Space; BOARD_LEN],
    plan: &MultiplierPlan,
    starting_dice: u64,
    batch_seed: u64,
    args: &Args,
) -> Vec<RunResult> {
    let mut runs = Vec::new();
    for trial in 0..args.rounds {
        let mut rng = trial_rng(batch_seed, trial);
        runs.push(simulate_run(
            board,
            plan,
            starting_dice,
            args.points_target,
            args.save_history,
            &mut rng,
        ));
        if (trial + 1) % PROGRESS_INTERVAL == 0 {
            log::info!("{} runs done", trial + 1);
        }
    }
    runs
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = standard_board();
    let mut plans: Vec<MultiplierPlan> = args.plans.iter().map(|kind| kind.build(&board)).collect();
    if let Some(spec) = &args.map {
        plans.push(parse_custom_map(spec)?);
    }

    let mut output = OutputTarget::open(args.output.as_ref())?;

    let mut batch = 0_u64;
    for plan in &plans {
        for &starting_dice in &args.dice {
            log::info!(
                "plan {}: {} runs with {starting_dice} starting dice",
                plan.label,
                args.rounds
            );
            // Each batch draws from its own seed stream so adding plans or
            // budgets never perturbs the others.
            let batch_seed = derive_trial_seed(args.seed, batch);
            batch += 1;

            let runs = run_batch(&board, plan, starting_dice, batch_seed, &args);
            let summary = aggregate(&runs);

            match args.report {
                ReportFormat::Console => {
                    print_console_report(&plan.label, starting_dice, &summary);
                }
                ReportFormat::Markdown => {
                    write_markdown_report(&mut output, &plan.label, starting_dice, &summary)?;
                }
                ReportFormat::Json => write_json_report(&mut output, &summary)?,
                ReportFormat::Csv => {
                    let records: Vec<RunRecord> = runs.iter().map(RunRecord::from_run).collect();
                    write_csv_report(&mut output, &records)?;
                }
            }
        }
    }
    output.flush()?;
    Ok(())
}
