use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pushdown::catalog;
use pushdown::core::StateId;
use pushdown::engine::{SimulationConfig, Simulator, DEFAULT_STEP_BUDGET};
use pushdown::snapshot::MachineSnapshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pushdown", about = "Simulate nondeterministic pushdown automata")]
struct Cli {
    /// Log search progress at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the catalog machines as JSON.
    List,
    /// Simulate a catalog machine on an input string.
    Run {
        /// Catalog identifier (see `list`).
        machine: String,
        /// Input string; omit for the empty string.
        #[arg(default_value = "")]
        input: String,
        /// Maximum configurations to examine before giving up.
        #[arg(long, default_value_t = DEFAULT_STEP_BUDGET)]
        budget: usize,
    },
    /// Simulate a machine loaded from a JSON snapshot file.
    Load {
        /// Snapshot file written by `MachineSnapshot::to_json`.
        file: PathBuf,
        /// Input string; omit for the empty string.
        #[arg(default_value = "")]
        input: String,
        /// Maximum configurations to examine before giving up.
        #[arg(long, default_value_t = DEFAULT_STEP_BUDGET)]
        budget: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List => run_list()?,
        Commands::Run {
            machine,
            input,
            budget,
        } => run_catalog(&machine, &input, budget)?,
        Commands::Load {
            file,
            input,
            budget,
        } => run_snapshot(file, &input, budget)?,
    }

    Ok(())
}

fn run_list() -> Result<()> {
    let listing = serde_json::json!({ "machines": catalog::entries() });
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn run_catalog(id: &str, input: &str, budget: usize) -> Result<()> {
    info!(machine = id, budget, "simulating catalog machine");
    let report = catalog::dispatch(id, input, budget);
    println!("{}", report.to_json()?);
    Ok(())
}

fn run_snapshot(path: PathBuf, input: &str, budget: usize) -> Result<()> {
    let json = fs::read_to_string(&path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = MachineSnapshot::<StateId>::from_json(&json)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;

    info!(id = %snapshot.id, rules = snapshot.machine.rule_count(), budget, "simulating snapshot machine");
    let run = Simulator::new(&snapshot.machine)
        .with_config(SimulationConfig::with_budget(budget))
        .run(input);
    info!(
        dequeued = run.stats.dequeued,
        discovered = run.stats.discovered,
        "search finished"
    );

    println!("{}", run.outcome.to_report().to_json()?);
    Ok(())
}
