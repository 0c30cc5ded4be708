//! opchar CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

use oc_plan::{FractionGrid, PlanDraft, QualityTargets};

#[derive(Parser)]
#[command(name = "opchar")]
#[command(about = "opchar - Acceptance sampling OC curves")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the OC curve of a double sampling plan
    Curve {
        /// Input plan (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the artifact (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Threads (0 = auto). Use 1 for deterministic parity.
        #[arg(long, default_value = "1")]
        threads: usize,
    },

    /// Build the stage-1-only (single sampling) OC curve
    Single {
        /// Input plan (JSON); uses lot_size, sample1_size, accept1
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the artifact (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Threads (0 = auto). Use 1 for deterministic parity.
        #[arg(long, default_value = "1")]
        threads: usize,
    },

    /// Print version
    Version,
}

/// Input file schema: the plan draft plus optional targets and grid.
#[derive(Debug, Deserialize)]
struct PlanFile {
    plan: PlanDraft,
    #[serde(default)]
    aql: Option<f64>,
    #[serde(default)]
    rql: Option<f64>,
    #[serde(default)]
    grid: Option<GridSpec>,
}

/// Uniform grid request; defaults reproduce the reference 10,000-point grid.
#[derive(Debug, Deserialize)]
struct GridSpec {
    #[serde(default)]
    start: Option<f64>,
    #[serde(default)]
    stop: Option<f64>,
    #[serde(default)]
    step: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Curve { input, output, threads } => cmd_curve(&input, output.as_ref(), threads),
        Commands::Single { input, output, threads } => cmd_single(&input, output.as_ref(), threads),
        Commands::Version => {
            println!("opchar {}", oc_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_curve(input: &PathBuf, output: Option<&PathBuf>, threads: usize) -> Result<()> {
    init_threads(threads);
    let file = load_plan(input)?;

    let Some(params) = file.plan.resolve()? else {
        tracing::info!("plan incomplete, nothing to compute");
        return Ok(());
    };
    let targets = QualityTargets::new(file.aql, file.rql);
    let grid = make_grid(file.grid.as_ref())?;

    let artifact = oc_plan::build_curve(&params, &targets, &grid)?;
    tracing::info!(
        points = artifact.fractions.len(),
        model = artifact.model.as_str(),
        "curve built"
    );

    write_json(output, serde_json::to_value(&artifact)?)
}

fn cmd_single(input: &PathBuf, output: Option<&PathBuf>, threads: usize) -> Result<()> {
    init_threads(threads);
    let file = load_plan(input)?;

    let (Some(lot), Some(n), Some(c)) =
        (file.plan.lot_size, file.plan.sample1_size, file.plan.accept1)
    else {
        tracing::info!("plan incomplete, nothing to compute");
        return Ok(());
    };
    let targets = QualityTargets::new(file.aql, file.rql);
    let grid = make_grid(file.grid.as_ref())?;

    let artifact = oc_plan::build_single_curve(lot, n, c, &targets, &grid)?;
    tracing::info!(points = artifact.fractions.len(), "single curve built");

    write_json(output, serde_json::to_value(&artifact)?)
}

fn init_threads(threads: usize) {
    if threads > 0 {
        // Best-effort; if a global pool already exists, keep going.
        let _ = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global();
    }
}

fn load_plan(input: &PathBuf) -> Result<PlanFile> {
    tracing::info!(path = %input.display(), "loading plan");
    let json = std::fs::read_to_string(input)?;
    Ok(serde_json::from_str(&json)?)
}

fn make_grid(spec: Option<&GridSpec>) -> Result<FractionGrid> {
    let Some(spec) = spec else {
        return Ok(FractionGrid::default_grid());
    };
    let start = spec.start.unwrap_or(0.0);
    let stop = spec.stop.unwrap_or(1.0);
    let step = spec.step.unwrap_or(oc_plan::grid::DEFAULT_STEP);
    if !(step > 0.0) || !start.is_finite() || !stop.is_finite() || stop <= start {
        anyhow::bail!("grid spec requires start < stop and step > 0");
    }
    let mut fractions = Vec::new();
    let mut i = 0u64;
    loop {
        let f = start + (i as f64) * step;
        if f >= stop {
            break;
        }
        fractions.push(f);
        i += 1;
    }
    Ok(FractionGrid::new(fractions)?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
