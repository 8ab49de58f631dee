use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use keggin::api::{
    run_with, DistanceOracle, EuclideanDistance, Keggin, KegginDistances, RankedColoring, RunCfg,
    RunOutput, KEGGIN_VERTICES,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod writer;

#[derive(Parser)]
#[command(name = "keggin")]
#[command(about = "Enumerate and rank symmetry-distinct two-colorings of the Keggin unit")]
struct Cmd {
    /// Distance model used for the consistency check and the ranking
    #[arg(long, value_enum, default_value_t = Model::Keggin, global = true)]
    model: Model,

    /// Nearest-neighbour distance for `--model euclidean`
    #[arg(long, default_value_t = 377.0, global = true)]
    nearest: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Model {
    /// Hard-coded experimental distances (377 / 533.1 / 653 / 754)
    Keggin,
    /// Scaled Euclidean distances between cuboctahedral positions
    Euclidean,
}

#[derive(Args, Clone, Copy, Debug)]
struct ZeroRange {
    #[arg(long, default_value_t = 1)]
    min_zeros: usize,
    #[arg(long, default_value_t = 6)]
    max_zeros: usize,
}

impl ZeroRange {
    fn cfg(self) -> Result<RunCfg> {
        if self.min_zeros > self.max_zeros || self.max_zeros > KEGGIN_VERTICES.len() {
            bail!(
                "zero counts must satisfy min <= max <= 12 (got {}..={})",
                self.min_zeros,
                self.max_zeros
            );
        }
        Ok(RunCfg {
            min_zeros: self.min_zeros,
            max_zeros: self.max_zeros,
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate colorings and write one ranked file per zero count
    Run {
        /// Output directory; an existing directory is left untouched
        #[arg(long, default_value = "out_keggin")]
        out: PathBuf,
        #[command(flatten)]
        range: ZeroRange,
        /// Also export every ranking as one table (.csv or .parquet)
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Verify the distance model against the rotation group
    Check,
    /// Print group facts and per-zero-count orbit summaries as JSON
    Report {
        #[command(flatten)]
        range: ZeroRange,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let oracle = oracle(cmd.model, cmd.nearest)?;
    match cmd.action {
        Action::Run { out, range, table } => run(cmd.model, &*oracle, out, range, table),
        Action::Check => check(&*oracle),
        Action::Report { range } => report(cmd.model, &*oracle, range),
    }
}

fn oracle(model: Model, nearest: f64) -> Result<Box<dyn DistanceOracle>> {
    Ok(match model {
        Model::Keggin => Box::new(KegginDistances::default()),
        Model::Euclidean => {
            if !(nearest.is_finite() && nearest > 0.0) {
                bail!("--nearest must be a positive finite distance");
            }
            Box::new(EuclideanDistance::with_nearest(nearest))
        }
    })
}

fn compute(oracle: &dyn DistanceOracle, cfg: &RunCfg) -> Result<RunOutput> {
    let keggin = Keggin::new()?;
    tracing::info!(order = keggin.group.order(), "rotation group built");
    Ok(run_with(&keggin, oracle, cfg)?)
}

fn run(
    model: Model,
    oracle: &dyn DistanceOracle,
    out: PathBuf,
    range: ZeroRange,
    table: Option<PathBuf>,
) -> Result<()> {
    let started = Instant::now();
    tracing::info!(
        out = %out.display(),
        ?model,
        min_zeros = range.min_zeros,
        max_zeros = range.max_zeros,
        "started"
    );
    let cfg = range.cfg()?;
    if writer::out_dir_exists(&out)? {
        tracing::warn!(
            out = %out.display(),
            "output directory already exists; rename or delete it to regenerate. Nothing to do"
        );
        return Ok(());
    }
    let result = compute(oracle, &cfg)?;
    writer::create_out_dir(&out)?;

    let mut outputs = Vec::new();
    for report in &result.reports {
        let path = writer::write_report(&out, report)?;
        tracing::info!(
            zeros = report.zero_count,
            orbits = report.rankings.len(),
            file = %path.display(),
            "wrote colorings"
        );
        outputs.push(path);
    }
    if let Some(table) = table {
        writer::write_table(&table, &result.reports)?;
        tracing::info!(file = %table.display(), "wrote table");
        outputs.push(table);
    }
    let params = json!({
        "model": model,
        "min_zeros": cfg.min_zeros,
        "max_zeros": cfg.max_zeros,
        "group_order": result.group_order,
    });
    provenance::write_sidecar(&out, &params, &outputs)?;
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "finished"
    );
    Ok(())
}

fn check(oracle: &dyn DistanceOracle) -> Result<()> {
    let keggin = Keggin::new()?;
    let report = keggin.check(oracle)?;
    tracing::info!(
        pairs = report.pairs,
        elements = report.elements,
        comparisons = report.comparisons(),
        "distance model is invariant under the rotation group"
    );
    Ok(())
}

#[derive(Serialize)]
struct Row {
    label: String,
    distance: f64,
    orbit_size: usize,
}

#[derive(Serialize)]
struct ZeroSummary {
    zeros: usize,
    orbits: usize,
    top: Option<Row>,
    bottom: Option<Row>,
}

#[derive(Serialize)]
struct Summary {
    version: &'static str,
    code_rev: String,
    model: Model,
    group_order: usize,
    comparisons: usize,
    zero_counts: Vec<ZeroSummary>,
}

fn report(model: Model, oracle: &dyn DistanceOracle, range: ZeroRange) -> Result<()> {
    let summary = summarize(model, oracle, range)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn summarize(model: Model, oracle: &dyn DistanceOracle, range: ZeroRange) -> Result<Summary> {
    let result = compute(oracle, &range.cfg()?)?;
    let row = |r: &RankedColoring| Row {
        label: r.label.clone(),
        distance: r.value,
        orbit_size: r.orbit.size(),
    };
    let summary = Summary {
        version: keggin::VERSION,
        code_rev: provenance::current_git_rev(),
        model,
        group_order: result.group_order,
        comparisons: result.invariance.comparisons(),
        zero_counts: result
            .reports
            .iter()
            .map(|rep| ZeroSummary {
                zeros: rep.zero_count,
                orbits: rep.rankings.len(),
                top: rep.rankings.first().map(row),
                bottom: rep.rankings.last().map(row),
            })
            .collect(),
    };
    Ok(summary)
}
