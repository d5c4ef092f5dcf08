use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use accudot_core::{DotVariant, WorkingFloat, dot_product, reference_dot_product, score_variants};
use anyhow::Context;
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;
use tracing::info;

use super::CliError;
use super::helpers::{
    BenchReport, VariantSummary, random_vector, render_bench_summary, write_report,
};

#[derive(clap::Args)]
pub(super) struct BenchArgs {
    /// Vector dimension per trial
    #[arg(long, default_value_t = 1024)]
    dimension: usize,

    /// Number of random trials
    #[arg(long, default_value_t = 256)]
    trials: usize,

    /// Magnitude bound for uniformly generated components
    #[arg(long, default_value_t = 1_048_576.0)]
    max_magnitude: f64,

    /// Trial generator seed (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Working precision under test
    #[arg(long, value_enum, default_value_t = Precision::Single)]
    precision: Precision,

    /// Optional JSON report output path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct EvalArgs {
    /// Input JSON file with `v1` and `v2` arrays
    #[arg(long)]
    input: PathBuf,

    /// Working precision to evaluate at
    #[arg(long, value_enum, default_value_t = Precision::Double)]
    precision: Precision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum Precision {
    Single,
    Double,
}

impl Precision {
    fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

pub(super) fn run_bench_command(args: BenchArgs) -> Result<i32, CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        dimension = args.dimension,
        trials = args.trials,
        precision = args.precision.as_str(),
        "starting benchmark"
    );

    let report = match args.precision {
        Precision::Single => run_trials::<f32>(&args, seed)?,
        Precision::Double => run_trials::<f64>(&args, seed)?,
    };

    println!("{}", render_bench_summary(&report));
    if let Some(path) = &args.report {
        write_report(path, &report)?;
        println!("JSON report: {}", path.display());
    }
    Ok(0)
}

fn run_trials<F: WorkingFloat>(args: &BenchArgs, seed: u64) -> Result<BenchReport, CliError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut total_errors = [0.0f64; DotVariant::ALL.len()];
    let mut total_times = [Duration::ZERO; DotVariant::ALL.len()];
    let mut oracle_time = Duration::ZERO;

    for _ in 0..args.trials {
        let v1: Vec<F> = random_vector(&mut rng, args.dimension, args.max_magnitude);
        let v2: Vec<F> = random_vector(&mut rng, args.dimension, args.max_magnitude);

        let start = Instant::now();
        let reference = reference_dot_product(&v1, &v2)?;
        oracle_time += start.elapsed();

        for (index, &variant) in DotVariant::ALL.iter().enumerate() {
            let start = Instant::now();
            let result = dot_product(variant, &v1, &v2)?;
            total_times[index] += start.elapsed();
            total_errors[index] += (result.widen() - reference).abs();
        }
    }

    let trial_count = args.trials.max(1) as f64;
    let variants = DotVariant::ALL
        .iter()
        .enumerate()
        .map(|(index, &variant)| VariantSummary {
            variant,
            total_absolute_error: total_errors[index],
            mean_absolute_error: total_errors[index] / trial_count,
            total_seconds: total_times[index].as_secs_f64(),
        })
        .collect();

    Ok(BenchReport {
        precision: args.precision.as_str().to_string(),
        dimension: args.dimension,
        trials: args.trials,
        max_magnitude: args.max_magnitude,
        seed,
        oracle_seconds: oracle_time.as_secs_f64(),
        variants,
    })
}

#[derive(Debug, Deserialize)]
struct EvalInput {
    v1: Vec<f64>,
    v2: Vec<f64>,
}

pub(super) fn run_eval_command(args: EvalArgs) -> Result<i32, CliError> {
    let body = fs::read_to_string(&args.input)
        .with_context(|| format!("reading input {}", args.input.display()))?;
    let input: EvalInput = serde_json::from_str(&body)
        .with_context(|| format!("parsing input vectors from {}", args.input.display()))?;

    let trial = match args.precision {
        Precision::Single => {
            let v1: Vec<f32> = input.v1.iter().map(|&value| f32::from_widened(value)).collect();
            let v2: Vec<f32> = input.v2.iter().map(|&value| f32::from_widened(value)).collect();
            score_variants(&v1, &v2)?
        }
        Precision::Double => score_variants(&input.v1, &input.v2)?,
    };

    println!("reference {:e}", trial.reference);
    for score in &trial.scores {
        println!(
            "{:<8} result {:e}  |error| {:e}",
            score.variant.as_str(),
            score.result,
            score.absolute_error
        );
    }
    Ok(0)
}
