use std::fs;
use std::path::Path;

use accudot_core::{DotVariant, WorkingFloat};
use anyhow::Context;
use rand::{Rng, rngs::StdRng};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BenchReport {
    pub precision: String,
    pub dimension: usize,
    pub trials: usize,
    pub max_magnitude: f64,
    pub seed: u64,
    pub oracle_seconds: f64,
    pub variants: Vec<VariantSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VariantSummary {
    pub variant: DotVariant,
    pub total_absolute_error: f64,
    pub mean_absolute_error: f64,
    pub total_seconds: f64,
}

/// Uniform components in `[-max_magnitude, max_magnitude)`, rounded to the
/// working precision.
pub(super) fn random_vector<F: WorkingFloat>(
    rng: &mut StdRng,
    dimension: usize,
    max_magnitude: f64,
) -> Vec<F> {
    (0..dimension)
        .map(|_| F::from_widened((rng.random::<f64>() - 0.5) * 2.0 * max_magnitude))
        .collect()
}

pub(super) fn render_bench_summary(report: &BenchReport) -> String {
    let mut lines = vec![
        format!(
            "Ran {} trials of dimension {} ({} precision, seed {})",
            report.trials, report.dimension, report.precision, report.seed
        ),
        format!("Oracle time: {:.9} s", report.oracle_seconds),
    ];
    for summary in &report.variants {
        lines.push(format!(
            "{:<8} time {:.9} s  total |error| {:e}  mean {:e}",
            summary.variant.as_str(),
            summary.total_seconds,
            summary.total_absolute_error,
            summary.mean_absolute_error
        ));
    }
    lines.join("\n")
}

pub(super) fn write_report(path: &Path, report: &BenchReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }
    let body = serde_json::to_string_pretty(report).context("serializing benchmark report")?;
    fs::write(path, body).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
