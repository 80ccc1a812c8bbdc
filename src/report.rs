//! Benchmark reports: timings, text rendering and JSON output.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use kvote_knn::{Prediction, Strategy};

/// Settings that produced a workload, echoed in every report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSummary {
    pub seed: u64,
    pub n_points: usize,
    pub n_features: usize,
    pub noise_factor: f64,
    pub k: usize,
    pub exponent: u32,
}

/// One timed classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunTiming {
    /// Strategy name, e.g. `partitioned(8)`.
    pub strategy: String,
    /// Effective partition count; `None` for a sequential scan.
    pub workers: Option<usize>,
    /// Predicted label, or `Unknown`.
    pub prediction: String,
    pub elapsed_ms: f64,
}

impl RunTiming {
    pub fn new(
        strategy: Strategy,
        workers: Option<usize>,
        prediction: &Prediction,
        elapsed: Duration,
    ) -> Self {
        Self {
            strategy: strategy.to_string(),
            workers,
            prediction: prediction.to_string(),
            elapsed_ms: elapsed.as_secs_f64() * 1e3,
        }
    }
}

/// Ratio of baseline to measured latency.
///
/// `None` when the measured run took no observable time.
pub fn speedup(baseline: &RunTiming, run: &RunTiming) -> Option<f64> {
    (run.elapsed_ms > 0.0).then(|| baseline.elapsed_ms / run.elapsed_ms)
}

/// Result of `kvote bench`.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub data: DataSummary,
    pub sequential: RunTiming,
    pub partitioned: RunTiming,
    pub speedup: Option<f64>,
    pub agree: bool,
}

impl BenchReport {
    pub fn new(data: DataSummary, sequential: RunTiming, partitioned: RunTiming) -> Self {
        let speedup = speedup(&sequential, &partitioned);
        let agree = sequential.prediction == partitioned.prediction;
        Self {
            data,
            sequential,
            partitioned,
            speedup,
            agree,
        }
    }
}

/// One worker count of `kvote sweep`.
#[derive(Debug, Serialize)]
pub struct SweepRow {
    /// Requested worker count.
    pub workers: usize,
    pub run: RunTiming,
    pub speedup: Option<f64>,
}

/// Result of `kvote sweep`.
#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub data: DataSummary,
    pub repeats: usize,
    pub baseline: RunTiming,
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    pub fn new(data: DataSummary, repeats: usize, baseline: RunTiming) -> Self {
        Self {
            data,
            repeats,
            baseline,
            rows: Vec::new(),
        }
    }

    /// Appends a timed run against the baseline.
    pub fn push(&mut self, workers: usize, run: RunTiming) {
        let speedup = speedup(&self.baseline, &run);
        self.rows.push(SweepRow {
            workers,
            run,
            speedup,
        });
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, data: &DataSummary) -> fmt::Result {
    writeln!(
        f,
        "data: {} points x {} features, noise {}, seed {}",
        data.n_points, data.n_features, data.noise_factor, data.seed
    )?;
    writeln!(f, "knn:  k = {}, exponent = {}", data.k, data.exponent)
}

fn format_speedup(speedup: Option<f64>) -> String {
    speedup.map_or_else(|| "-".to_string(), |s| format!("{s:.2}x"))
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &self.data)?;
        for run in [&self.sequential, &self.partitioned] {
            writeln!(
                f,
                "{:<18} label {:<8} {:>10.3} ms",
                run.strategy, run.prediction, run.elapsed_ms
            )?;
        }
        writeln!(f, "speedup: {}", format_speedup(self.speedup))?;
        writeln!(f, "agree:   {}", if self.agree { "yes" } else { "no" })
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &self.data)?;
        writeln!(
            f,
            "baseline: sequential, label {}, {:.3} ms (best of {})",
            self.baseline.prediction, self.baseline.elapsed_ms, self.repeats
        )?;
        writeln!(
            f,
            "{:>7} {:>9} {:>12} {:>9}",
            "workers", "effective", "ms", "speedup"
        )?;
        for row in &self.rows {
            let effective = row.run.workers.unwrap_or(row.workers);
            writeln!(
                f,
                "{:>7} {:>9} {:>12.3} {:>9}",
                row.workers,
                effective,
                row.run.elapsed_ms,
                format_speedup(row.speedup)
            )?;
        }
        Ok(())
    }
}

/// Prints `report` to stdout as text, or as pretty JSON when `json` is set.
pub fn emit<R: fmt::Display + Serialize>(report: &R, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        println!("{text}");
    } else {
        print!("{report}");
    }
    Ok(())
}
