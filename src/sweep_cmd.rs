//! Sweep command: time the partitioned classifier over a range of worker
//! counts against the sequential baseline.

use std::num::NonZeroUsize;
use std::thread;

use anyhow::{Result, bail, ensure};
use tracing::{debug_span, info, info_span};

use kvote_knn::Strategy;

use crate::cli::SweepArgs;
use crate::config::KvoteConfig;
use crate::convert;
use crate::report::{self, SweepReport};
use crate::workload::Workload;

/// Run the sweep pipeline.
pub fn run(args: SweepArgs) -> Result<()> {
    let _cmd = info_span!("sweep").entered();
    // 1. Load config and apply CLI overrides
    let mut config = KvoteConfig::load(args.data.config.as_deref())?;
    config.apply_overrides(&args.data);

    ensure!(args.repeats >= 1, "--repeats must be >= 1, got {}", args.repeats);
    let max_workers = args.max_workers.unwrap_or_else(|| {
        thread::available_parallelism().map_or(1, NonZeroUsize::get)
    });
    ensure!(max_workers >= 1, "--max-workers must be >= 1, got {max_workers}");

    // 2. Validate classifier settings and generate data
    let sequential_cfg = convert::build_knn_config(&config.knn, Strategy::Sequential)?;
    let workload = Workload::generate(&config)?;

    // 3. Sequential baseline
    let baseline = workload.best_of(&sequential_cfg, args.repeats)?;
    info!(elapsed_ms = baseline.elapsed_ms, "baseline timed");
    let mut report = SweepReport::new(workload.summary().clone(), args.repeats, baseline);

    // 4. Partitioned runs
    for workers in 1..=max_workers {
        let _w = debug_span!("workers", workers).entered();
        let cfg = convert::build_knn_config(&config.knn, Strategy::Partitioned { workers })?;
        let run = workload.best_of(&cfg, args.repeats)?;
        if run.prediction != report.baseline.prediction {
            bail!(
                "strategies disagree: sequential predicted {}, {} predicted {}",
                report.baseline.prediction,
                run.strategy,
                run.prediction
            );
        }
        report.push(workers, run);
    }

    // 5. Report
    report::emit(&report, args.data.json)
}
