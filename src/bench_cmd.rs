//! Bench command: time one sequential and one partitioned classification.

use anyhow::{Result, bail};
use tracing::{info, info_span};

use kvote_knn::Strategy;

use crate::cli::BenchArgs;
use crate::config::KvoteConfig;
use crate::convert;
use crate::report::{self, BenchReport};
use crate::workload::Workload;

/// Run the bench pipeline.
pub fn run(args: BenchArgs) -> Result<()> {
    let _cmd = info_span!("bench").entered();
    // 1. Load config and apply CLI overrides
    let mut config = KvoteConfig::load(args.data.config.as_deref())?;
    config.apply_overrides(&args.data);
    if let Some(workers) = args.workers {
        config.knn.workers = workers;
    }

    // 2. Validate classifier settings before generating anything
    let sequential_cfg = convert::build_knn_config(&config.knn, Strategy::Sequential)?;
    let partitioned_cfg = convert::build_knn_config(
        &config.knn,
        Strategy::Partitioned {
            workers: config.knn.workers,
        },
    )?;

    // 3. Generate data
    let workload = Workload::generate(&config)?;

    // 4. Classify with both strategies
    let sequential = workload.classify_timed(&sequential_cfg)?;
    let partitioned = workload.classify_timed(&partitioned_cfg)?;

    // 5. Report
    let report = BenchReport::new(workload.summary().clone(), sequential, partitioned);
    report::emit(&report, args.data.json)?;

    if !report.agree {
        bail!(
            "strategies disagree: sequential predicted {}, {} predicted {}",
            report.sequential.prediction,
            report.partitioned.strategy,
            report.partitioned.prediction
        );
    }
    info!(prediction = %report.sequential.prediction, "bench complete");
    Ok(())
}
