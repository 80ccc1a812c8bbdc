//! Distance scans from a query to every training point.
//!
//! [`scan_sequential`] and [`scan_partitioned`] are interchangeable: for the
//! same inputs they produce the same multiset of candidates, only latency
//! differs.

use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::distance::Metric;
use crate::error::KnnError;
use crate::partition::partition_ranges;
use crate::point::{LabeledPoint, TrainingSet};

/// Distance from the query to one training point.
///
/// Borrows the point from its [`TrainingSet`]; lives for one query.
#[derive(Debug, Clone, Copy)]
pub struct DistanceCandidate<'a> {
    distance: f64,
    index: usize,
    point: &'a LabeledPoint,
}

impl<'a> DistanceCandidate<'a> {
    /// Creates a candidate for the point at `index` of its training set.
    pub fn new(distance: f64, index: usize, point: &'a LabeledPoint) -> Self {
        Self {
            distance,
            index,
            point,
        }
    }

    /// Returns the distance to the query.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the point's position in the training set.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the training point.
    pub fn point(&self) -> &'a LabeledPoint {
        self.point
    }
}

/// Scans `range` of the training set.
fn scan_range<'a, M: Metric + ?Sized>(
    train: &'a TrainingSet,
    range: Range<usize>,
    query: &[f64],
    metric: &M,
) -> Result<Vec<DistanceCandidate<'a>>, KnnError> {
    let start = range.start;
    train.points()[range]
        .iter()
        .enumerate()
        .map(|(offset, point)| {
            let distance = metric.distance(point.features(), query)?;
            Ok(DistanceCandidate::new(distance, start + offset, point))
        })
        .collect()
}

/// Computes the distance from `query` to every training point on the
/// calling thread.
///
/// Returns one candidate per point, in training order.
///
/// # Errors
///
/// Returns [`KnnError::DimensionMismatch`] if any point's dimensionality
/// differs from the query's.
pub fn scan_sequential<'a, M: Metric + ?Sized>(
    train: &'a TrainingSet,
    query: &[f64],
    metric: &M,
) -> Result<Vec<DistanceCandidate<'a>>, KnnError> {
    scan_range(train, 0..train.len(), query, metric)
}

/// Computes the distance from `query` to every training point, splitting the
/// training set into contiguous partitions scanned concurrently.
///
/// A dedicated pool of `min(workers, n)` threads runs one task per partition
/// (see [`partition_ranges`]). The call returns once every task has finished;
/// partial results are concatenated in partition order. If any partition
/// fails the whole scan fails and no candidates are returned. The pool is
/// torn down before returning on every path.
///
/// The pool is built and joined on every call, so measured latency includes
/// spawning `min(workers, n)` threads. For small training sets this startup
/// can exceed the scan itself. A single partition runs on the calling thread
/// and spawns nothing.
///
/// # Errors
///
/// Returns [`KnnError::InvalidWorkers`] if `workers == 0` (before any work
/// is dispatched), [`KnnError::DimensionMismatch`] if any point's
/// dimensionality differs from the query's, and [`KnnError::WorkerPool`] if
/// the thread pool cannot be created.
#[tracing::instrument(skip_all, fields(n = train.len(), workers = workers))]
pub fn scan_partitioned<'a, M: Metric + ?Sized>(
    train: &'a TrainingSet,
    query: &[f64],
    metric: &M,
    workers: usize,
) -> Result<Vec<DistanceCandidate<'a>>, KnnError> {
    if workers == 0 {
        return Err(KnnError::InvalidWorkers { workers });
    }

    let ranges = partition_ranges(train.len(), workers);
    if ranges.len() < workers {
        debug!(
            requested = workers,
            effective = ranges.len(),
            "worker count clamped to training set size"
        );
    }

    // One partition: nothing to fan out.
    if let [range] = ranges.as_slice() {
        return scan_range(train, range.clone(), query, metric);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ranges.len())
        .thread_name(|i| format!("kvote-scan-{i}"))
        .build()
        .map_err(|e| KnnError::WorkerPool(e.to_string()))?;

    debug!(partitions = ranges.len(), "dispatching partition scans");
    let partials: Vec<Vec<DistanceCandidate<'a>>> = pool.install(|| {
        ranges
            .into_par_iter()
            .map(|range| scan_range(train, range, query, metric))
            .collect::<Result<Vec<_>, _>>()
    })?;

    Ok(partials.into_iter().flatten().collect())
}
