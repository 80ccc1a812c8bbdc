//! Classification entry points.

use tracing::debug;

use crate::config::{KnnConfig, Strategy};
use crate::distance::Metric;
use crate::error::KnnError;
use crate::point::{Prediction, TrainingSet};
use crate::scan::{scan_partitioned, scan_sequential};
use crate::vote::resolve;

/// Classifies `query` by plurality vote among its `k` nearest training
/// points under `metric`, scanning with the given strategy.
///
/// Every strategy returns the same prediction for the same inputs.
///
/// Validation runs before any scan is dispatched, in this order: `k`, worker
/// count, finiteness of `query`, then dimensionality. An empty training set
/// yields [`Prediction::Unknown`].
///
/// # Errors
///
/// Returns [`KnnError::InvalidK`], [`KnnError::InvalidWorkers`],
/// [`KnnError::NonFiniteInput`] or [`KnnError::DimensionMismatch`] for
/// invalid inputs, and [`KnnError::WorkerPool`] if a partitioned scan cannot
/// start its workers.
#[tracing::instrument(skip_all, fields(n = train.len(), k = k, strategy = %strategy))]
pub fn classify_with<M: Metric + ?Sized>(
    train: &TrainingSet,
    query: &[f64],
    k: usize,
    strategy: Strategy,
    metric: &M,
) -> Result<Prediction, KnnError> {
    if k == 0 {
        return Err(KnnError::InvalidK { k });
    }
    if let Strategy::Partitioned { workers: 0 } = strategy {
        return Err(KnnError::InvalidWorkers { workers: 0 });
    }
    if query.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "query" });
    }

    let Some(dimension) = train.dimension() else {
        debug!("empty training set, prediction unknown");
        return Ok(Prediction::Unknown);
    };
    if query.len() != dimension {
        return Err(KnnError::DimensionMismatch {
            expected: dimension,
            found: query.len(),
        });
    }

    let candidates = match strategy {
        Strategy::Sequential => scan_sequential(train, query, metric)?,
        Strategy::Partitioned { workers } => scan_partitioned(train, query, metric, workers)?,
    };
    let prediction = resolve(candidates, k)?;
    debug!(%prediction, "query classified");
    Ok(prediction)
}

/// Classifies `query` using the k, strategy and Minkowski exponent of
/// `config`.
///
/// # Example
///
/// ```
/// use kvote_knn::{KnnConfig, LabeledPoint, Strategy, TrainingSet, classify};
///
/// let train = TrainingSet::new(vec![
///     LabeledPoint::new(vec![0.0], "A"),
///     LabeledPoint::new(vec![10.0], "B"),
/// ])
/// .unwrap();
///
/// let config = KnnConfig::new(1).with_strategy(Strategy::Partitioned { workers: 2 });
/// let prediction = classify(&train, &[0.1], &config).unwrap();
/// assert_eq!(prediction.to_string(), "A");
/// ```
///
/// # Errors
///
/// Returns [`KnnError`] if the configuration is invalid (see
/// [`KnnConfig::validate`]) or for any error of [`classify_with`].
pub fn classify(
    train: &TrainingSet,
    query: &[f64],
    config: &KnnConfig,
) -> Result<Prediction, KnnError> {
    config.validate()?;
    let metric = config.metric()?;
    classify_with(train, query, config.k(), config.strategy(), &metric)
}
