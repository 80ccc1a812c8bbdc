//! Error types for the kvote-knn crate.

/// Error type for all fallible operations in the kvote-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when two compared feature vectors differ in length.
    #[error("dimension mismatch: expected {expected} features, found {found}")]
    DimensionMismatch {
        /// Dimensionality of the reference vector.
        expected: usize,
        /// Dimensionality of the offending vector.
        found: usize,
    },

    /// Returned when a training set mixes points of different dimensionality.
    #[error("training point {index} has {found} features, expected {expected}")]
    InconsistentTrainingSet {
        /// Position of the first offending point.
        index: usize,
        /// Dimensionality of the first point in the set.
        expected: usize,
        /// Dimensionality of the offending point.
        found: usize,
    },

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when the worker count of a partitioned scan is zero.
    #[error("worker count must be >= 1, got {workers}")]
    InvalidWorkers {
        /// The invalid worker count.
        workers: usize,
    },

    /// Returned when the Minkowski exponent is zero.
    #[error("distance exponent must be >= 1, got {p}")]
    InvalidExponent {
        /// The invalid exponent.
        p: u32,
    },

    /// Returned when a required input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },

    /// Returned when the worker pool for a partitioned scan cannot be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}
