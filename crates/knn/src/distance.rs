//! Minkowski-style distances between feature vectors.

use crate::error::KnnError;

/// Exponent used by [`Minkowski::default`].
///
/// Note that this is not Euclidean distance (`p = 2`): a 10th-power metric
/// lets the single largest per-feature difference dominate the result.
pub const DEFAULT_EXPONENT: u32 = 10;

/// A dissimilarity measure between two feature vectors.
///
/// Implementations must be deterministic, non-negative and symmetric, and
/// must fail with [`KnnError::DimensionMismatch`] rather than compare vectors
/// of different lengths. `Sync` is required so one metric can be shared by
/// every worker of a partitioned scan.
pub trait Metric: Sync {
    /// Computes the distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError>;
}

/// Minkowski distance of order `p`: `(Σᵢ |aᵢ − bᵢ|^p)^(1/p)`.
///
/// # Example
///
/// ```
/// use kvote_knn::{Metric, Minkowski};
///
/// let metric = Minkowski::euclidean();
/// let d = metric.distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minkowski {
    p: u32,
}

impl Minkowski {
    /// Creates a Minkowski metric of order `p`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InvalidExponent`] if `p == 0`.
    pub fn new(p: u32) -> Result<Self, KnnError> {
        if p == 0 {
            return Err(KnnError::InvalidExponent { p });
        }
        Ok(Self { p })
    }

    /// Manhattan distance (`p = 1`).
    pub fn manhattan() -> Self {
        Self { p: 1 }
    }

    /// Euclidean distance (`p = 2`).
    pub fn euclidean() -> Self {
        Self { p: 2 }
    }

    /// Returns the exponent.
    pub fn p(&self) -> u32 {
        self.p
    }
}

impl Default for Minkowski {
    fn default() -> Self {
        Self {
            p: DEFAULT_EXPONENT,
        }
    }
}

impl Metric for Minkowski {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        if a.len() != b.len() {
            return Err(KnnError::DimensionMismatch {
                expected: a.len(),
                found: b.len(),
            });
        }
        Ok(match self.p {
            1 => manhattan(a, b),
            _ => scaled_minkowski(a, b, self.p),
        })
    }
}

/// Computes the Minkowski distance of order `p` between `a` and `b`.
///
/// # Errors
///
/// Returns [`KnnError::InvalidExponent`] if `p == 0` and
/// [`KnnError::DimensionMismatch`] if the vectors differ in length.
pub fn distance(a: &[f64], b: &[f64], p: u32) -> Result<f64, KnnError> {
    Minkowski::new(p)?.distance(a, b)
}

#[inline]
fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// Evaluates `m · (Σ (|δᵢ| / m)^p)^(1/p)` with `m = max |δᵢ|`.
///
/// Every scaled term lies in `[0, 1]`, so large exponents cannot overflow.
/// A NaN difference makes the result NaN, as in the Manhattan path.
#[inline]
fn scaled_minkowski(a: &[f64], b: &[f64], p: u32) -> f64 {
    let scale = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0_f64, |m, d| if d > m || d.is_nan() { d } else { m });
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }

    let exp = i32::try_from(p).unwrap_or(i32::MAX);
    let acc: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| ((x - y).abs() / scale).powi(exp))
        .sum();

    match p {
        2 => scale * acc.sqrt(),
        _ => scale * acc.powf(1.0 / f64::from(p)),
    }
}
