//! Labeled points, training sets and predictions.

use std::fmt;

use crate::error::KnnError;

/// Categorical class identifier attached to a training point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(String);

impl Label {
    /// Creates a label from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One training example: a feature vector and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    features: Vec<f64>,
    label: Label,
}

impl LabeledPoint {
    /// Creates a labeled point.
    pub fn new(features: Vec<f64>, label: impl Into<Label>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }

    /// Returns the feature vector.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Returns the label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Returns the number of features.
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

/// An ordered, read-only collection of labeled points of equal dimensionality.
///
/// # Example
///
/// ```
/// use kvote_knn::{LabeledPoint, TrainingSet};
///
/// let train = TrainingSet::new(vec![
///     LabeledPoint::new(vec![0.0, 1.0], "A"),
///     LabeledPoint::new(vec![2.0, 3.0], "B"),
/// ])
/// .unwrap();
///
/// assert_eq!(train.len(), 2);
/// assert_eq!(train.dimension(), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    points: Vec<LabeledPoint>,
    dimension: Option<usize>,
}

impl TrainingSet {
    /// Creates a training set, checking that every point has the same
    /// dimensionality as the first one and only finite features.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InconsistentTrainingSet`] naming the first point
    /// whose dimensionality differs, and [`KnnError::NonFiniteInput`] if any
    /// feature is NaN or infinite.
    pub fn new(points: Vec<LabeledPoint>) -> Result<Self, KnnError> {
        let dimension = points.first().map(LabeledPoint::dimension);
        if let Some(expected) = dimension {
            if let Some((index, p)) = points
                .iter()
                .enumerate()
                .find(|(_, p)| p.dimension() != expected)
            {
                return Err(KnnError::InconsistentTrainingSet {
                    index,
                    expected,
                    found: p.dimension(),
                });
            }
        }
        if points
            .iter()
            .any(|p| p.features().iter().any(|v| !v.is_finite()))
        {
            return Err(KnnError::NonFiniteInput {
                input: "training set",
            });
        }
        Ok(Self { points, dimension })
    }

    /// Returns the points in insertion order.
    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the shared dimensionality, or `None` for an empty set.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }
}

/// Outcome of a classification query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// The winning label of the plurality vote.
    Label(Label),
    /// No candidates were available (empty training set).
    Unknown,
}

impl Prediction {
    /// Returns the predicted label, or `None` for [`Prediction::Unknown`].
    pub fn label(&self) -> Option<&Label> {
        match self {
            Prediction::Label(label) => Some(label),
            Prediction::Unknown => None,
        }
    }

    /// Returns `true` for [`Prediction::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Prediction::Unknown)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Label(label) => label.fmt(f),
            Prediction::Unknown => f.write_str("Unknown"),
        }
    }
}
