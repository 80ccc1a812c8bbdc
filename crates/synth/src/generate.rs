//! Noisy uniform training points with two balanced labels.

use rand::Rng;
use rand::distr::{Distribution, Uniform};
use tracing::debug;

use kvote_knn::{LabeledPoint, TrainingSet};

use crate::error::SynthError;

/// Labels assigned to generated points.
pub const LABELS: [&str; 2] = ["A", "B"];

/// Generates `n_points` labeled points with `n_features` features each.
///
/// Each feature is drawn uniformly from `[0, 1)` and then shifted by uniform
/// noise from `[-noise_factor, noise_factor)`. The label is `"A"` when an
/// independent uniform draw exceeds 0.5, `"B"` otherwise, so labels carry no
/// information about the features. A zero noise factor adds no noise.
///
/// Identical seeds give identical training sets.
///
/// # Errors
///
/// Returns [`SynthError::ZeroFeatures`] if `n_features == 0` and
/// [`SynthError::InvalidNoise`] if `noise_factor` is negative, non-finite, or
/// so large that `2 * noise_factor` overflows.
#[tracing::instrument(skip(rng))]
pub fn generate_training_set(
    n_points: usize,
    n_features: usize,
    noise_factor: f64,
    rng: &mut impl Rng,
) -> Result<TrainingSet, SynthError> {
    if n_features == 0 {
        return Err(SynthError::ZeroFeatures);
    }
    if !noise_factor.is_finite() || noise_factor < 0.0 {
        return Err(SynthError::InvalidNoise {
            noise: noise_factor,
        });
    }

    // The width 2 * noise_factor must itself be finite.
    let noise = if noise_factor > 0.0 {
        let dist = Uniform::new(-noise_factor, noise_factor).map_err(|_| {
            SynthError::InvalidNoise {
                noise: noise_factor,
            }
        })?;
        Some(dist)
    } else {
        None
    };

    let mut points = Vec::with_capacity(n_points);
    for _ in 0..n_points {
        let mut features: Vec<f64> = (0..n_features).map(|_| rng.random()).collect();
        let label = if rng.random::<f64>() > 0.5 {
            LABELS[0]
        } else {
            LABELS[1]
        };
        if let Some(noise) = &noise {
            for f in &mut features {
                *f += noise.sample(rng);
            }
        }
        points.push(LabeledPoint::new(features, label));
    }

    let train = TrainingSet::new(points)?;
    debug!(n = train.len(), "training set generated");
    Ok(train)
}

/// Generates an unlabeled query point with features uniform in `[0, 1)`.
pub fn generate_query(n_features: usize, rng: &mut impl Rng) -> Vec<f64> {
    (0..n_features).map(|_| rng.random()).collect()
}
