//! Error types for the kvote-synth crate.

use kvote_knn::KnnError;

/// Error type for all fallible operations in the kvote-synth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthError {
    /// Returned when the noise factor is negative or non-finite.
    #[error("noise factor must be finite and >= 0, got {noise}")]
    InvalidNoise {
        /// The invalid noise factor.
        noise: f64,
    },

    /// Returned when zero features per point are requested.
    #[error("number of features must be >= 1")]
    ZeroFeatures,

    /// Returned when the generated points do not form a valid training set.
    #[error(transparent)]
    Knn(#[from] KnnError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_noise() {
        let e = SynthError::InvalidNoise { noise: -0.5 };
        assert_eq!(e.to_string(), "noise factor must be finite and >= 0, got -0.5");
    }

    #[test]
    fn error_zero_features() {
        assert_eq!(
            SynthError::ZeroFeatures.to_string(),
            "number of features must be >= 1"
        );
    }

    #[test]
    fn error_from_knn() {
        let e: SynthError = KnnError::InvalidK { k: 0 }.into();
        assert_eq!(e.to_string(), "k must be >= 1, got 0");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<SynthError>();
    }
}
