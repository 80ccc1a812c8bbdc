//! Seeded synthetic training data for kvote benchmarks and tests.
//!
//! All randomness comes from a caller-supplied [`rand::Rng`]; there is no
//! process-wide generator, so a seeded `StdRng` reproduces a data set exactly.
//!
//! ```
//! use kvote_synth::{generate_query, generate_training_set};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let train = generate_training_set(1_000, 8, 0.05, &mut rng).unwrap();
//! let query = generate_query(8, &mut rng);
//! assert_eq!(train.dimension(), Some(query.len()));
//! ```

mod error;
mod generate;

pub use error::SynthError;
pub use generate::{LABELS, generate_query, generate_training_set};
