//! Exact k-nearest-neighbor classification with partitioned parallel scans.
//!
//! A query is classified by plurality vote among its `k` nearest training
//! points under a Minkowski distance. The distance scan runs either on the
//! calling thread or fanned out over contiguous partitions of the training
//! set; both strategies return the same prediction.
//!
//! # Quick start
//!
//! ```
//! use kvote_knn::{KnnConfig, LabeledPoint, Strategy, TrainingSet, classify};
//!
//! let train = TrainingSet::new(vec![
//!     LabeledPoint::new(vec![0.0, 0.0], "A"),
//!     LabeledPoint::new(vec![0.1, 0.2], "A"),
//!     LabeledPoint::new(vec![5.0, 5.0], "B"),
//! ])
//! .unwrap();
//!
//! let config = KnnConfig::new(2).with_strategy(Strategy::Partitioned { workers: 2 });
//! let prediction = classify(&train, &[0.0, 0.1], &config).unwrap();
//! assert_eq!(prediction.to_string(), "A");
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify()
//!   ├─ validate inputs
//!   ├─ scan_sequential()            (scan.rs)
//!   │  or scan_partitioned()        (scan.rs, partition.rs)
//!   │     └─ Metric::distance()     (distance.rs)
//!   └─ resolve()                    (vote.rs)
//!        ├─ select_nearest()
//!        └─ VoteTally::winner()
//! ```
//!
//! # Policies
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | empty training set | [`Prediction::Unknown`] |
//! | `k` > number of points | all points vote |
//! | workers > number of points | one point per partition |
//! | equal vote counts | label of the nearest tied neighbor wins |
//! | equal distances | lower training index ranks first |

pub mod classify;
pub mod config;
pub mod distance;
pub mod error;
pub mod partition;
pub mod point;
pub mod scan;
pub mod vote;

pub use classify::{classify, classify_with};
pub use config::{KnnConfig, Strategy};
pub use distance::{DEFAULT_EXPONENT, Metric, Minkowski, distance};
pub use error::KnnError;
pub use partition::{effective_workers, partition_ranges};
pub use point::{Label, LabeledPoint, Prediction, TrainingSet};
pub use scan::{DistanceCandidate, scan_partitioned, scan_sequential};
pub use vote::{VoteTally, resolve, select_nearest};
