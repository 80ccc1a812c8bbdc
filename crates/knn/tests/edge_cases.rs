//! Edge case integration tests.

use kvote_knn::{KnnConfig, Label, LabeledPoint, Prediction, Strategy, TrainingSet, classify};

fn strategies() -> Vec<Strategy> {
    let mut all = vec![Strategy::Sequential];
    all.extend([1, 2, 3, 8, 64].map(|workers| Strategy::Partitioned { workers }));
    all
}

fn predict(train: &TrainingSet, query: &[f64], k: usize, strategy: Strategy) -> Prediction {
    classify(train, query, &KnnConfig::new(k).with_strategy(strategy)).unwrap()
}

/// Empty training set: Unknown for any k and any strategy.
#[test]
fn empty_training_set() {
    let train = TrainingSet::default();
    for strategy in strategies() {
        for k in [1, 2, 10] {
            assert_eq!(predict(&train, &[0.5], k, strategy), Prediction::Unknown);
        }
    }
}

/// Single training point: always wins, whatever k and workers.
#[test]
fn single_point() {
    let train = TrainingSet::new(vec![LabeledPoint::new(vec![3.0, 4.0], "only")]).unwrap();
    for strategy in strategies() {
        for k in [1, 5] {
            let prediction = predict(&train, &[0.0, 0.0], k, strategy);
            assert_eq!(prediction.label(), Some(&Label::new("only")));
        }
    }
}

/// k larger than the training set: every point votes.
#[test]
fn k_greater_than_n() {
    let train = TrainingSet::new(vec![
        LabeledPoint::new(vec![0.0], "A"),
        LabeledPoint::new(vec![1.0], "B"),
        LabeledPoint::new(vec![2.0], "B"),
    ])
    .unwrap();
    for strategy in strategies() {
        assert_eq!(predict(&train, &[0.0], 50, strategy).to_string(), "B");
    }
}

/// More workers than points: partitions collapse, result unchanged.
#[test]
fn workers_exceed_points() {
    let train = TrainingSet::new(vec![
        LabeledPoint::new(vec![0.0], "A"),
        LabeledPoint::new(vec![5.0], "B"),
    ])
    .unwrap();
    let prediction = predict(&train, &[4.0], 1, Strategy::Partitioned { workers: 1000 });
    assert_eq!(prediction.to_string(), "B");
}

/// Query coincides with a training point.
#[test]
fn query_equals_training_point() {
    let train = TrainingSet::new(vec![
        LabeledPoint::new(vec![1.0, 1.0], "A"),
        LabeledPoint::new(vec![2.0, 2.0], "B"),
        LabeledPoint::new(vec![3.0, 3.0], "C"),
    ])
    .unwrap();
    for strategy in strategies() {
        assert_eq!(predict(&train, &[2.0, 2.0], 1, strategy).to_string(), "B");
    }
}

/// All points identical: equal distances fall back to training order.
#[test]
fn identical_points_ranked_by_index() {
    let train = TrainingSet::new(vec![
        LabeledPoint::new(vec![1.0], "first"),
        LabeledPoint::new(vec![1.0], "second"),
        LabeledPoint::new(vec![1.0], "third"),
    ])
    .unwrap();
    for strategy in strategies() {
        assert_eq!(predict(&train, &[0.0], 1, strategy).to_string(), "first");
        // 1-1 tie between first and second -> first ranks ahead.
        assert_eq!(predict(&train, &[0.0], 2, strategy).to_string(), "first");
    }
}

/// Zero-dimensional points: every distance is zero.
#[test]
fn zero_dimensional_points() {
    let train = TrainingSet::new(vec![
        LabeledPoint::new(Vec::new(), "A"),
        LabeledPoint::new(Vec::new(), "B"),
        LabeledPoint::new(Vec::new(), "B"),
    ])
    .unwrap();
    for strategy in strategies() {
        assert_eq!(predict(&train, &[], 3, strategy).to_string(), "B");
    }
}

/// Large training set across many workers (exercises real fan-out).
#[test]
fn large_training_set() {
    let points = (0..10_000)
        .map(|i| {
            let x = i as f64 / 100.0;
            let label = if x < 50.0 { "low" } else { "high" };
            LabeledPoint::new(vec![x, x * 0.5], label)
        })
        .collect();
    let train = TrainingSet::new(points).unwrap();
    for strategy in strategies() {
        assert_eq!(predict(&train, &[10.0, 5.0], 15, strategy).to_string(), "low");
        assert_eq!(predict(&train, &[90.0, 45.0], 15, strategy).to_string(), "high");
    }
}
