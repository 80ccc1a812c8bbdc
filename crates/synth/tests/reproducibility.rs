//! Integration tests: seeded generation is reproducible and feeds the
//! classifier.

use kvote_knn::{KnnConfig, Strategy, classify};
use kvote_synth::{generate_query, generate_training_set};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn same_seed_same_data() {
    let a = generate_training_set(300, 5, 0.05, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_training_set(300, 5, 0.05, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.points(), b.points());
}

#[test]
fn different_seed_different_data() {
    let a = generate_training_set(50, 5, 0.05, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = generate_training_set(50, 5, 0.05, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_ne!(a.points(), b.points());
}

#[test]
fn query_follows_training_set_in_stream() {
    let mut rng1 = StdRng::seed_from_u64(9);
    let _ = generate_training_set(20, 3, 0.05, &mut rng1).unwrap();
    let q1 = generate_query(3, &mut rng1);

    let mut rng2 = StdRng::seed_from_u64(9);
    let _ = generate_training_set(20, 3, 0.05, &mut rng2).unwrap();
    let q2 = generate_query(3, &mut rng2);

    assert_eq!(q1, q2);
}

#[test]
fn generated_data_classifies_identically_across_strategies() {
    let mut rng = StdRng::seed_from_u64(2024);
    let train = generate_training_set(5_000, 20, 0.05, &mut rng).unwrap();
    for _ in 0..5 {
        let query = generate_query(20, &mut rng);
        let sequential = classify(&train, &query, &KnnConfig::new(10)).unwrap();
        assert!(!sequential.is_unknown());
        for workers in [2, 8] {
            let config = KnnConfig::new(10).with_strategy(Strategy::Partitioned { workers });
            assert_eq!(classify(&train, &query, &config).unwrap(), sequential);
        }
    }
}
