//! Top-k selection and plurality vote.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

use crate::error::KnnError;
use crate::point::{Label, Prediction};
use crate::scan::DistanceCandidate;

/// Total order on candidates: ascending distance, then ascending training
/// index. The index makes the order independent of how partial scans were
/// merged.
fn by_distance(a: &DistanceCandidate<'_>, b: &DistanceCandidate<'_>) -> Ordering {
    a.distance()
        .total_cmp(&b.distance())
        .then_with(|| a.index().cmp(&b.index()))
}

/// Returns the `min(k, candidates.len())` nearest candidates, sorted by
/// ascending distance (ties by training index).
///
/// Uses `select_nth_unstable_by` to partition around the k-th candidate, then
/// sorts only the selected prefix.
pub fn select_nearest(
    mut candidates: Vec<DistanceCandidate<'_>>,
    k: usize,
) -> Vec<DistanceCandidate<'_>> {
    let k_eff = k.min(candidates.len());
    if k_eff == 0 {
        candidates.clear();
        return candidates;
    }
    if k_eff < candidates.len() {
        candidates.select_nth_unstable_by(k_eff - 1, by_distance);
        candidates.truncate(k_eff);
    }
    candidates.sort_unstable_by(by_distance);
    candidates
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Votes {
    count: usize,
    /// Rank of the label's nearest member in the neighbor list.
    first_rank: usize,
}

/// Per-label vote counts over a neighbor set.
///
/// Ties on the maximum count go to the label whose nearest member ranks
/// first in the neighbor list.
///
/// # Example
///
/// ```
/// use kvote_knn::{DistanceCandidate, Label, LabeledPoint, VoteTally};
///
/// let a = LabeledPoint::new(vec![1.0], "A");
/// let b = LabeledPoint::new(vec![2.0], "B");
/// let neighbors = [DistanceCandidate::new(1.0, 0, &a), DistanceCandidate::new(2.0, 1, &b)];
///
/// let tally = VoteTally::from_neighbors(&neighbors);
/// assert_eq!(tally.count(&Label::new("A")), 1);
/// assert_eq!(tally.winner(), Some(&Label::new("A")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    votes: BTreeMap<Label, Votes>,
}

impl VoteTally {
    /// Tallies labels over `neighbors`, which must already be sorted nearest
    /// first.
    pub fn from_neighbors(neighbors: &[DistanceCandidate<'_>]) -> Self {
        let mut votes: BTreeMap<Label, Votes> = BTreeMap::new();
        for (rank, candidate) in neighbors.iter().enumerate() {
            votes
                .entry(candidate.point().label().clone())
                .and_modify(|v| v.count += 1)
                .or_insert(Votes {
                    count: 1,
                    first_rank: rank,
                });
        }
        Self { votes }
    }

    /// Returns the number of votes for `label`.
    pub fn count(&self, label: &Label) -> usize {
        self.votes.get(label).map_or(0, |v| v.count)
    }

    /// Returns the number of distinct labels.
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    /// Returns `true` if no votes were cast.
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Iterates over `(label, count)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, usize)> {
        self.votes.iter().map(|(label, v)| (label, v.count))
    }

    /// Returns the plurality winner, or `None` if no votes were cast.
    pub fn winner(&self) -> Option<&Label> {
        self.votes
            .iter()
            .max_by_key(|(_, v)| (v.count, Reverse(v.first_rank)))
            .map(|(label, _)| label)
    }
}

/// Predicts a label from the distance candidates of one query.
///
/// Selects the `min(k, candidates.len())` nearest candidates and returns the
/// plurality label among them (see [`VoteTally`] for the tie-break). Returns
/// [`Prediction::Unknown`] when `candidates` is empty.
///
/// # Errors
///
/// Returns [`KnnError::InvalidK`] if `k == 0`.
pub fn resolve(candidates: Vec<DistanceCandidate<'_>>, k: usize) -> Result<Prediction, KnnError> {
    if k == 0 {
        return Err(KnnError::InvalidK { k });
    }
    let neighbors = select_nearest(candidates, k);
    let tally = VoteTally::from_neighbors(&neighbors);
    Ok(tally
        .winner()
        .cloned()
        .map_or(Prediction::Unknown, Prediction::Label))
}
