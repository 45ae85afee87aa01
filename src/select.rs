use std::collections::HashMap;

use crate::error::ShuffleError;
use crate::model::group::{Candidate, Partition};

/// Picks the lowest-scoring partition. Ties go to the partition that sorts
/// first under the canonical set ordering, so the choice never depends on map
/// iteration order.
pub fn choose_best(scored: &HashMap<Partition, u32>) -> Result<Candidate, ShuffleError> {
    scored
        .iter()
        .min_by(|(p1, s1), (p2, s2)| s1.cmp(s2).then_with(|| p1.cmp(p2)))
        .map(|(partition, score)| Candidate {
            partition: partition.clone(),
            score: *score,
        })
        .ok_or(ShuffleError::EmptyCandidateSet)
}
