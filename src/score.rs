use itertools::Itertools;

use crate::model::group::{Group, Partition};
use crate::model::pairs::PairCountMap;

/// Past interactions the whole partition would repeat.
pub fn partition_score(partition: &Partition, counts: &PairCountMap) -> u32 {
    partition.iter().map(|group| group_score(group, counts)).sum()
}

fn group_score(group: &Group, counts: &PairCountMap) -> u32 {
    group
        .iter()
        .combinations(2)
        .map(|pair| counts.get_pair([pair[0], pair[1]]))
        .sum()
}
