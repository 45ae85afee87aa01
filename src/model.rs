pub mod entity {
    use std::collections::{BTreeMap, BTreeSet};

    pub type Person = String;
    pub type TeamName = String;

    /// A pre-existing regular grouping. Teammates are biased apart from the
    /// very first run, as if they had already been grouped once.
    pub type Team = BTreeSet<Person>;
    pub type Teams = BTreeMap<TeamName, Team>;
}

pub mod group {
    use std::collections::BTreeSet;

    use serde::{Deserialize, Serialize};

    use super::entity::Person;

    /// 3 or 4 people placed together for a single run.
    pub type Group = BTreeSet<Person>;

    /// Groups covering the roster exactly once. The `BTreeSet` ordering doubles
    /// as the canonical total order used when breaking score ties.
    pub type Partition = BTreeSet<Group>;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Candidate {
        pub partition: Partition,
        /// Past interactions this partition would repeat (lower is better).
        pub score: u32,
    }

    /// How many groups of each size to form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SplitPlan {
        pub fours: usize,
        pub threes: usize,
    }

    impl SplitPlan {
        pub fn covers(&self) -> usize {
            self.fours * 4 + self.threes * 3
        }
    }
}

pub mod history {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::group::Partition;

    /// One chosen partition per run date, append-only.
    pub type HistoryRecord = BTreeMap<NaiveDate, Partition>;
}

pub mod pairs {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};

    use super::entity::Person;

    /// An unordered pair of two distinct people, normalized so that equality,
    /// hashing and ordering ignore argument order.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct PairKey(Person, Person);

    impl PairKey {
        pub fn new(a: &Person, b: &Person) -> PairKey {
            if a <= b {
                PairKey(a.clone(), b.clone())
            } else {
                PairKey(b.clone(), a.clone())
            }
        }
    }

    /// Pairwise co-occurrence counts; unseen pairs count as zero.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PairCountMap {
        counts: HashMap<PairKey, u32>,
    }

    impl PairCountMap {
        pub fn get_pair(&self, pair: [&Person; 2]) -> u32 {
            self.counts
                .get(&PairKey::new(pair[0], pair[1]))
                .copied()
                .unwrap_or(0)
        }

        pub fn bump(&mut self, a: &Person, b: &Person) {
            *self.counts.entry(PairKey::new(a, b)).or_insert(0) += 1;
        }

        pub fn len(&self) -> usize {
            self.counts.len()
        }

        pub fn is_empty(&self) -> bool {
            self.counts.is_empty()
        }
    }
}
