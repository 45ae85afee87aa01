//! Randomized peer-group rotation.
//!
//! Splits a roster into groups of 3 or 4, preferring partitions that repeat as
//! few past pairings as possible. The search is a fixed budget of random
//! samples, not an exhaustive optimization; persistence, notification, and
//! rendering of the chosen groups belong to the caller.

pub mod error;
pub mod history;
pub mod model;
pub mod pipeline;
pub mod plan;
pub mod sample;
pub mod score;
pub mod select;

pub use error::ShuffleError;
pub use history::{pair_counts, record_run};
pub use model::entity::{Person, Team, TeamName, Teams};
pub use model::group::{Candidate, Group, Partition, SplitPlan};
pub use model::history::HistoryRecord;
pub use model::pairs::{PairCountMap, PairKey};
pub use pipeline::{choose_groups, ShuffleConfig};
pub use plan::plan_splits;
pub use sample::sample_partitions;
pub use score::partition_score;
pub use select::choose_best;
