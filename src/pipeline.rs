use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::info;

use crate::error::ShuffleError;
use crate::history::pair_counts;
use crate::model::entity::{Person, Teams};
use crate::model::group::{Candidate, Partition};
use crate::model::history::HistoryRecord;
use crate::plan::plan_splits;
use crate::sample::sample_partitions;
use crate::score::partition_score;
use crate::select::choose_best;

// Samples handled by one worker. The chunk index salts the worker's RNG seed,
// so the outcome does not depend on how rayon schedules the chunks.
const SAMPLES_PER_TASK: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleConfig {
    pub sample_count: usize,
    pub seed: u64,
}

impl ShuffleConfig {
    /// Fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> ShuffleConfig {
        ShuffleConfig { sample_count: 1000, seed }
    }
}

impl Default for ShuffleConfig {
    fn default() -> ShuffleConfig {
        ShuffleConfig {
            sample_count: 1000,
            seed: rand::random(),
        }
    }
}

/// Runs the whole pipeline: aggregate pair history, plan the 4/3 split, sample
/// and score random partitions in parallel, then keep the best one found.
///
/// The search budget is fixed; the returned candidate is the best of the
/// sampled partitions, not a proven optimum.
pub fn choose_groups(
    roster: &[Person],
    history: &HistoryRecord,
    teams: &Teams,
    config: &ShuffleConfig,
) -> Result<Candidate, ShuffleError> {
    let counts = pair_counts(history, teams)?;
    let plan = plan_splits(roster.len())?;

    let tasks = (config.sample_count + SAMPLES_PER_TASK - 1) / SAMPLES_PER_TASK;
    let scored: HashMap<Partition, u32> = (0..tasks)
        .into_par_iter()
        .map(|task| {
            let budget = SAMPLES_PER_TASK.min(config.sample_count - task * SAMPLES_PER_TASK);
            let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(task as u64));
            let frequencies = sample_partitions(roster, &plan, budget, &mut rng)?;
            Ok(frequencies
                .into_keys()
                .map(|partition| {
                    let score = partition_score(&partition, &counts);
                    (partition, score)
                })
                .collect::<HashMap<_, _>>())
        })
        .try_reduce(HashMap::new, |mut merged, local| {
            merged.extend(local);
            Ok(merged)
        })?;

    let best = choose_best(&scored)?;
    info!(
        samples = config.sample_count,
        distinct = scored.len(),
        score = best.score,
        "chose peer groups"
    );
    Ok(best)
}
