use std::collections::{HashMap, HashSet};

use rand::prelude::SliceRandom;
use rand::Rng;

use crate::error::ShuffleError;
use crate::model::entity::Person;
use crate::model::group::{Group, Partition, SplitPlan};

/// Draws `n` random partitions of the roster and counts how often each
/// distinct one comes up.
///
/// Each draw shuffles the roster uniformly, chunks the first `4 * fours`
/// entries into groups of 4 and the rest into groups of 3, then normalizes the
/// result into its canonical set form, so permutations that describe the same
/// partition collapse into one frequency-map entry.
pub fn sample_partitions<R: Rng + ?Sized>(
    roster: &[Person],
    plan: &SplitPlan,
    n: usize,
    rng: &mut R,
) -> Result<HashMap<Partition, usize>, ShuffleError> {
    check_distinct(roster)?;
    debug_assert_eq!(plan.covers(), roster.len());

    let mut frequencies: HashMap<Partition, usize> = HashMap::new();
    let mut order: Vec<Person> = roster.to_vec();
    for _ in 0..n {
        order.shuffle(rng);
        let (four_block, three_block) = order.split_at(plan.fours * 4);
        let partition: Partition = four_block
            .chunks(4)
            .chain(three_block.chunks(3))
            .map(|chunk| chunk.iter().cloned().collect::<Group>())
            .collect();
        *frequencies.entry(partition).or_insert(0) += 1;
    }
    Ok(frequencies)
}

fn check_distinct(roster: &[Person]) -> Result<(), ShuffleError> {
    let mut seen = HashSet::with_capacity(roster.len());
    for person in roster {
        if !seen.insert(person) {
            return Err(ShuffleError::DuplicatePerson(person.clone()));
        }
    }
    Ok(())
}
