use std::collections::BTreeSet;

use chrono::NaiveDate;
use itertools::Itertools;
use tracing::debug;

use crate::error::ShuffleError;
use crate::model::entity::Teams;
use crate::model::group::Partition;
use crate::model::history::HistoryRecord;
use crate::model::pairs::PairCountMap;

/// Counts how often each pair of people has already been grouped together.
///
/// Every group in every history entry contributes one count per member pair.
/// Each team contributes one count per member pair exactly once, so teammates
/// look "already met" before any history accumulates.
pub fn pair_counts(history: &HistoryRecord, teams: &Teams) -> Result<PairCountMap, ShuffleError> {
    let mut counts = PairCountMap::default();
    for (date, partition) in history {
        validate_entry(*date, partition)?;
        for group in partition {
            for pair in group.iter().combinations(2) {
                counts.bump(pair[0], pair[1]);
            }
        }
    }
    for team in teams.values() {
        for pair in team.iter().combinations(2) {
            counts.bump(pair[0], pair[1]);
        }
    }
    debug!(
        entries = history.len(),
        teams = teams.len(),
        pairs = counts.len(),
        "aggregated pair history"
    );
    Ok(counts)
}

/// Extends the history with the partition chosen on `date`. The caller hands
/// the updated record back to whatever stores it.
pub fn record_run(history: &mut HistoryRecord, date: NaiveDate, partition: Partition) {
    history.insert(date, partition);
}

fn validate_entry(date: NaiveDate, partition: &Partition) -> Result<(), ShuffleError> {
    let mut seen = BTreeSet::new();
    for group in partition {
        if group.len() < 3 || group.len() > 4 {
            return Err(ShuffleError::DataIntegrity {
                date,
                problem: format!("group of {} people, groups must have 3 or 4", group.len()),
            });
        }
        for person in group {
            if !seen.insert(person) {
                return Err(ShuffleError::DataIntegrity {
                    date,
                    problem: format!("{person} appears in more than one group"),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{pair_counts, record_run};
    use crate::error::ShuffleError;
    use crate::model::entity::{Person, Teams};
    use crate::model::group::{Group, Partition};
    use crate::model::history::HistoryRecord;

    fn group(members: &[&str]) -> Group {
        members.iter().map(|m| m.to_string()).collect()
    }

    fn partition(groups: &[&[&str]]) -> Partition {
        groups.iter().map(|g| group(g)).collect()
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    #[test]
    fn history_increments_every_member_pair() {
        let mut history = HistoryRecord::new();
        history.insert(day(1), partition(&[&["ada", "bea", "cam"]]));
        history.insert(day(2), partition(&[&["ada", "bea", "dee"]]));

        let counts = pair_counts(&history, &Teams::new()).unwrap();
        let (a, b, c): (Person, Person, Person) = ("ada".into(), "bea".into(), "cam".into());
        assert_eq!(counts.get_pair([&a, &b]), 2);
        assert_eq!(counts.get_pair([&a, &c]), 1);
        assert_eq!(counts.get_pair([&b, &c]), 1);
    }

    #[test]
    fn team_bias_counts_once_regardless_of_history_size() {
        let mut history = HistoryRecord::new();
        history.insert(day(1), partition(&[&["dee", "eli", "fay"]]));
        history.insert(day(2), partition(&[&["dee", "eli", "gus"]]));

        let mut teams = Teams::new();
        teams.insert("platform".into(), group(&["ada", "bea", "cam"]));

        let counts = pair_counts(&history, &teams).unwrap();
        assert_eq!(counts.get_pair([&"ada".into(), &"bea".into()]), 1);
        assert_eq!(counts.get_pair([&"dee".into(), &"eli".into()]), 2);
    }

    #[test]
    fn rejects_history_group_of_invalid_size() {
        let mut history = HistoryRecord::new();
        history.insert(day(1), partition(&[&["ada", "bea", "cam", "dee", "eli"]]));

        let err = pair_counts(&history, &Teams::new()).unwrap_err();
        assert!(matches!(err, ShuffleError::DataIntegrity { .. }));
    }

    #[test]
    fn rejects_person_in_two_groups_of_one_entry() {
        let mut history = HistoryRecord::new();
        history.insert(
            day(1),
            partition(&[&["ada", "bea", "cam"], &["ada", "dee", "eli"]]),
        );

        let err = pair_counts(&history, &Teams::new()).unwrap_err();
        assert!(matches!(err, ShuffleError::DataIntegrity { .. }));
    }

    #[test]
    fn record_run_appends_todays_partition() {
        let mut history = HistoryRecord::new();
        let chosen = partition(&[&["ada", "bea", "cam"]]);
        record_run(&mut history, day(3), chosen.clone());
        assert_eq!(history.get(&day(3)), Some(&chosen));
        assert_eq!(history.len(), 1);
    }
}
