use chrono::NaiveDate;
use thiserror::Error;

use crate::model::entity::Person;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShuffleError {
    #[error("cannot split {0} people into groups of 3 and 4")]
    InvalidRosterSize(usize),
    #[error("roster lists {0} more than once")]
    DuplicatePerson(Person),
    #[error("history entry {date}: {problem}")]
    DataIntegrity { date: NaiveDate, problem: String },
    #[error("no sampled candidates to choose from")]
    EmptyCandidateSet,
}
