use tracing::debug;

use crate::error::ShuffleError;
use crate::model::group::SplitPlan;

/// Decides how many groups of 4 and of 3 to form for `num_people`.
///
/// All fours when divisible by 4, all threes when divisible by 3, otherwise
/// peel off fours until the remainder divides by 3. Rosters of fewer than 3
/// people, or of exactly 5, admit no valid split.
pub fn plan_splits(num_people: usize) -> Result<SplitPlan, ShuffleError> {
    if num_people < 3 {
        return Err(ShuffleError::InvalidRosterSize(num_people));
    }
    if num_people % 4 == 0 {
        return Ok(SplitPlan { fours: num_people / 4, threes: 0 });
    }
    if num_people % 3 == 0 {
        return Ok(SplitPlan { fours: 0, threes: num_people / 3 });
    }

    let mut remainder = num_people;
    let mut fours = 0;
    while remainder % 3 != 0 {
        if remainder < 4 {
            // only num_people == 5 lands here: 5 - 4 leaves a stranded 1
            return Err(ShuffleError::InvalidRosterSize(num_people));
        }
        remainder -= 4;
        fours += 1;
    }
    let plan = SplitPlan { fours, threes: remainder / 3 };
    debug!(num_people, fours = plan.fours, threes = plan.threes, "chose group splits");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::plan_splits;
    use crate::error::ShuffleError;
    use crate::model::group::SplitPlan;

    #[test]
    fn every_splittable_size_is_covered_exactly() {
        for n in (3..=60).filter(|n| *n != 5) {
            let plan = plan_splits(n).unwrap();
            assert_eq!(plan.covers(), n, "plan for {n} does not cover the roster");
        }
    }

    #[test]
    fn prefers_all_fours_then_all_threes() {
        assert_eq!(plan_splits(12).unwrap(), SplitPlan { fours: 3, threes: 0 });
        assert_eq!(plan_splits(9).unwrap(), SplitPlan { fours: 0, threes: 3 });
    }

    #[test]
    fn mixed_sizes_peel_off_fours_first() {
        assert_eq!(plan_splits(7).unwrap(), SplitPlan { fours: 1, threes: 1 });
        assert_eq!(plan_splits(11).unwrap(), SplitPlan { fours: 2, threes: 1 });
    }

    #[test]
    fn unsplittable_sizes_are_rejected() {
        for n in [0, 1, 2, 5] {
            assert_eq!(plan_splits(n), Err(ShuffleError::InvalidRosterSize(n)));
        }
    }
}
