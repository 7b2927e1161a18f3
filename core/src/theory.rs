use crate::{to_percentages, RollCounts, RollPercentages, DIE_SIDES};

/// Number of ordered face pairs that produce each sum
pub fn expected_counts() -> RollCounts {
    let mut counts = RollCounts::new();
    // iterate over every combination
    for a in 1..=DIE_SIDES {
        for b in 1..=DIE_SIDES {
            counts.increment(a + b);
        }
    }
    counts
}

/// Exact probability of each sum, in percent
pub fn expected_percentages() -> RollPercentages {
    let counts = expected_counts();
    let total = counts.total();
    to_percentages(&counts, total).expect("number of face pairs should not be zero")
}
