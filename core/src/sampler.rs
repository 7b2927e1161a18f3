use crate::{Error, Result, Rng, RollCounts, RollPercentages, NUM_BUCKETS};

/// Roll two dice and return their sum
pub fn roll_sum(rng: &mut Rng) -> u8 {
    rng.roll_die() + rng.roll_die()
}

/// Roll a pair of dice `num_rolls` times and count how often each sum came up
pub fn simulate(num_rolls: u64, rng: &mut Rng) -> Result<RollCounts> {
    if num_rolls == 0 {
        return Err(Error::InvalidArgument { num_rolls });
    }

    match rng.initial_seed() {
        Some(seed) => log::debug!("simulating {num_rolls} rolls with seed {seed}"),
        None => log::debug!("simulating {num_rolls} rolls with an external source"),
    }

    let mut counts = RollCounts::new();
    for _ in 0..num_rolls {
        let sum = roll_sum(rng);
        log::trace!("rolled {sum}");
        counts.increment(sum);
    }

    debug_assert_eq!(counts.total(), num_rolls);
    Ok(counts)
}

/// Scale each count to its share of `total`, in percent
///
/// `total` is taken separately from the counts so externally built counts can be normalized
/// against any number of rolls.
pub fn to_percentages(counts: &RollCounts, total: u64) -> Result<RollPercentages> {
    if total == 0 {
        return Err(Error::DivisionByZero);
    }

    let mut percentages = [0.0; NUM_BUCKETS];
    for (pct, (_, count)) in percentages.iter_mut().zip(counts.iter()) {
        *pct = count as f64 / total as f64 * 100.0;
    }
    Ok(RollPercentages::from_array(percentages))
}
