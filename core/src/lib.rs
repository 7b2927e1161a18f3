mod rng;
mod sampler;
mod theory;

pub use rng::{Rng, Seed};
pub use sampler::{roll_sum, simulate, to_percentages};
pub use theory::{expected_counts, expected_percentages};

/*****************************************************************************************
 * Error Types
 */

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested number of rolls was not positive
    InvalidArgument { num_rolls: u64 },
    /// Tried to normalize counts against a total of zero
    DivisionByZero,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument { num_rolls } => {
                write!(f, "Number of rolls must be positive, got {num_rolls}")
            }
            Error::DivisionByZero => {
                write!(f, "Cannot compute percentages with a total of zero rolls")
            }
        }
    }
}

impl std::error::Error for Error {}

/*****************************************************************************************
 * Common Types / Constants
 */

pub const DIE_SIDES: u8 = 6;
pub const MIN_SUM: u8 = 2;
pub const MAX_SUM: u8 = DIE_SIDES * 2;
pub const NUM_BUCKETS: usize = (MAX_SUM - MIN_SUM + 1) as usize;

pub const DEFAULT_NUM_ROLLS: u64 = 10_000;

fn bucket_index(sum: u8) -> Option<usize> {
    if (MIN_SUM..=MAX_SUM).contains(&sum) {
        Some((sum - MIN_SUM) as usize)
    } else {
        None
    }
}

fn bucket_sums() -> impl Iterator<Item = u8> {
    MIN_SUM..=MAX_SUM
}

/// Number of times each sum (2 to 12) came up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollCounts([u64; NUM_BUCKETS]);

impl RollCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from externally supplied counts, index 0 is the count for a sum of 2
    pub fn from_array(counts: [u64; NUM_BUCKETS]) -> Self {
        Self(counts)
    }

    pub fn get(&self, sum: u8) -> Option<u64> {
        bucket_index(sum).map(|idx| self.0[idx])
    }

    /// Every bucket in ascending order of sum, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        bucket_sums().zip(self.0.iter().copied())
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    // sums outside the domain can't come from two dice, so this panics on them
    pub(crate) fn increment(&mut self, sum: u8) {
        let idx = bucket_index(sum).expect("roll sum should be in range");
        self.0[idx] += 1;
    }
}

/// Share of rolls, in percent, that landed on each sum (2 to 12)
#[derive(Debug, Clone, PartialEq)]
pub struct RollPercentages([f64; NUM_BUCKETS]);

impl RollPercentages {
    pub(crate) fn from_array(percentages: [f64; NUM_BUCKETS]) -> Self {
        Self(percentages)
    }

    pub fn get(&self, sum: u8) -> Option<f64> {
        bucket_index(sum).map(|idx| self.0[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        bucket_sums().zip(self.0.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// The sum with the highest percentage, the lowest sum wins ties
    pub fn mode(&self) -> u8 {
        let mut best = (MIN_SUM, self.0[0]);
        for (sum, pct) in self.iter().skip(1) {
            if pct > best.1 {
                best = (sum, pct);
            }
        }
        best.0
    }
}
