use crate::DIE_SIDES;
use rand::{distributions::uniform::SampleRange, thread_rng, Rng as _, SeedableRng as _};
use std::collections::VecDeque;

pub type Seed = u64;

/// Source of die faces for the sampler
///
/// Either a seeded PCG generator that remembers its initial seed, or a scripted stream of
/// numbers so callers can force exact outcomes.
#[derive(Debug, Clone)]
pub enum Rng {
    Internal {
        initial_seed: Seed,
        rng: rand_pcg::Pcg32,
    },
    External {
        random_numbers: VecDeque<u8>,
    },
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    /// Seeded from the environment, differs between runs
    pub fn new() -> Self {
        Self::with_seed(thread_rng().gen())
    }

    pub fn with_seed(initial_seed: Seed) -> Self {
        Self::Internal {
            initial_seed,
            rng: rand_pcg::Pcg32::seed_from_u64(initial_seed),
        }
    }

    /// Each draw consumes one number, scaled into the requested range
    ///
    /// panics if more numbers are drawn than were given
    pub fn new_external(random_numbers: impl IntoIterator<Item = u8>) -> Self {
        Self::External {
            random_numbers: random_numbers.into_iter().collect(),
        }
    }

    pub fn initial_seed(&self) -> Option<Seed> {
        match self {
            Self::Internal { initial_seed, .. } => Some(*initial_seed),
            Self::External { .. } => None,
        }
    }

    // generate methods

    pub fn u8(&mut self, range: impl std::ops::RangeBounds<u8> + SampleRange<u8>) -> u8 {
        match self {
            Self::Internal { rng, .. } => rng.gen_range(range),
            Self::External { random_numbers } => {
                // multiply-shift reduction of num into 0..span
                // src: https://lemire.me/blog/2016/06/27/a-fast-alternative-to-the-modulo-reduction
                fn bound(num: u8, span: u16) -> u8 {
                    ((num as u16 * span) >> 8) as u8
                }

                use std::ops::Bound::*;

                let min = match range.start_bound() {
                    Included(x) => *x,
                    Excluded(x) => *x + 1,
                    Unbounded => u8::MIN,
                };
                let max = match range.end_bound() {
                    Included(x) => *x,
                    Excluded(x) => *x - 1,
                    Unbounded => u8::MAX,
                };
                debug_assert!(min <= max);

                let random_number = random_numbers
                    .pop_front()
                    .expect("Ran out of external random numbers");

                let span = (max - min) as u16 + 1;
                min + bound(random_number, span)
            }
        }
    }

    /// A single face of a six-sided die
    pub fn roll_die(&mut self) -> u8 {
        self.u8(1..=DIE_SIDES)
    }
}
