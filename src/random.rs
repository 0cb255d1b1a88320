//! Injectable randomness.
//!
//! Templates and the shuffler only ever see `&mut dyn RandomSource`, so a quiz
//! can be replayed from a seed (or a scripted sequence in tests). Nothing else
//! in the crate touches `rand` directly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::QuizError;

pub trait RandomSource: Send {
  /// Uniform integer in `[min, max]` (inclusive). `max < min` collapses to `min`.
  fn uniform_int(&mut self, min: i64, max: i64) -> i64;
}

/// `StdRng` backed source. Seeded when a seed is configured, entropy otherwise.
#[derive(Debug, Clone)]
pub struct SeededRandom {
  rng: StdRng,
  seed: Option<u64>,
}

impl SeededRandom {
  pub fn new(seed: Option<u64>) -> Self {
    let rng = match seed {
      Some(s) => StdRng::seed_from_u64(s),
      None => StdRng::from_entropy(),
    };
    Self { rng, seed }
  }

  pub fn from_seed(seed: u64) -> Self {
    Self::new(Some(seed))
  }

  pub fn seed(&self) -> Option<u64> {
    self.seed
  }
}

impl RandomSource for SeededRandom {
  fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
    if max <= min {
      return min;
    }
    self.rng.gen_range(min..=max)
  }
}

/// Pick one element uniformly.
pub fn choice<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Result<&'a T, QuizError> {
  if items.is_empty() {
    return Err(QuizError::EmptyInput);
  }
  let idx = rng.uniform_int(0, items.len() as i64 - 1) as usize;
  items.get(idx).ok_or(QuizError::EmptyInput)
}

/// In-place Fisher–Yates: walks from the back, swapping each slot with a
/// uniformly drawn slot at or before it. Draw order is fixed, so a replayed
/// source yields the same permutation.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
  for i in (1..items.len()).rev() {
    let j = rng.uniform_int(0, i as i64) as usize;
    items.swap(i, j);
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  /// Replays a fixed list of draws (cycling), clamped into the requested range.
  pub(crate) struct ScriptedRandom {
    draws: Vec<i64>,
    pos: usize,
  }

  impl ScriptedRandom {
    pub(crate) fn new(draws: Vec<i64>) -> Self {
      Self { draws, pos: 0 }
    }
  }

  impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
      let v = if self.draws.is_empty() { min } else { self.draws[self.pos % self.draws.len()] };
      self.pos += 1;
      v.clamp(min, max.max(min))
    }
  }

  #[test]
  fn uniform_int_stays_in_range() {
    let mut rng = SeededRandom::from_seed(7);
    for _ in 0..1000 {
      let v = rng.uniform_int(3, 9);
      assert!((3..=9).contains(&v));
    }
    assert_eq!(rng.uniform_int(5, 5), 5);
    assert_eq!(rng.uniform_int(5, 2), 5);
  }

  #[test]
  fn choice_rejects_empty_sequence() {
    let mut rng = SeededRandom::from_seed(1);
    let empty: [u8; 0] = [];
    assert_eq!(choice(&mut rng, &empty), Err(QuizError::EmptyInput));
  }

  #[test]
  fn choice_follows_the_draw() {
    let mut rng = ScriptedRandom::new(vec![2, 0]);
    let items = ["a", "b", "c"];
    assert_eq!(choice(&mut rng, &items), Ok(&"c"));
    assert_eq!(choice(&mut rng, &items), Ok(&"a"));
  }

  #[test]
  fn shuffle_is_a_permutation() {
    let mut rng = SeededRandom::from_seed(99);
    let mut items: Vec<u32> = (0..50).collect();
    shuffle(&mut rng, &mut items);
    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
  }

  #[test]
  fn shuffle_with_zero_draws_rotates_first_to_back() {
    // j = 0 at every step: swap(4,0), swap(3,0), swap(2,0), swap(1,0)
    let mut rng = ScriptedRandom::new(vec![0]);
    let mut items = vec![1, 2, 3, 4, 5];
    shuffle(&mut rng, &mut items);
    assert_eq!(items, vec![2, 3, 4, 5, 1]);
  }

  #[test]
  fn same_seed_same_sequence() {
    let mut a = SeededRandom::from_seed(42);
    let mut b = SeededRandom::from_seed(42);
    let xs: Vec<i64> = (0..20).map(|_| a.uniform_int(0, 1000)).collect();
    let ys: Vec<i64> = (0..20).map(|_| b.uniform_int(0, 1000)).collect();
    assert_eq!(xs, ys);
  }
}
