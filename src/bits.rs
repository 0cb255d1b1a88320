//! Bit-level helpers for the bitwise templates: operator evaluation, 4-bit
//! binary rendering, and the "multiply via two shifts" decomposition.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Highest shift amount the decomposer will try.
const MAX_SHIFT: u32 = 31;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitOp {
  And,
  Or,
  Xor,
}

impl BitOp {
  pub const ALL: [BitOp; 3] = [BitOp::And, BitOp::Or, BitOp::Xor];

  pub fn symbol(self) -> &'static str {
    match self {
      BitOp::And => "&",
      BitOp::Or => "|",
      BitOp::Xor => "^",
    }
  }

  pub fn apply(self, x: u32, y: u32) -> u32 {
    match self {
      BitOp::And => x & y,
      BitOp::Or => x | y,
      BitOp::Xor => x ^ y,
    }
  }
}

/// Zero-padded to at least four binary digits.
pub fn binary4(v: u32) -> String {
  format!("{:04b}", v)
}

/// Find `(i, j)` with `i > j` and `(1 << i) + (1 << j) == m`.
///
/// Searches `i` from high to low, then `j` from `i - 1` down, returning the
/// first hit. Fails instead of guessing when no pair exists (powers of two,
/// values with three or more set bits).
pub fn decompose_shifts(m: u32) -> Result<(u32, u32), QuizError> {
  for i in (1..=MAX_SHIFT).rev() {
    let hi = 1u64 << i;
    if hi >= m as u64 {
      continue;
    }
    for j in (0..i).rev() {
      if hi + (1u64 << j) == m as u64 {
        return Ok((i, j));
      }
    }
  }
  Err(QuizError::NoDecomposition(m))
}

/// Multipliers the shift puzzle samples: 3..=20, minus powers of two and
/// values with three or more set bits.
pub const SHIFT_MULTIPLIERS: [u32; 9] = [3, 5, 6, 9, 10, 12, 17, 18, 20];

/// Multipliers in `[lo, hi]` that are not powers of two and do decompose.
pub fn shift_multipliers(lo: u32, hi: u32) -> Vec<u32> {
  (lo..=hi)
    .filter(|m| !m.is_power_of_two())
    .filter(|m| decompose_shifts(*m).is_ok())
    .collect()
}
