//! Multiply-by-shifts puzzle.

use crate::bits::{decompose_shifts, SHIFT_MULTIPLIERS};
use crate::domain::{Question, QuestionKind};
use crate::error::QuizError;
use crate::random::{choice, RandomSource};
use crate::seeds::SHIFT_VARIABLES;

use super::sample_u32;

pub fn shift_multiply(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let m = *choice(rng, &SHIFT_MULTIPLIERS)?;
  let var = *choice(rng, &SHIFT_VARIABLES)?;
  let value = sample_u32(rng, 2, 10);
  let (i, j) = decompose_shifts(m)?;

  let hi = format!("{}<<{}", var, i);
  let lo = format!("{}<<{}", var, j);
  Ok(
    Question::new(
      QuestionKind::ShiftMultiply,
      format!(
        "Rewrite `{var} * {m}` using exactly two left shifts of `{var}` and one addition.",
        var = var,
        m = m
      ),
      format!(
        "int {var} = {value};\nint result = {var} * {m};  // rewrite with shifts",
        var = var,
        value = value,
        m = m
      ),
      format!("({}) + ({})", hi, lo),
      format!(
        "{m} = {a} + {b} = (1<<{i}) + (1<<{j}), so {var} * {m} = ({hi}) + ({lo}) = {x} + {y} = {total}",
        m = m,
        a = 1u32 << i,
        b = 1u32 << j,
        i = i,
        j = j,
        var = var,
        hi = hi,
        lo = lo,
        x = value << i,
        y = value << j,
        total = value * m,
      ),
    )
    .with_alternatives([format!("({}) + ({})", lo, hi)]),
  )
}
