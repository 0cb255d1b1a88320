//! C basics: `sizeof(struct)`, pointer arithmetic, bitwise operators.

use crate::bits::{binary4, BitOp};
use crate::domain::{Question, QuestionKind, StructMember};
use crate::error::QuizError;
use crate::layout::{compute_layout, render_struct, PRIMITIVE_TYPES};
use crate::random::{choice, RandomSource};
use crate::seeds::{ARRAY_NAMES, MEMBER_NAMES, POINTER_NAMES};

use super::{describe_layout, sample_u32};

pub fn struct_size(rng: &mut dyn RandomSource, index: usize) -> Result<Question, QuizError> {
  let count = sample_u32(rng, 3, 6) as usize;
  let mut members = Vec::with_capacity(count);
  for name in MEMBER_NAMES.iter().take(count) {
    let ty = choice(rng, &PRIMITIVE_TYPES)?;
    members.push(StructMember::new(*ty, *name));
  }

  let struct_name = format!("s{}", index + 1);
  let layout = compute_layout(&members)?;
  Ok(Question::new(
    QuestionKind::StructSize,
    format!("Evaluate the expression `sizeof(struct {})`", struct_name),
    render_struct(&struct_name, &members),
    layout.size.to_string(),
    describe_layout(&layout),
  ))
}

pub fn pointer_arithmetic(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let len = sample_u32(rng, 5, 10);
  let offset = sample_u32(rng, 1, len - 1);
  let array_var = choice(rng, &ARRAY_NAMES)?;
  let ptr_var = choice(rng, &POINTER_NAMES)?;

  // Filled with 1..=len, so element `offset` holds `offset + 1`.
  let values: Vec<String> = (1..=len).map(|v| v.to_string()).collect();
  let value = offset + 1;

  Ok(Question::new(
    QuestionKind::PointerArithmetic,
    "What is the output of the following code?",
    format!(
      "int {arr}[] = {{{vals}}};\nint *{ptr} = {arr};\nprintf(\"%d\", *({ptr} + {off}));",
      arr = array_var,
      vals = values.join(", "),
      ptr = ptr_var,
      off = offset,
    ),
    value.to_string(),
    format!(
      "{ptr} + {off} moves the pointer {off} elements forward, and * dereferences it to get the value {value}",
      ptr = ptr_var,
      off = offset,
      value = value,
    ),
  ))
}

pub fn bitwise_op(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let x = sample_u32(rng, 1, 15);
  let y = sample_u32(rng, 1, 15);
  let op = *choice(rng, &BitOp::ALL)?;
  let result = op.apply(x, y);

  Ok(Question::new(
    QuestionKind::BitwiseOp,
    "What is the result of the following bitwise operation?",
    format!(
      "int x = {x};  // {xb} in binary\nint y = {y};  // {yb} in binary\nint result = x {op} y;",
      x = x,
      xb = binary4(x),
      y = y,
      yb = binary4(y),
      op = op.symbol(),
    ),
    result.to_string(),
    format!(
      "Bitwise {} of {} and {} is {}, which is {} in decimal",
      op.symbol(),
      binary4(x),
      binary4(y),
      binary4(result),
      result
    ),
  ))
}
