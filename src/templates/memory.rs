//! Memory questions: classic allocation bugs, explicit alignment, and struct
//! padding walkthroughs.

use crate::domain::{Question, QuestionKind, StructMember};
use crate::error::QuizError;
use crate::layout::{aligned_size, compute_layout, render_struct};
use crate::random::{choice, RandomSource};
use crate::seeds::{MEMBER_NAMES, MEMORY_BUGS, PADDING_LAYOUTS};

use super::{describe_layout, from_scenario, sample_u32};

pub fn memory_bug(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let scenario = choice(rng, &MEMORY_BUGS)?;
  Ok(from_scenario(
    QuestionKind::MemoryBug,
    "What memory issue is present in this code?",
    scenario,
  ))
}

pub fn aligned_struct(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let size = sample_u32(rng, 1, 16) as usize;
  let alignment = 1usize << sample_u32(rng, 0, 3);
  let aligned = aligned_size(size, alignment);
  Ok(Question::new(
    QuestionKind::AlignedSize,
    format!(
      "What is the aligned size of a {}-byte structure with {}-byte alignment?",
      size, alignment
    ),
    format!(
      "struct aligned_struct {{\n    char data[{}];\n}} __attribute__((aligned({})));",
      size, alignment
    ),
    aligned.to_string(),
    format!(
      "The structure is padded to the next multiple of {} bytes: {} rounds up to {}",
      alignment, size, aligned
    ),
  ))
}

pub fn struct_padding(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let types = *choice(rng, &PADDING_LAYOUTS)?;
  let members: Vec<StructMember> = types
    .iter()
    .zip(MEMBER_NAMES.iter())
    .map(|(ty, name)| StructMember::new(*ty, *name))
    .collect();
  let layout = compute_layout(&members)?;
  Ok(Question::new(
    QuestionKind::StructPadding,
    "Assuming each member is aligned to its own size and the struct is padded to a multiple of 8, what is sizeof(struct padded)?",
    render_struct("padded", &members),
    layout.size.to_string(),
    describe_layout(&layout),
  ))
}
