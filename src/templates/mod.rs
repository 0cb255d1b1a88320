//! Question templates: one pure function per family.
//!
//! Every template has the same shape, `(rng, index) -> Question`, where
//! `index` is the 0-based position inside the category's loop for that
//! template. All sampled values flow from `rng`, so a replayed source
//! reproduces the same question byte for byte.

use crate::domain::{Question, QuestionKind};
use crate::error::QuizError;
use crate::layout::StructLayout;
use crate::random::RandomSource;
use crate::seeds::Scenario;

pub mod algorithms;
pub mod bit_tricks;
pub mod c_basics;
pub mod data_structures;
pub mod memory;
pub mod systems;

pub type TemplateFn = fn(&mut dyn RandomSource, usize) -> Result<Question, QuizError>;

pub(crate) fn sample_u32(rng: &mut dyn RandomSource, min: u32, max: u32) -> u32 {
  rng.uniform_int(min as i64, max as i64) as u32
}

pub(crate) fn from_scenario(kind: QuestionKind, text: &str, s: &Scenario) -> Question {
  Question::new(kind, text, s.code, s.answer, s.explanation)
    .with_alternatives(s.alternatives.iter().copied())
}

/// Member-by-member account of a layout, ending in the total.
pub(crate) fn describe_layout(layout: &StructLayout) -> String {
  let mut parts: Vec<String> = layout
    .slots
    .iter()
    .map(|s| {
      if s.padding > 0 {
        format!(
          "{} ({}, {} bytes) at offset {} after {} padding byte(s)",
          s.name, s.ty, s.size, s.offset, s.padding
        )
      } else {
        format!("{} ({}, {} bytes) at offset {}", s.name, s.ty, s.size, s.offset)
      }
    })
    .collect();
  parts.push(format!(
    "members end at byte {}, plus {} byte(s) of tail padding to a multiple of 8 gives {}",
    layout.end, layout.tail_padding, layout.size
  ));
  format!(
    "Each member is aligned to its own size and the struct is padded to a multiple of 8: {}",
    parts.join("; ")
  )
}
