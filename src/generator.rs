//! Quiz generation: a fixed category -> templates registry, the per-template
//! loops, and the final Fisher–Yates shuffle.

use tracing::{debug, info, instrument};

use crate::domain::{Category, Question, QuestionKind, Quiz};
use crate::error::QuizError;
use crate::random::{shuffle, RandomSource};
use crate::templates::{algorithms, bit_tricks, c_basics, data_structures, memory, systems, TemplateFn};

/// One template wired into a category, run `count` times.
#[derive(Clone, Copy)]
pub struct TemplateSlot {
  pub kind: QuestionKind,
  pub count: usize,
  pub generate: TemplateFn,
}

const fn slot(kind: QuestionKind, count: usize, generate: TemplateFn) -> TemplateSlot {
  TemplateSlot { kind, count, generate }
}

const C_BASICS: [TemplateSlot; 3] = [
  slot(QuestionKind::StructSize, 10, c_basics::struct_size),
  slot(QuestionKind::PointerArithmetic, 10, c_basics::pointer_arithmetic),
  slot(QuestionKind::BitwiseOp, 10, c_basics::bitwise_op),
];

const DATA_STRUCTURES: [TemplateSlot; 3] = [
  slot(QuestionKind::TreeHeight, 10, data_structures::tree_height),
  slot(QuestionKind::GraphEdges, 10, data_structures::graph_edges),
  slot(QuestionKind::LoadFactor, 10, data_structures::hash_load_factor),
];

const ALGORITHMS: [TemplateSlot; 2] = [
  slot(QuestionKind::TimeComplexity, 10, algorithms::time_complexity),
  slot(QuestionKind::SpaceComplexity, 10, algorithms::space_complexity),
];

const MEMORY: [TemplateSlot; 3] = [
  slot(QuestionKind::MemoryBug, 10, memory::memory_bug),
  slot(QuestionKind::AlignedSize, 10, memory::aligned_struct),
  slot(QuestionKind::StructPadding, 10, memory::struct_padding),
];

const VALGRIND_GETOPT: [TemplateSlot; 3] = [
  slot(QuestionKind::Getopt, 4, systems::getopt),
  slot(QuestionKind::StatField, 4, systems::stat_field),
  slot(QuestionKind::ValgrindError, 4, systems::valgrind_error),
];

const BIT_TRICKS: [TemplateSlot; 2] = [
  slot(QuestionKind::BitwiseOp, 10, c_basics::bitwise_op),
  slot(QuestionKind::ShiftMultiply, 10, bit_tricks::shift_multiply),
];

/// Ordered templates for a category.
pub fn templates(category: Category) -> &'static [TemplateSlot] {
  match category {
    Category::CBasics => &C_BASICS,
    Category::DataStructures => &DATA_STRUCTURES,
    Category::Algorithms => &ALGORITHMS,
    Category::Memory => &MEMORY,
    Category::ValgrindGetopt => &VALGRIND_GETOPT,
    Category::BitTricks => &BIT_TRICKS,
  }
}

/// Number of questions a quiz of this category holds.
pub fn quiz_length(category: Category) -> usize {
  templates(category).iter().map(|s| s.count).sum()
}

/// Run every template of `category` in registry order, unshuffled.
pub fn generate_unshuffled(rng: &mut dyn RandomSource, category: Category) -> Result<Vec<Question>, QuizError> {
  let mut questions = Vec::with_capacity(quiz_length(category));
  for slot in templates(category) {
    for index in 0..slot.count {
      questions.push((slot.generate)(rng, index)?);
    }
    debug!(target: "quiz", %category, kind = ?slot.kind, count = slot.count, "template done");
  }
  Ok(questions)
}

/// Generate a complete, shuffled quiz. Either every question is built or an
/// error is returned; no partial quiz escapes.
pub fn generate(rng: &mut dyn RandomSource, category: Category) -> Result<Quiz, QuizError> {
  let mut questions = generate_unshuffled(rng, category)?;
  shuffle(rng, &mut questions);
  Ok(Quiz { category, questions })
}

/// Owns the random source so callers only deal in category keys.
#[derive(Debug, Clone)]
pub struct QuizGenerator<R: RandomSource> {
  rng: R,
}

impl<R: RandomSource> QuizGenerator<R> {
  pub fn new(rng: R) -> Self {
    Self { rng }
  }

  /// Resolve `key` against the registry and generate.
  #[instrument(level = "info", skip(self), fields(%key))]
  pub fn generate_quiz(&mut self, key: &str) -> Result<Quiz, QuizError> {
    let category: Category = key.parse()?;
    self.generate(category)
  }

  #[instrument(level = "debug", skip(self), fields(%category))]
  pub fn generate(&mut self, category: Category) -> Result<Quiz, QuizError> {
    let quiz = generate(&mut self.rng, category)?;
    info!(target: "quiz", %category, questions = quiz.len(), "quiz generated");
    Ok(quiz)
  }
}
