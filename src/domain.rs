//! Domain models: questions, their template families, quiz categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Which template family produced a question. Bookkeeping only; grading
/// never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
  StructSize,
  PointerArithmetic,
  BitwiseOp,
  ShiftMultiply,
  TreeHeight,
  GraphEdges,
  LoadFactor,
  TimeComplexity,
  SpaceComplexity,
  MemoryBug,
  AlignedSize,
  StructPadding,
  Getopt,
  StatField,
  ValgrindError,
}

/// One quiz item. Immutable once a template has built it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
  pub kind: QuestionKind,
  pub text: String,
  #[serde(default)] pub code: String,
  pub answer: String,
  #[serde(default)] pub alternative_answers: Vec<String>,
  pub explanation: String,
}

impl Question {
  pub fn new(
    kind: QuestionKind,
    text: impl Into<String>,
    code: impl Into<String>,
    answer: impl Into<String>,
    explanation: impl Into<String>,
  ) -> Self {
    Self {
      kind,
      text: text.into(),
      code: code.into(),
      answer: answer.into(),
      alternative_answers: Vec::new(),
      explanation: explanation.into(),
    }
  }

  pub fn with_alternatives<I, S>(mut self, alts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.alternative_answers.extend(alts.into_iter().map(Into::into));
    self
  }
}

/// Closed set of quiz categories exposed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  CBasics,
  DataStructures,
  Algorithms,
  Memory,
  ValgrindGetopt,
  BitTricks,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::CBasics,
    Category::DataStructures,
    Category::Algorithms,
    Category::Memory,
    Category::ValgrindGetopt,
    Category::BitTricks,
  ];

  pub fn key(self) -> &'static str {
    match self {
      Category::CBasics => "c-basics",
      Category::DataStructures => "data-structures",
      Category::Algorithms => "algorithms",
      Category::Memory => "memory",
      Category::ValgrindGetopt => "valgrind-getopt",
      Category::BitTricks => "bit-tricks",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

impl FromStr for Category {
  type Err = QuizError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL
      .into_iter()
      .find(|c| c.key() == s)
      .ok_or_else(|| QuizError::UnknownCategory(s.to_string()))
  }
}

/// A generated quiz: shuffled once at creation, never reordered afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quiz {
  pub category: Category,
  pub questions: Vec<Question>,
}

impl Quiz {
  pub fn len(&self) -> usize {
    self.questions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.questions.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Question> {
    self.questions.get(index)
  }
}

/// `(type, name)` pair fed to the layout calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructMember {
  pub ty: String,
  pub name: String,
}

impl StructMember {
  pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
    Self { ty: ty.into(), name: name.into() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_keys_round_trip() {
    for c in Category::ALL {
      assert_eq!(c.key().parse::<Category>(), Ok(c));
    }
  }

  #[test]
  fn unknown_category_key() {
    assert_eq!(
      "pointers".parse::<Category>(),
      Err(QuizError::UnknownCategory("pointers".into()))
    );
    assert!("C-Basics".parse::<Category>().is_err());
  }

  #[test]
  fn serde_uses_kebab_keys() {
    let json = serde_json::to_string(&Category::ValgrindGetopt).unwrap();
    assert_eq!(json, "\"valgrind-getopt\"");
  }
}
