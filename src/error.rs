//! Engine error taxonomy. Every variant is local and synchronous: the engine
//! never retries, callers surface the message and abort the current action.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
  /// Category key outside the fixed registry.
  #[error("unknown quiz category: {0}")]
  UnknownCategory(String),

  /// A template asked the random source to choose from an empty catalogue.
  #[error("cannot choose from an empty sequence")]
  EmptyInput,

  /// Struct layout requested for a struct without members.
  #[error("struct layout needs at least one member")]
  InvalidMember,

  /// No pair of distinct shifts sums to the multiplier.
  #[error("{0} cannot be written as the sum of two distinct powers of two")]
  NoDecomposition(u32),
}
