//! getopt, stat and Valgrind scenario questions.

use crate::domain::{Question, QuestionKind};
use crate::error::QuizError;
use crate::random::{choice, RandomSource};
use crate::seeds::{GETOPT_LOOPS, STAT_FIELDS, VALGRIND_SCENARIOS};

use super::from_scenario;

pub fn getopt(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let s = choice(rng, &GETOPT_LOOPS)?;
  Ok(from_scenario(
    QuestionKind::Getopt,
    "What does the following getopt loop print for optind/optarg?",
    s,
  ))
}

pub fn stat_field(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let s = choice(rng, &STAT_FIELDS)?;
  Ok(from_scenario(
    QuestionKind::StatField,
    "What does the following stat field represent?",
    s,
  ))
}

pub fn valgrind_error(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let s = choice(rng, &VALGRIND_SCENARIOS)?;
  Ok(from_scenario(
    QuestionKind::ValgrindError,
    "What Valgrind error (if any) would this code produce?",
    s,
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::logic::is_correct;
  use crate::random::tests::ScriptedRandom;

  #[test]
  fn invalid_free_scenario() {
    let mut rng = ScriptedRandom::new(vec![3]);
    let q = valgrind_error(&mut rng, 0).unwrap();
    assert_eq!(q.answer, "Invalid free() / delete / delete[] / realloc()");
    assert!(is_correct(&q, "invalid free() / delete / delete[] / realloc()"));
    assert!(is_correct(&q, "Invalid free"));
  }

  #[test]
  fn stat_mode_field() {
    let mut rng = ScriptedRandom::new(vec![1]);
    let q = stat_field(&mut rng, 0).unwrap();
    assert!(q.code.contains("st.st_mode"));
    assert_eq!(q.answer, "file mode (permissions)");
  }

  #[test]
  fn getopt_optind() {
    let mut rng = ScriptedRandom::new(vec![0]);
    let q = getopt(&mut rng, 0).unwrap();
    assert!(q.code.ends_with("printf(\"%d\\n\", optind);"));
    assert_eq!(q.answer, "index of first non-option argument");
  }
}
