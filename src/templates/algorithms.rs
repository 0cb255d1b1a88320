//! Complexity facts drawn from the fixed catalogues.

use crate::domain::{Question, QuestionKind};
use crate::error::QuizError;
use crate::random::{choice, RandomSource};
use crate::seeds::{ComplexityFact, SPACE_COMPLEXITIES, TIME_COMPLEXITIES};

fn complexity_question(kind: QuestionKind, measure: &str, fact: &ComplexityFact) -> Question {
  Question::new(
    kind,
    format!("What is the {} complexity of {}?", measure, fact.name),
    format!("// {} implementation\n// ...", fact.name),
    fact.complexity,
    format!("{} has a {} complexity of {}", fact.name, measure, fact.complexity),
  )
  .with_alternatives(fact.alternatives.iter().copied())
}

pub fn time_complexity(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let fact = choice(rng, &TIME_COMPLEXITIES)?;
  Ok(complexity_question(QuestionKind::TimeComplexity, "time", fact))
}

pub fn space_complexity(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let fact = choice(rng, &SPACE_COMPLEXITIES)?;
  Ok(complexity_question(QuestionKind::SpaceComplexity, "space", fact))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::logic::is_correct;
  use crate::random::tests::ScriptedRandom;

  #[test]
  fn bubble_sort_accepts_caret_spelling() {
    let mut rng = ScriptedRandom::new(vec![2]);
    let q = time_complexity(&mut rng, 0).unwrap();
    assert_eq!(q.text, "What is the time complexity of Bubble Sort?");
    assert_eq!(q.answer, "O(n²)");
    assert!(is_correct(&q, "o(n²)"));
    assert!(is_correct(&q, "O(n^2)"));
    assert!(!is_correct(&q, "O(n)"));
  }

  #[test]
  fn quick_sort_space_is_logarithmic() {
    let mut rng = ScriptedRandom::new(vec![3]);
    let q = space_complexity(&mut rng, 0).unwrap();
    assert_eq!(q.kind, QuestionKind::SpaceComplexity);
    assert_eq!(q.answer, "O(log n)");
    assert_eq!(q.explanation, "Quick Sort has a space complexity of O(log n)");
  }
}
