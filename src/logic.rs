//! Answer checking and whole-quiz grading.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::{Question, Quiz};
use crate::util::{normalize, normalize_compact};

/// Case-insensitive, surrounding-whitespace-insensitive string match against
/// the canonical answer. Questions that carry alternatives also ignore
/// interior whitespace, for the canonical answer and every alternative.
/// No numeric tolerance: "0.80" is not "0.8".
#[instrument(level = "debug", skip(question, user_answer), fields(kind = ?question.kind, answer_len = user_answer.len()))]
pub fn is_correct(question: &Question, user_answer: &str) -> bool {
  if normalize(user_answer) == normalize(&question.answer) {
    return true;
  }
  if question.alternative_answers.is_empty() {
    return false;
  }

  let given = normalize_compact(user_answer);
  if given.is_empty() {
    return false;
  }
  std::iter::once(&question.answer)
    .chain(question.alternative_answers.iter())
    .any(|a| normalize_compact(a) == given)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
  pub index: usize,
  pub question: String,
  pub code: String,
  pub user_answer: String,
  pub correct_answer: String,
  pub explanation: String,
  pub correct: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuizResult {
  pub score: usize,
  pub total: usize,
  pub results: Vec<QuestionResult>,
}

/// Grade a full submission. Missing answers count as empty, hence wrong;
/// extra answers past the end of the quiz are ignored.
#[instrument(level = "info", skip(quiz, answers), fields(category = %quiz.category, total = quiz.len(), submitted = answers.len()))]
pub fn grade(quiz: &Quiz, answers: &[String]) -> QuizResult {
  let results: Vec<QuestionResult> = quiz
    .questions
    .iter()
    .enumerate()
    .map(|(index, q)| {
      let user_answer = answers.get(index).cloned().unwrap_or_default();
      let correct = is_correct(q, &user_answer);
      debug!(target: "quiz", index, %correct, "graded");
      QuestionResult {
        index,
        question: q.text.clone(),
        code: q.code.clone(),
        user_answer,
        correct_answer: q.answer.clone(),
        explanation: q.explanation.clone(),
        correct,
      }
    })
    .collect();

  let score = results.iter().filter(|r| r.correct).count();
  info!(target: "quiz", score, total = results.len(), "quiz graded");
  QuizResult { score, total: results.len(), results }
}
