//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::logic::QuizResult;
use crate::protocol::*;
use crate::routes::{check_answer, submit_quiz, ApiError};
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_categories() -> impl IntoResponse {
  Json(CategoriesOut { categories: categories_out() })
}

#[instrument(level = "info", skip(state, body), fields(category = %body.category))]
pub async fn http_post_quiz(
  State(state): State<Arc<AppState>>,
  Json(body): Json<NewQuizIn>,
) -> Result<Json<QuizOut>, ApiError> {
  let (id, quiz) = state.create_quiz(&body.category).await?;
  info!(target: "quiz", category = %body.category, quiz_id = %id, questions = quiz.len(), "HTTP quiz served");
  Ok(Json(to_out(&id, &quiz)))
}

#[instrument(level = "info", skip(state, body), fields(%body.quiz_id, index = body.index, answer_len = body.answer.len()))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> Result<Json<AnswerOut>, ApiError> {
  let out = check_answer(&state, &body.quiz_id, body.index, &body.answer).await?;
  info!(target: "quiz", quiz_id = %body.quiz_id, index = body.index, correct = out.correct, "HTTP answer evaluated");
  Ok(Json(out))
}

#[instrument(level = "info", skip(state, body), fields(%body.quiz_id, submitted = body.answers.len()))]
pub async fn http_post_submit(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SubmitIn>,
) -> Result<Json<QuizResult>, ApiError> {
  let result = submit_quiz(&state, &body.quiz_id, &body.answers).await?;
  info!(target: "quiz", quiz_id = %body.quiz_id, score = result.score, total = result.total, "HTTP quiz submitted");
  Ok(Json(result))
}
