//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.
//! Also the answer/submit operations shared by the HTTP and WebSocket handlers.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use thiserror::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, instrument, Level};

use crate::error::QuizError;
use crate::logic::{grade, is_correct, QuizResult};
use crate::protocol::{AnswerOut, ErrorOut};
use crate::state::AppState;
use crate::util::trunc_for_log;

pub mod http;
pub mod ws;

/// Failures the shell reports to clients.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unknown quiz id: {0}")]
    UnknownQuiz(String),

    #[error("quiz {quiz_id} has no question {index}")]
    UnknownQuestion { quiz_id: String, index: usize },

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownQuiz(_) | ApiError::UnknownQuestion { .. } => StatusCode::NOT_FOUND,
            ApiError::Quiz(QuizError::UnknownCategory(_)) => StatusCode::BAD_REQUEST,
            ApiError::Quiz(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorOut { error: self.to_string() })).into_response()
    }
}

/// Grade one answer against a stored question.
#[instrument(level = "info", skip(state, answer), fields(%quiz_id, answer_len = answer.len()))]
pub async fn check_answer(state: &AppState, quiz_id: &str, index: usize, answer: &str) -> Result<AnswerOut, ApiError> {
    let q = {
        let sessions = state.sessions.read().await;
        let quiz = sessions
            .get(quiz_id)
            .ok_or_else(|| ApiError::UnknownQuiz(quiz_id.to_string()))?;
        quiz.get(index)
            .cloned()
            .ok_or_else(|| ApiError::UnknownQuestion { quiz_id: quiz_id.to_string(), index })?
    };
    let correct = is_correct(&q, answer);
    info!(target: "quiz", %quiz_id, index, %correct, answer = %trunc_for_log(answer, 64), "Answer checked");
    Ok(AnswerOut { correct, expected: q.answer, explanation: q.explanation })
}

/// Grade a whole submission against a stored quiz.
#[instrument(level = "info", skip(state, answers), fields(%quiz_id, submitted = answers.len()))]
pub async fn submit_quiz(state: &AppState, quiz_id: &str, answers: &[String]) -> Result<QuizResult, ApiError> {
    let quiz = state
        .get_quiz(quiz_id)
        .await
        .ok_or_else(|| ApiError::UnknownQuiz(quiz_id.to_string()))?;
    Ok(grade(&quiz, answers))
}

/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from the configured directory with index fallback
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let static_service = ServeDir::new(&static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(format!("{}/index.html", static_dir)));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/categories", get(http::http_get_categories))
        .route("/api/v1/quiz", post(http::http_post_quiz))
        .route("/api/v1/answer", post(http::http_post_answer))
        .route("/api/v1/submit", post(http::http_post_submit))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
