//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::protocol::{categories_out, to_out, ClientWsMessage, ServerWsMessage};
use crate::routes::{check_answer, submit_quiz};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "cquiz_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "cquiz_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "cquiz_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "cquiz_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "cquiz_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
pub async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Categories => ServerWsMessage::Categories { categories: categories_out() },

    ClientWsMessage::NewQuiz { category } => match state.create_quiz(&category).await {
      Ok((id, quiz)) => {
        info!(target: "quiz", %category, quiz_id = %id, "WS new_quiz served");
        ServerWsMessage::Quiz { quiz: to_out(&id, &quiz) }
      }
      Err(e) => ServerWsMessage::Error { message: e.to_string() },
    },

    ClientWsMessage::SubmitAnswer { quiz_id, index, answer } => {
      match check_answer(state, &quiz_id, index, &answer).await {
        Ok(out) => ServerWsMessage::AnswerResult {
          index,
          correct: out.correct,
          expected: out.expected,
          explanation: out.explanation,
        },
        Err(e) => ServerWsMessage::Error { message: e.to_string() },
      }
    }

    ClientWsMessage::SubmitQuiz { quiz_id, answers } => match submit_quiz(state, &quiz_id, &answers).await {
      Ok(result) => {
        info!(target: "quiz", %quiz_id, score = result.score, total = result.total, "WS submit_quiz graded");
        ServerWsMessage::QuizResult { result }
      }
      Err(e) => ServerWsMessage::Error { message: e.to_string() },
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::QuizConfig;

  fn seeded_state() -> AppState {
    let mut cfg = QuizConfig::default();
    cfg.engine.rng_seed = Some(3);
    AppState::new(cfg)
  }

  #[tokio::test]
  async fn ping_pong() {
    let st = seeded_state();
    let reply = handle_client_ws(ClientWsMessage::Ping, &st).await;
    assert!(matches!(reply, ServerWsMessage::Pong));
  }

  #[tokio::test]
  async fn new_quiz_then_answer() {
    let st = seeded_state();
    let msg: ClientWsMessage = serde_json::from_str(r#"{"type":"new_quiz","category":"bit-tricks"}"#).unwrap();
    let ServerWsMessage::Quiz { quiz } = handle_client_ws(msg, &st).await else {
      panic!("expected a quiz");
    };
    assert_eq!(quiz.questions.len(), 20);

    let expected = st.get_question(&quiz.quiz_id, 0).await.unwrap().answer;
    let reply = handle_client_ws(
      ClientWsMessage::SubmitAnswer { quiz_id: quiz.quiz_id.clone(), index: 0, answer: expected.clone() },
      &st,
    )
    .await;
    match reply {
      ServerWsMessage::AnswerResult { index, correct, expected: e, .. } => {
        assert_eq!(index, 0);
        assert!(correct);
        assert_eq!(e, expected);
      }
      other => panic!("unexpected reply: {:?}", other),
    }
  }

  #[tokio::test]
  async fn unknown_category_is_an_error_message() {
    let st = seeded_state();
    let reply = handle_client_ws(ClientWsMessage::NewQuiz { category: "rust".into() }, &st).await;
    match reply {
      ServerWsMessage::Error { message } => assert_eq!(message, "unknown quiz category: rust"),
      other => panic!("unexpected reply: {:?}", other),
    }
  }
}
