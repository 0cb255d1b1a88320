//! Application state: the shared quiz generator and the in-memory store of
//! quizzes handed out to clients.
//!
//! The engine itself is stateless between generations; the server keeps each
//! generated quiz under a UUID so later answer checks and submissions can be
//! graded against the exact questions that were served.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::QuizConfig;
use crate::domain::{Question, Quiz};
use crate::error::QuizError;
use crate::generator::QuizGenerator;
use crate::random::SeededRandom;

#[derive(Default)]
pub struct Sessions {
    by_id: HashMap<String, Quiz>,
    order: VecDeque<String>,
}

impl Sessions {
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Quiz> {
        self.by_id.get(id)
    }

    fn insert(&mut self, id: String, quiz: Quiz, cap: usize) -> Vec<String> {
        self.order.push_back(id.clone());
        self.by_id.insert(id, quiz);
        let mut evicted = Vec::new();
        while self.by_id.len() > cap.max(1) {
            match self.order.pop_front() {
                Some(old) => {
                    self.by_id.remove(&old);
                    evicted.push(old);
                }
                None => break,
            }
        }
        evicted
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Draws must stay strictly sequential, so generation holds this lock.
    pub generator: Arc<Mutex<QuizGenerator<SeededRandom>>>,
    pub sessions: Arc<RwLock<Sessions>>,
    pub config: QuizConfig,
}

impl AppState {
    #[instrument(level = "info", skip_all)]
    pub fn new(config: QuizConfig) -> Self {
        let rng = SeededRandom::new(config.engine.rng_seed);
        match rng.seed() {
            Some(seed) => info!(target: "cquiz_backend", seed, "Quiz engine seeded; quizzes are reproducible"),
            None => info!(target: "cquiz_backend", "Quiz engine seeded from OS entropy"),
        }
        Self {
            generator: Arc::new(Mutex::new(QuizGenerator::new(rng))),
            sessions: Arc::new(RwLock::new(Sessions::default())),
            config,
        }
    }

    /// Generate a quiz for `category` and store it. Returns the new quiz id.
    #[instrument(level = "info", skip(self), fields(%category))]
    pub async fn create_quiz(&self, category: &str) -> Result<(String, Quiz), QuizError> {
        let quiz = { self.generator.lock().await.generate_quiz(category)? };
        let id = Uuid::new_v4().to_string();
        let evicted = self
            .sessions
            .write()
            .await
            .insert(id.clone(), quiz.clone(), self.config.server.max_sessions);
        for old in evicted {
            debug!(target: "cquiz_backend", %old, "Evicted stored quiz");
        }
        info!(target: "cquiz_backend", quiz_id = %id, %category, questions = quiz.len(), "Quiz stored");
        Ok((id, quiz))
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_quiz(&self, id: &str) -> Option<Quiz> {
        self.sessions.read().await.by_id.get(id).cloned()
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_question(&self, id: &str, index: usize) -> Option<Question> {
        self.sessions
            .read()
            .await
            .by_id
            .get(id)
            .and_then(|q| q.get(index))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineConfig, ServerConfig};

    fn state(cap: usize) -> AppState {
        AppState::new(QuizConfig {
            engine: EngineConfig { rng_seed: Some(9) },
            server: ServerConfig { static_dir: "./static".into(), max_sessions: cap },
        })
    }

    #[tokio::test]
    async fn stores_and_serves_questions() {
        let st = state(4);
        let (id, quiz) = st.create_quiz("algorithms").await.unwrap();
        assert_eq!(quiz.len(), 20);
        assert_eq!(st.get_question(&id, 3).await, quiz.get(3).cloned());
        assert!(st.get_question(&id, 20).await.is_none());
        assert!(st.get_quiz("missing").await.is_none());
    }

    #[tokio::test]
    async fn unknown_category_stores_nothing() {
        let st = state(4);
        assert!(matches!(
            st.create_quiz("nope").await,
            Err(QuizError::UnknownCategory(_))
        ));
        assert!(st.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn oldest_quiz_is_evicted() {
        let st = state(2);
        let (first, _) = st.create_quiz("memory").await.unwrap();
        let (second, _) = st.create_quiz("memory").await.unwrap();
        let (third, _) = st.create_quiz("memory").await.unwrap();
        assert_eq!(st.sessions.read().await.len(), 2);
        assert!(st.get_quiz(&first).await.is_none());
        assert!(st.get_quiz(&second).await.is_some());
        assert!(st.get_quiz(&third).await.is_some());
    }
}
