//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Answers and explanations never leave the server before a question is graded.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, QuestionKind, Quiz};
use crate::generator::quiz_length;
use crate::logic::QuizResult;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Categories,
    NewQuiz {
        category: String,
    },
    SubmitAnswer {
        #[serde(rename = "quizId")]
        quiz_id: String,
        index: usize,
        answer: String,
    },
    SubmitQuiz {
        #[serde(rename = "quizId")]
        quiz_id: String,
        answers: Vec<String>,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Categories {
        categories: Vec<CategoryOut>,
    },
    Quiz {
        quiz: QuizOut,
    },
    AnswerResult {
        index: usize,
        correct: bool,
        expected: String,
        explanation: String,
    },
    QuizResult {
        result: QuizResult,
    },
    Error {
        message: String,
    },
}

/// Question as shown to the learner.
#[derive(Debug, Serialize)]
pub struct QuestionOut {
    pub index: usize,
    pub kind: QuestionKind,
    pub text: String,
    pub code: String,
}

/// DTO used by both WS and HTTP for quiz delivery.
#[derive(Debug, Serialize)]
pub struct QuizOut {
    #[serde(rename = "quizId")]
    pub quiz_id: String,
    pub category: Category,
    pub questions: Vec<QuestionOut>,
}

/// Convert a stored quiz to the public DTO.
pub fn to_out(quiz_id: &str, quiz: &Quiz) -> QuizOut {
    QuizOut {
        quiz_id: quiz_id.to_string(),
        category: quiz.category,
        questions: quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, q)| QuestionOut {
                index,
                kind: q.kind,
                text: q.text.clone(),
                code: q.code.clone(),
            })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryOut {
    pub key: Category,
    pub questions: usize,
}

pub fn categories_out() -> Vec<CategoryOut> {
    Category::ALL
        .into_iter()
        .map(|key| CategoryOut { key, questions: quiz_length(key) })
        .collect()
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct NewQuizIn {
    pub category: String,
}

#[derive(Deserialize)]
pub struct AnswerIn {
    #[serde(rename = "quizId")]
    pub quiz_id: String,
    pub index: usize,
    pub answer: String,
}
#[derive(Debug, Serialize)]
pub struct AnswerOut {
    pub correct: bool,
    pub expected: String,
    pub explanation: String,
}

#[derive(Deserialize)]
pub struct SubmitIn {
    #[serde(rename = "quizId")]
    pub quiz_id: String,
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Serialize)]
pub struct CategoriesOut {
    pub categories: Vec<CategoryOut>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}
