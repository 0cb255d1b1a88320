//! cquiz · C programming self-quiz backend
//!
//! The engine synthesizes quiz items from parameterized templates (struct
//! padding, pointer arithmetic, bit tricks, data structure properties,
//! complexity facts, memory bugs, getopt/stat/Valgrind scenarios) and grades
//! free-text answers. The `routes`/`state` modules expose it over HTTP and
//! WebSocket for a static single-page front end.
//!
//! ```no_run
//! use cquiz_backend::{is_correct, QuizGenerator, SeededRandom};
//!
//! let mut generator = QuizGenerator::new(SeededRandom::from_seed(42));
//! let quiz = generator.generate_quiz("c-basics").unwrap();
//! let first = &quiz.questions[0];
//! assert!(is_correct(first, &first.answer));
//! ```

pub mod bits;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod layout;
pub mod logic;
pub mod protocol;
pub mod random;
pub mod routes;
pub mod seeds;
pub mod state;
pub mod telemetry;
pub mod templates;
pub mod util;

pub use domain::{Category, Question, QuestionKind, Quiz, StructMember};
pub use error::QuizError;
pub use generator::QuizGenerator;
pub use logic::{grade, is_correct, QuizResult};
pub use random::{RandomSource, SeededRandom};
