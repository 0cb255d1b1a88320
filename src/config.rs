//! Loading quiz server configuration (engine seed + server knobs) from TOML.
//!
//! See `QuizConfig` for the expected schema. Every field is optional.

use serde::Deserialize;
use tracing::{error, info, warn};

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct QuizConfig {
  #[serde(default)]
  pub engine: EngineConfig,
  #[serde(default)]
  pub server: ServerConfig,
}

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
  /// Fixed seed for the shared random source. `None` draws from OS entropy.
  #[serde(default)]
  pub rng_seed: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
  /// Stored quizzes beyond this are evicted oldest first.
  #[serde(default = "default_max_sessions")]
  pub max_sessions: usize,
}

fn default_static_dir() -> String {
  "./static".into()
}

fn default_max_sessions() -> usize {
  256
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      static_dir: default_static_dir(),
      max_sessions: default_max_sessions(),
    }
  }
}

impl QuizConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str::<QuizConfig>(s)
  }
}

/// Attempt to load `QuizConfig` from QUIZ_CONFIG_PATH. On any parsing/IO
/// error the defaults are used. QUIZ_RNG_SEED overrides `engine.rng_seed`.
pub fn load_config_from_env() -> QuizConfig {
  let mut cfg = match std::env::var("QUIZ_CONFIG_PATH") {
    Ok(path) => match std::fs::read_to_string(&path) {
      Ok(s) => match QuizConfig::from_toml_str(&s) {
        Ok(cfg) => {
          info!(target: "cquiz_backend", %path, "Loaded quiz config (TOML)");
          cfg
        }
        Err(e) => {
          error!(target: "cquiz_backend", %path, error = %e, "Failed to parse TOML config");
          QuizConfig::default()
        }
      },
      Err(e) => {
        error!(target: "cquiz_backend", %path, error = %e, "Failed to read TOML config file");
        QuizConfig::default()
      }
    },
    Err(_) => QuizConfig::default(),
  };

  if let Ok(raw) = std::env::var("QUIZ_RNG_SEED") {
    match raw.parse::<u64>() {
      Ok(seed) => cfg.engine.rng_seed = Some(seed),
      Err(e) => warn!(target: "cquiz_backend", %raw, error = %e, "Ignoring QUIZ_RNG_SEED"),
    }
  }
  cfg
}
