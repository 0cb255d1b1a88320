//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! - LOG_LEVEL holds `EnvFilter` directives (default: `DEFAULT_FILTER`).
//! - LOG_FORMAT=json switches to JSON lines, anything else is the fmt output.
//!
//! Engine events use target `quiz`, the server shell `cquiz_backend`.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,quiz=debug,cquiz_backend=debug,tower_http=info,axum=info";

pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Filter from LOG_LEVEL, or the default directives when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing() -> Result<(), InitError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init(),
        _ => builder.try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert!(filter.to_string().contains("quiz=debug"));
    }

    #[test]
    fn second_init_fails() {
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
