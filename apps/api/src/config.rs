use anyhow::{bail, Context, Result};

use crate::analytics::AnalysisOptions;

/// Service configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the characters accepted per analysis request.
    pub max_input_chars: usize,
    pub analysis: AnalysisOptions,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = AnalysisOptions::default();

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_input_chars: parse_env("MAX_INPUT_CHARS", 100_000)?,
            analysis: AnalysisOptions {
                top_words: parse_env("ANALYTICS_TOP_WORDS", defaults.top_words)?,
                words_per_minute: positive_rate(
                    "ANALYTICS_WORDS_PER_MINUTE",
                    parse_env("ANALYTICS_WORDS_PER_MINUTE", defaults.words_per_minute)?,
                )?,
                ..defaults
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_input_chars: 100_000,
            analysis: AnalysisOptions::default(),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

/// `NaN` and `inf` parse as `f64` but make every derived duration meaningless.
fn positive_rate(key: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        bail!("Environment variable '{key}' must be a finite number above zero, got {value}");
    }
    Ok(value)
}
