//! Consistency judgment, delegated to an injected [`ConsistencyJudge`].
//!
//! The scorer never talks to the network itself. A judge is built once from
//! [`JudgeConfig`] before any unit is scored, so a missing credential surfaces
//! as a [`ConfigError`] up front instead of as a per-unit failure.

pub mod gemini;
pub mod stub;

use clap::ValueEnum;
use thiserror::Error;

use crate::model::scores::ConsistencyResult;

pub use gemini::GeminiJudge;
pub use stub::StubJudge;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_EXCERPT_CHARS: usize = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JudgeKind {
    Stub,
    Gemini,
}

/// A per-unit consistency judgment. Implementations must be shareable across
/// scoring threads.
pub trait ConsistencyJudge: Send + Sync {
    fn judge(&self, text: &str) -> Result<ConsistencyResult, JudgeError>;

    fn kind(&self) -> JudgeKind;

    /// Name for logs and reports (e.g. "stub", "gemini:gemini-2.0-flash").
    fn name(&self) -> String;
}

/// Failure of a single judge call. Recovered per unit by the aggregator.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("timeout after {0} seconds")]
    Timeout(u64),
    #[error("rate limited by the analysis service")]
    RateLimited,
    #[error("analysis service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("judge panicked: {0}")]
    Panicked(String),
}

/// Judge configuration problems. Fatal before any unit is scored.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key for the {judge} judge (set GEMINI_API_KEY or pass --api-key)")]
    MissingApiKey { judge: &'static str },
    #[error("invalid judge configuration: {0}")]
    Invalid(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Debug, Clone)]
pub struct JudgeConfig {
    pub kind: JudgeKind,
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub max_excerpt_chars: usize,
    pub stub_score: u8,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            kind: JudgeKind::Stub,
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_excerpt_chars: DEFAULT_MAX_EXCERPT_CHARS,
            stub_score: stub::STUB_CONSISTENCY,
        }
    }
}

pub fn build_judge(config: &JudgeConfig) -> Result<Box<dyn ConsistencyJudge>, ConfigError> {
    match config.kind {
        JudgeKind::Stub => {
            if config.stub_score > crate::model::thresholds::CONSISTENCY_MAX {
                return Err(ConfigError::Invalid(format!(
                    "stub consistency {} is above the maximum of {}",
                    config.stub_score,
                    crate::model::thresholds::CONSISTENCY_MAX
                )));
            }
            Ok(Box::new(StubJudge::with_score(config.stub_score)))
        }
        JudgeKind::Gemini => {
            let api_key = config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .ok_or(ConfigError::MissingApiKey { judge: "gemini" })?;
            if config.timeout_secs == 0 {
                return Err(ConfigError::Invalid("timeout must be positive".to_string()));
            }
            if config.max_excerpt_chars == 0 {
                return Err(ConfigError::Invalid(
                    "excerpt budget must be positive".to_string(),
                ));
            }
            if config.model.trim().is_empty() {
                return Err(ConfigError::Invalid("model name is empty".to_string()));
            }
            Ok(Box::new(GeminiJudge::new(config, api_key.to_string())?))
        }
    }
}

/// Cut `text` to at most `max_chars` characters without splitting a char.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/judge/tests.rs"]
mod tests;
