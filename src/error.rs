use thiserror::Error;

use crate::input::InputError;
use crate::judge::ConfigError;
use crate::lexicon::LexiconError;
use crate::pipeline::stage4_radar::ReduceError;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NO_INPUT: i32 = 2;
pub const EXIT_SERVICE_UNAVAILABLE: i32 = 3;
pub const EXIT_PARTIAL: i32 = 4;

/// Top-level failure. Each class maps to its own message prefix and exit code
/// so callers can tell an empty document from an unreachable judge.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no document/text to analyze: {0}")]
    Input(#[from] InputError),
    #[error("no document/text to analyze: {0}")]
    Reduce(#[from] ReduceError),
    #[error("analysis service unavailable: {0}")]
    Config(#[from] ConfigError),
    #[error("some pages could not be fully evaluated: {fallbacks} of {units} units used the fallback consistency score")]
    Partial { fallbacks: usize, units: usize },
    #[error("invalid lexicon: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Input(_) | AppError::Reduce(_) => EXIT_NO_INPUT,
            AppError::Config(_) => EXIT_SERVICE_UNAVAILABLE,
            AppError::Partial { .. } => EXIT_PARTIAL,
            AppError::Lexicon(_) | AppError::Io(_) | AppError::Json(_) => EXIT_FAILURE,
        }
    }
}
