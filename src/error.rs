//! Error types for the sign-up E2E suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Playwright not found. Install with: npx playwright install")]
    PlaywrightNotFound,

    #[error("Playwright error: {0}")]
    Playwright(String),

    #[error("Timed out waiting for `{selector}` after {elapsed_ms} ms")]
    ElementTimeout { selector: String, elapsed_ms: u64 },

    #[error("Text mismatch at `{selector}`: expected {expected:?}, got {actual:?}")]
    TextMismatch {
        selector: String,
        expected: String,
        actual: String,
    },

    #[error("Step failed: {step} - {reason}")]
    StepFailed { step: String, reason: String },

    #[error("Invalid scenario `{name}`: {reason}")]
    InvalidScenario { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
