use crate::ErrorResponse;
use thiserror::Error;

/// Why a submission produced no result. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please provide input before analyzing!")]
    EmptyInput,
    #[error("Only .txt or .docx files supported (got \"{0}\")")]
    UnsupportedFile(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Builds a `Server` error from a non-success response, preferring the
    /// service's `{"error": ...}` message over the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|parsed| parsed.error)
            .unwrap_or_else(|_| body.trim().to_string());
        SubmitError::Server { status, message }
    }

    /// Validation problems are shown as a transient notice and never leave the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::EmptyInput | SubmitError::UnsupportedFile(_))
    }
}
