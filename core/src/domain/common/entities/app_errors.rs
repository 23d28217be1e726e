use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("resource not found")]
    NotFound,

    #[error("internal server error")]
    InternalServerError,

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    /// Failure reported by the LLM provider itself (auth, quota, rate limit).
    /// Carries the upstream HTTP status and the provider's machine-readable
    /// error code when one was present in the response body.
    #[error("upstream model call failed ({status}): {message}")]
    LlmUpstream {
        status: u16,
        code: Option<String>,
        message: String,
    },
}
