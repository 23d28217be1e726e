use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use drivethru_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),

    /// Structured failure of the upstream model call, serialized verbatim
    /// as the response body with the upstream's own status code.
    #[error("{}", .0.error)]
    LlmUpstream(Box<LlmFailureBody>),
}

/// Error body for a failed chat turn: what went wrong upstream plus enough
/// key-provisioning context to act on it.
#[derive(Debug, Serialize, ToSchema)]
pub struct LlmFailureBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub model: String,
    pub context: KeyContext,
    #[serde(skip)]
    pub status: u16,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyContext {
    pub key_type: &'static str,
    pub org_header_provided: bool,
    pub project_header_provided: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::UnprocessableEntity(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message),
            ApiError::LlmUpstream(body) => {
                let status =
                    StatusCode::from_u16(body.status).unwrap_or(StatusCode::BAD_GATEWAY);
                return (status, Json(*body)).into_response();
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
            CoreError::ExternalServiceError(message) => ApiError::BadGateway(message),
            CoreError::LlmUpstream { message, .. } => ApiError::BadGateway(message),
        }
    }
}

/// `Json` extractor that also runs `validator` rules, rejecting with 400 on
/// malformed JSON and 422 on failed validation.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value
            .validate()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        Ok(ValidateJson(value))
    }
}
