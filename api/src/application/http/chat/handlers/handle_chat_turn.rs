use axum::extract::State;

use crate::application::http::{
    chat::validators::ChatTurnRequest,
    server::{
        api_entities::{
            api_error::{ApiError, KeyContext, LlmFailureBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use drivethru_core::domain::{
    common::entities::app_errors::CoreError,
    localization::entities::Locale,
    ordering::{entities::Order, ports::ChatOrderingService, value_objects::ChatTurnInput},
};
use drivethru_core::infrastructure::llm::openai_client::is_project_key;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatTurnResponse {
    pub assistant_text: String,
    pub order: Option<Order>,
    pub timestamp: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Play one ordering turn",
    description = "Sends the user message to the model and returns the assistant reply with the reconciled canonical order",
    responses(
        (status = 200, body = ChatTurnResponse),
        (status = 422, description = "Message failed validation"),
    ),
    request_body = ChatTurnRequest
)]
pub async fn handle_chat_turn(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatTurnRequest>,
) -> Result<Response<ChatTurnResponse>, ApiError> {
    let locale = payload.locale;

    let output = state
        .service
        .process_turn(ChatTurnInput {
            message: payload.message,
            current_order: payload.current_order,
            locale,
        })
        .await
        .map_err(|err| map_chat_error(&state, locale, err))?;

    Ok(Response::OK(ChatTurnResponse {
        assistant_text: output.assistant_text,
        order: output.order,
        timestamp: output.timestamp,
    }))
}

fn quota_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => {
            "Vérifiez le quota du projet/organisation associé à la clé. Si vous utilisez une clé \
             sk-proj-*, assurez-vous que le projet a du crédit ou utilisez une clé liée à \
             l'organisation avec quota. Vous pouvez aussi définir OPENAI_ORG et OPENAI_PROJECT."
        }
        Locale::En => {
            "Check the quota of the project/organization tied to the key. If you use an \
             sk-proj-* key, make sure the project has credit, or use an organization key with \
             quota. You can also set OPENAI_ORG and OPENAI_PROJECT."
        }
    }
}

/// Upstream model failures become the structured error body of the turn
/// endpoint; everything else maps through the generic conversion.
fn map_chat_error(state: &AppState, locale: Locale, err: CoreError) -> ApiError {
    match err {
        CoreError::LlmUpstream {
            status,
            code,
            message,
        } => {
            tracing::error!("chat turn failed upstream ({}): {}", status, message);
            let llm = &state.args.llm;
            let project_key = is_project_key(&llm.openai_api_key);
            let hint = (code.as_deref() == Some("insufficient_quota"))
                .then(|| quota_hint(locale).to_string());

            ApiError::LlmUpstream(Box::new(LlmFailureBody {
                error: message,
                code,
                hint,
                model: llm.openai_model.clone(),
                context: KeyContext {
                    key_type: if project_key { "project-key" } else { "org-key" },
                    org_header_provided: !project_key && llm.openai_org.is_some(),
                    project_header_provided: !project_key && llm.openai_project.is_some(),
                },
                status,
            }))
        }
        other => ApiError::from(other),
    }
}
