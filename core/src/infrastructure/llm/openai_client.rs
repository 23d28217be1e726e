use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LlmConfig, entities::app_errors::CoreError},
    ordering::ports::{LLMClient, TurnMessages},
};

/// Project-scoped OpenAI keys (`sk-proj-*`) must not be combined with
/// explicit organization/project headers; organization keys may be.
pub fn is_project_key(api_key: &str) -> bool {
    api_key.starts_with("sk-proj-")
}

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    organization: Option<String>,
    project: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamErrorDetail,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
    code: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(config: LlmConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            api_key: config.api_key,
            model_name: config.model,
            organization: config.organization,
            project: config.project,
            base_url: config.base_url,
            client,
        })
    }

    async fn call_chat_completions(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request);
        if !is_project_key(&self.api_key) {
            if let Some(organization) = &self.organization {
                builder = builder.header("OpenAI-Organization", organization);
            }
            if let Some(project) = &self.project {
                builder = builder.header("OpenAI-Project", project);
            }
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("OpenAI API request failed: {}", e);
            CoreError::ExternalServiceError(format!("LLM API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let error = classify_error_body(status, &body);
            tracing::error!("OpenAI API error: {} - {}", status, body);
            return Err(error);
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn classify_error_body(status: u16, body: &str) -> CoreError {
    let (code, message) = match serde_json::from_str::<UpstreamErrorBody>(body) {
        Ok(parsed) => (parsed.error.code, parsed.error.message),
        Err(_) => (None, body.to_string()),
    };
    CoreError::LlmUpstream {
        status,
        code,
        message,
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate_turn(
        &self,
        messages: TurnMessages,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: messages.system,
                },
                ChatMessage {
                    role: "user",
                    content: messages.user,
                },
                ChatMessage {
                    role: "user",
                    content: messages.context,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: response_schema,
            },
            temperature: 0.2,
        };

        self.call_chat_completions(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_keys_are_recognized() {
        assert!(is_project_key("sk-proj-abc123"));
        assert!(!is_project_key("sk-abc123"));
        assert!(!is_project_key(""));
    }

    #[test]
    fn upstream_error_bodies_keep_code_and_message() {
        let body = r#"{"error": {"message": "You exceeded your current quota", "code": "insufficient_quota", "type": "insufficient_quota"}}"#;
        let err = classify_error_body(429, body);
        assert_eq!(
            err,
            CoreError::LlmUpstream {
                status: 429,
                code: Some("insufficient_quota".to_string()),
                message: "You exceeded your current quota".to_string(),
            }
        );
    }

    #[test]
    fn non_json_error_bodies_fall_back_to_raw_text() {
        let err = classify_error_body(502, "Bad Gateway");
        assert_eq!(
            err,
            CoreError::LlmUpstream {
                status: 502,
                code: None,
                message: "Bad Gateway".to_string(),
            }
        );
    }
}
