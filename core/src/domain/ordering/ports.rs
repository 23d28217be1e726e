use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::ordering::value_objects::{ChatTurnInput, ChatTurnOutput};

/// The three message turns sent to the model for one chat turn: the system
/// prompt with the embedded menu, the user's raw message, and a serialized
/// snapshot of the prior order as auxiliary context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnMessages {
    pub system: String,
    pub user: String,
    pub context: String,
}

/// LLM client port. Implementations return the raw completion text of one
/// schema-constrained chat completion.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_turn(
        &self,
        messages: TurnMessages,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the chat-turn orchestration.
#[cfg_attr(test, mockall::automock)]
pub trait ChatOrderingService: Send + Sync {
    fn process_turn(
        &self,
        input: ChatTurnInput,
    ) -> impl Future<Output = Result<ChatTurnOutput, CoreError>> + Send;
}
