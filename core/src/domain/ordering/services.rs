use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ordering::{
        helpers::{detect_completion, normalize_assistant_text},
        ports::{ChatOrderingService, LLMClient, TurnMessages},
        prompts::{prior_order_note, system_prompt},
        reconciler::ensure_order_consistency,
        schema::build_response_schema,
        value_objects::{ChatTurnInput, ChatTurnOutput, LlmTurnResponse},
    },
};

impl<LLM> ChatOrderingService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn process_turn(&self, input: ChatTurnInput) -> Result<ChatTurnOutput, CoreError> {
        // 1. Build the schema constraint and the three message turns
        let response_schema = build_response_schema(input.locale);
        let messages = TurnMessages {
            system: system_prompt(input.locale),
            user: input.message.clone(),
            context: prior_order_note(input.locale, input.current_order.as_ref()),
        };

        // 2. Call the model; upstream failures surface to the caller as-is
        let raw_response = self
            .llm_client
            .generate_turn(messages, response_schema)
            .await?;

        // 3. Parse; an unreadable completion degrades to raw text with the
        //    prior order passed through unchanged
        let parsed: LlmTurnResponse = match serde_json::from_str(&raw_response) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("LLM response did not match the expected structure: {}", e);
                return Ok(ChatTurnOutput {
                    assistant_text: raw_response,
                    order: input.current_order,
                    timestamp: Utc::now().to_rfc3339(),
                });
            }
        };

        // 4. Merge the completion signals: the model's flag OR the keyword
        //    heuristic on the raw user message
        let mut proposed = parsed.order;
        proposed.completed = proposed.completed || detect_completion(&input.message);

        // 5. Reconcile against the catalog
        let order = ensure_order_consistency(&proposed, input.locale);

        // 6. Keep the assistant from contradicting a completed order
        let assistant_text =
            normalize_assistant_text(parsed.assistant_text, order.completed, input.locale);

        Ok(ChatTurnOutput {
            assistant_text,
            order: Some(order),
            timestamp: parsed
                .timestamp
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::domain::localization::entities::Locale;
    use crate::domain::ordering::entities::OrderStatus;
    use crate::domain::ordering::value_objects::ProposedOrder;

    /// Scripted LLM client: replays a fixed reply and records the messages
    /// it was called with.
    struct ScriptedLlm {
        reply: Result<String, CoreError>,
        calls: Mutex<Vec<TurnMessages>>,
    }

    impl ScriptedLlm {
        fn replying(reply: Result<String, CoreError>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl LLMClient for ScriptedLlm {
        async fn generate_turn(
            &self,
            messages: TurnMessages,
            _response_schema: serde_json::Value,
        ) -> Result<String, CoreError> {
            self.calls.lock().unwrap().push(messages);
            self.reply.clone()
        }
    }

    fn turn_reply(assistant_text: &str, order: serde_json::Value) -> String {
        json!({
            "assistant_text": assistant_text,
            "order": order,
            "timestamp": "2024-05-01T12:00:00Z"
        })
        .to_string()
    }

    fn input(message: &str, locale: Locale) -> ChatTurnInput {
        ChatTurnInput {
            message: message.to_string(),
            current_order: None,
            locale,
        }
    }

    #[tokio::test]
    async fn happy_path_reconciles_the_proposed_order() {
        let reply = turn_reply(
            "Un burger classique, autre chose ?",
            json!({
                "orderId": "turn-1",
                "items": [
                    {"id": "burger_classic", "name": "Burger Classique", "quantity": 1, "notes": ""},
                    {"id": "pizza_hawaii", "name": "Pizza", "quantity": 2, "notes": ""}
                ],
                "currency": "EUR",
                "subtotalCents": 9999,
                "taxCents": 0,
                "totalCents": 9999,
                "status": "building",
                "updatedAt": "2024-05-01T12:00:00Z",
                "completed": false
            }),
        );
        let service = Service::new(ScriptedLlm::replying(Ok(reply)));

        let output = service
            .process_turn(input("je voudrais un burger", Locale::Fr))
            .await
            .unwrap();

        assert_eq!(output.assistant_text, "Un burger classique, autre chose ?");
        let order = output.order.unwrap();
        assert_eq!(order.order_id, "turn-1");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.subtotal_cents, 500);
        assert_eq!(order.total_cents, 500);
        assert_eq!(order.status, OrderStatus::Building);
        assert!(!order.completed);
        assert_eq!(output.timestamp, "2024-05-01T12:00:00Z");
    }

    #[tokio::test]
    async fn prompt_carries_menu_and_prior_order_context() {
        let reply = turn_reply("ok", json!({"items": []}));
        let llm = ScriptedLlm::replying(Ok(reply));
        let service = Service::new(llm);

        let prior = ensure_order_consistency(&ProposedOrder::default(), Locale::En);
        let turn = ChatTurnInput {
            message: "a water please".to_string(),
            current_order: Some(prior.clone()),
            locale: Locale::En,
        };
        service.process_turn(turn).await.unwrap();

        let calls = service.llm_client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].system.contains("Classic Burger"));
        assert_eq!(calls[0].user, "a water please");
        assert!(calls[0].context.contains(&prior.order_id));
    }

    #[tokio::test]
    async fn heuristic_overrides_the_models_completed_flag() {
        let reply = turn_reply(
            "Would you like anything else?",
            json!({
                "orderId": "turn-2",
                "items": [{"id": "water", "name": "Water", "quantity": 1, "notes": ""}],
                "completed": false
            }),
        );
        let service = Service::new(ScriptedLlm::replying(Ok(reply)));

        let output = service
            .process_turn(input("that's it, checkout please", Locale::En))
            .await
            .unwrap();

        let order = output.order.unwrap();
        assert!(order.completed);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(
            output.assistant_text,
            "Order confirmed. Go to the next terminal for payment."
        );
    }

    #[tokio::test]
    async fn unparseable_reply_degrades_to_raw_text() {
        let service = Service::new(ScriptedLlm::replying(Ok(
            "sorry, I cannot do that".to_string()
        )));

        let prior = ensure_order_consistency(&ProposedOrder::default(), Locale::Fr);
        let turn = ChatTurnInput {
            message: "un burger".to_string(),
            current_order: Some(prior.clone()),
            locale: Locale::Fr,
        };
        let output = service.process_turn(turn).await.unwrap();

        assert_eq!(output.assistant_text, "sorry, I cannot do that");
        assert_eq!(output.order, Some(prior));
    }

    #[tokio::test]
    async fn upstream_failures_propagate_untouched() {
        let err = CoreError::LlmUpstream {
            status: 429,
            code: Some("insufficient_quota".to_string()),
            message: "quota exceeded".to_string(),
        };
        let service = Service::new(ScriptedLlm::replying(Err(err.clone())));

        let result = service.process_turn(input("hello", Locale::En)).await;
        assert_eq!(result.unwrap_err(), err);
    }
}
