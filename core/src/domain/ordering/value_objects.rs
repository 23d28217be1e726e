use serde::{Deserialize, Deserializer};

use crate::domain::localization::entities::Locale;
use crate::domain::ordering::entities::{Order, OrderStatus};

/// One inbound chat turn: the raw user message plus the client's copy of
/// the order from the previous turn.
#[derive(Debug, Clone)]
pub struct ChatTurnInput {
    pub message: String,
    pub current_order: Option<Order>,
    pub locale: Locale,
}

/// The result of a turn handed back to the transport layer. `timestamp` is
/// the model's own turn timestamp when it supplied one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurnOutput {
    pub assistant_text: String,
    pub order: Option<Order>,
    pub timestamp: String,
}

/// The model's candidate order for the current turn. Advisory only: every
/// field is re-validated by the reconciler, so deserialization is lenient —
/// a malformed field degrades to its fallback instead of failing the turn.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposedOrder {
    pub order_id: Option<String>,
    pub items: Vec<ProposedOrderItem>,
    #[serde(deserialize_with = "lenient_status")]
    pub status: Option<OrderStatus>,
    #[serde(deserialize_with = "lenient_bool")]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposedOrderItem {
    pub id: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: Option<i64>,
    pub notes: Option<String>,
}

/// Shape of the schema-constrained completion returned by the model. A
/// missing or unreadable `order` fails the whole parse, which the
/// orchestrator treats as the degrade-to-raw-text path.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmTurnResponse {
    #[serde(default)]
    pub assistant_text: String,
    pub order: ProposedOrder,
    #[serde(default)]
    pub timestamp: Option<String>,
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<OrderStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposed_order_tolerates_malformed_fields() {
        let proposed: ProposedOrder = serde_json::from_str(
            r#"{
                "orderId": "abc",
                "status": "shipped",
                "completed": "yes",
                "items": [{"id": "burger_classic", "quantity": 1.5, "notes": null}]
            }"#,
        )
        .unwrap();

        assert_eq!(proposed.order_id.as_deref(), Some("abc"));
        assert_eq!(proposed.status, None);
        assert!(!proposed.completed);
        assert_eq!(proposed.items[0].quantity, None);
        assert_eq!(proposed.items[0].notes, None);
    }

    #[test]
    fn turn_response_requires_an_order_object() {
        let err = serde_json::from_str::<LlmTurnResponse>(r#"{"assistant_text": "hi"}"#);
        assert!(err.is_err());
    }
}
