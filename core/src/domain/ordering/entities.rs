use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Building,
    Confirmed,
    Paid,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
}

/// One line of a canonical order. `name` and `unit_price_cents` always come
/// from the menu catalog, never from the proposer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: u32,
    pub notes: String,
}

/// Server-reconciled order snapshot, authoritative for pricing and status.
/// Replaced wholesale every turn; the client resends it as context for the
/// next turn. Invariant: `total_cents == Σ(unit_price_cents × quantity)`
/// and `tax_cents == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub currency: Currency,
    pub subtotal_cents: u32,
    pub tax_cents: u32,
    pub total_cents: u32,
    pub status: OrderStatus,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}
