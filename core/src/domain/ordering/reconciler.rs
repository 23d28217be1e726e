use chrono::Utc;

use crate::domain::common::generate_uuid_v7;
use crate::domain::localization::entities::Locale;
use crate::domain::menu::catalog::find_menu_item_by_id;
use crate::domain::ordering::entities::{Currency, Order, OrderItem, OrderStatus};
use crate::domain::ordering::value_objects::ProposedOrder;

const MAX_NOTES_CHARS: usize = 120;

/// Reconciles a model-proposed order into the canonical server-trusted one.
/// The proposer decides *which* items and *how many*; everything priced or
/// labeled comes from the menu catalog. Total by construction: unknown ids
/// are dropped, malformed quantities default to 1, notes are truncated, and
/// totals are recomputed — malformed input can never fail the turn.
pub fn ensure_order_consistency(proposed: &ProposedOrder, locale: Locale) -> Order {
    let mut items: Vec<OrderItem> = Vec::with_capacity(proposed.items.len());
    for item in &proposed.items {
        let Some(menu_item) = find_menu_item_by_id(&item.id, locale) else {
            // hallucinated id: noise, not failure
            continue;
        };
        let quantity = match item.quantity {
            Some(q) if q > 0 => u32::try_from(q).unwrap_or(1),
            _ => 1,
        };
        let notes: String = item
            .notes
            .as_deref()
            .unwrap_or("")
            .chars()
            .take(MAX_NOTES_CHARS)
            .collect();
        items.push(OrderItem {
            id: menu_item.id.clone(),
            name: menu_item.name.clone(),
            quantity,
            unit_price_cents: menu_item.price_cents,
            notes,
        });
    }

    let subtotal_cents: u32 = items.iter().map(|it| it.unit_price_cents * it.quantity).sum();
    let tax_cents = 0;
    let total_cents = subtotal_cents;

    // An empty order cannot be confirmed, even when completion was signaled.
    let status = if proposed.completed && !items.is_empty() {
        OrderStatus::Confirmed
    } else {
        proposed.status.unwrap_or(OrderStatus::Building)
    };

    let order_id = proposed
        .order_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| generate_uuid_v7().to_string());

    Order {
        order_id,
        items,
        currency: Currency::Eur,
        subtotal_cents,
        tax_cents,
        total_cents,
        status,
        completed: proposed.completed,
        updated_at: Utc::now(),
    }
}
