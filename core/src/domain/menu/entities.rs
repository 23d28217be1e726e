use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One purchasable product for a given locale. The `id` is stable across
/// locales (same physical product); `name` and `price_cents` are the
/// authoritative display label and price for that locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price_cents: u32,
}

/// Display grouping of menu items. Ordering is presentation order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}
