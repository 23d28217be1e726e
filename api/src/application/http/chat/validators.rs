use drivethru_core::domain::{localization::entities::Locale, ordering::entities::Order};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurnRequest {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "message must be between 1 and 2000 characters"
    ))]
    pub message: String,
    /// The canonical order returned by the previous turn, resent by the
    /// client as conversation context. Absent on the first turn.
    #[serde(default)]
    pub current_order: Option<Order>,
    #[serde(default)]
    pub locale: Locale,
}
