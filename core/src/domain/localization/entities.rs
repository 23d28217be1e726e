use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Supported conversation locales. French is the designated fallback: any
/// tag other than `en` resolves to `Fr`, so locale handling has no failure
/// mode anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("en") {
            Locale::En
        } else {
            Locale::Fr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Locale::from_tag(&raw))
    }
}

/// Static UI string bundle served to the browser for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    pub app_title: String,
    pub app_subtitle: String,
    pub choose_language: String,
    pub french: String,
    pub english: String,
    pub menu: String,
    pub type_placeholder: String,
    pub send: String,
    pub assistant_writing: String,
    pub order: String,
    pub no_order: String,
    pub quantity: String,
    pub total: String,
    pub confirmed: String,
    pub building: String,
    pub order_confirmed: String,
    pub payment_message: String,
    pub error_occurred: String,
}
