use axum::{Json, extract::State};
use drivethru_core::domain::{localization::entities::Locale, ordering::entities::Currency};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

/// Public runtime configuration for the browser front-end.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub model: String,
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
    pub currency: Currency,
}

pub async fn get_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(PublicConfig {
        model: state.args.llm.openai_model.clone(),
        default_locale: Locale::default(),
        locales: vec![Locale::Fr, Locale::En],
        currency: Currency::Eur,
    })
}
