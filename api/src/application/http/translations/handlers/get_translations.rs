use axum::extract::Query;

use crate::application::http::{
    server::api_entities::{api_error::ApiError, response::Response},
    translations::validators::GetTranslationsParams,
};
use drivethru_core::domain::localization::{entities::UiStrings, translations::get_translations as lookup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetTranslationsResponse {
    pub data: UiStrings,
}

#[utoipa::path(
    get,
    path = "",
    tag = "translations",
    summary = "Get UI translations",
    description = "Returns the static UI string bundle for a locale",
    responses(
        (status = 200, body = GetTranslationsResponse)
    ),
    params(GetTranslationsParams)
)]
pub async fn get_translations(
    Query(params): Query<GetTranslationsParams>,
) -> Result<Response<GetTranslationsResponse>, ApiError> {
    let locale = params.locale.unwrap_or_default();

    Ok(Response::OK(GetTranslationsResponse {
        data: lookup(locale).clone(),
    }))
}
