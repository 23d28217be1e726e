use axum::extract::Query;

use crate::application::http::{
    menu::validators::GetMenuParams,
    server::api_entities::{api_error::ApiError, response::Response},
};
use drivethru_core::domain::menu::{catalog, entities::MenuSection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMenuResponse {
    pub data: Vec<MenuSection>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu",
    summary = "Get the menu",
    description = "Returns the ordered menu sections for a locale",
    responses(
        (status = 200, body = GetMenuResponse)
    ),
    params(GetMenuParams)
)]
pub async fn get_menu(
    Query(params): Query<GetMenuParams>,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let locale = params.locale.unwrap_or_default();
    let sections = catalog::get_menu(locale).to_vec();

    Ok(Response::OK(GetMenuResponse { data: sections }))
}
