use super::handlers::get_translations::{__path_get_translations, get_translations};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_translations))]
pub struct TranslationsApiDoc;

pub fn translation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/translations", state.args.server.root_path),
        get(get_translations),
    )
}
