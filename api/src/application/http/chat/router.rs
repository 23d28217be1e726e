use super::handlers::handle_chat_turn::{__path_handle_chat_turn, handle_chat_turn};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(handle_chat_turn))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/chat", state.args.server.root_path),
        post(handle_chat_turn),
    )
}
