use crate::application::http::{
    chat::router::ChatApiDoc, menu::router::MenuApiDoc, translations::router::TranslationsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DriveThru API"
    ),
    nest(
        (path = "/chat", api = ChatApiDoc),
        (path = "/menu", api = MenuApiDoc),
        (path = "/translations", api = TranslationsApiDoc),
    )
)]
pub struct ApiDoc;
