use drivethru_core::domain::localization::entities::Locale;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetTranslationsParams {
    /// Bundle locale; unknown or missing tags fall back to `fr`.
    #[schema(example = "en")]
    pub locale: Option<Locale>,
}
