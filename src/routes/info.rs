// Recipe: settings echo
// Surfaces the environment-backed settings the server was started with

use crate::routes::AppState;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub app_name: String,
    pub admin_email: String,
    pub items_per_user: u32,
}

/// GET /info - Report the active settings
#[utoipa::path(
    get,
    tag = "info",
    operation_id = "info",
    path = "/info",
    responses((status = 200, description = "The active settings", body = InfoResponse))
)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let settings = &state.settings;

    Json(InfoResponse {
        app_name: settings.app_name.clone(),
        admin_email: settings.admin_email.clone(),
        items_per_user: settings.items_per_user,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/info", get(info))
}
