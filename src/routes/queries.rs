// Recipe: query-parameter validation
// The optional q parameter (also accepted under the alias "item-query")
// must be 3..=50 characters and match a fixed pattern when present

use crate::error::ApiError;
use crate::validation::StringRules;
use axum::extract::Query;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use utoipa::{IntoParams, ToSchema};

fn q_rules() -> &'static StringRules {
    static RULES: OnceLock<StringRules> = OnceLock::new();
    RULES.get_or_init(|| StringRules {
        min_length: Some(3),
        max_length: Some(50),
        pattern: Some(Regex::new("^fixedquery$").expect("hard-coded pattern is valid")),
    })
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemsQuery {
    /// Query string
    #[serde(default, alias = "item-query")]
    #[param(min_length = 3, max_length = 50, pattern = "^fixedquery$")]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemRef {
    pub item_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemsPage {
    pub items: Vec<ItemRef>,
    /// Echo of the validated query string, present only when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// GET /items/ - List items, optionally echoing a validated query string
#[utoipa::path(
    get,
    tag = "queries",
    operation_id = "read_items",
    path = "/queries/items/",
    params(ItemsQuery),
    responses(
        (status = 200, description = "Item listing", body = ItemsPage),
        (status = 422, description = "q violates its constraints"),
    )
)]
pub async fn read_items(Query(params): Query<ItemsQuery>) -> Result<Json<ItemsPage>, ApiError> {
    if let Some(q) = &params.q {
        q_rules().check("q", q).map_err(ApiError::validation)?;
    }

    Ok(Json(ItemsPage {
        items: vec![
            ItemRef {
                item_id: "Foo".to_string(),
            },
            ItemRef {
                item_id: "Bar".to_string(),
            },
        ],
        q: params.q,
    }))
}

pub fn router() -> Router {
    Router::new().route("/items/", get(read_items))
}

// ============================================================================
// TESTS
// ============================================================================
