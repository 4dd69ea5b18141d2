// Recipe: request body models
// A declared JSON shape is deserialized from the request and echoed back

use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

/// An item with a name, optional description, price, and optional tax.
///
/// The declared example shows up in the OpenAPI document and in Swagger UI.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Foo",
    "description": "A very nice Item",
    "price": 35.4,
    "tax": 3.2,
}))]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// POST /items/ - Echo the submitted item
#[utoipa::path(
    post,
    tag = "body",
    operation_id = "create_item",
    path = "/body/items/",
    request_body = Item,
    responses(
        (status = 200, description = "The item, unchanged", body = Item),
        (status = 422, description = "Body does not match the Item schema"),
    )
)]
pub async fn create_item(Json(item): Json<Item>) -> Json<Item> {
    Json(item)
}

pub fn router() -> Router {
    Router::new().route("/items/", post(create_item))
}
