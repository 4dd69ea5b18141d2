// Recipe: example payloads in the schema
// Reuses the Item model, whose declared example renders in the OpenAPI
// document, and pairs it with a path parameter

use crate::routes::body::Item;
use axum::extract::Path;
use axum::response::Json;
use axum::routing::put;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemUpdate {
    pub item_id: u64,
    pub item: Item,
}

/// PUT /items/{item_id} - Echo the path id together with the submitted item
#[utoipa::path(
    put,
    tag = "schema-examples",
    operation_id = "update_item",
    path = "/schema-examples/items/{item_id}",
    params(("item_id" = u64, Path, description = "Identifier of the item to replace")),
    request_body = Item,
    responses(
        (status = 200, description = "The id and the item, unchanged", body = ItemUpdate),
        (status = 422, description = "Body does not match the Item schema"),
    )
)]
pub async fn update_item(Path(item_id): Path<u64>, Json(item): Json<Item>) -> Json<ItemUpdate> {
    Json(ItemUpdate { item_id, item })
}

pub fn router() -> Router {
    Router::new().route("/items/:item_id", put(update_item))
}
