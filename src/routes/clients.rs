// Recipe: endpoints shaped for client generation
// Operations carry tags and operation ids so generated clients group into
// an `items` and a `users` namespace with usable method names

use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResponseMessage {
    pub message: String,
}

/// POST /items/ - Accept an item, acknowledge receipt
#[utoipa::path(
    post,
    tag = "items",
    operation_id = "create_catalog_item",
    path = "/clients/items/",
    request_body = CatalogItem,
    responses((status = 200, description = "Receipt acknowledgement", body = ResponseMessage))
)]
pub async fn create_catalog_item(Json(_item): Json<CatalogItem>) -> Json<ResponseMessage> {
    Json(ResponseMessage {
        message: "Item received".to_string(),
    })
}

/// GET /items/ - Static item listing
#[utoipa::path(
    get,
    tag = "items",
    operation_id = "list_catalog_items",
    path = "/clients/items/",
    responses((status = 200, description = "All known items", body = Vec<CatalogItem>))
)]
pub async fn list_catalog_items() -> Json<Vec<CatalogItem>> {
    Json(vec![
        CatalogItem {
            name: "Plumbus".to_string(),
            price: 3.0,
        },
        CatalogItem {
            name: "Portal Gun".to_string(),
            price: 9001.0,
        },
    ])
}

/// POST /users/ - Accept a user, acknowledge receipt
#[utoipa::path(
    post,
    tag = "users",
    operation_id = "create_user",
    path = "/clients/users/",
    request_body = User,
    responses((status = 200, description = "Receipt acknowledgement", body = ResponseMessage))
)]
pub async fn create_user(Json(_user): Json<User>) -> Json<ResponseMessage> {
    Json(ResponseMessage {
        message: "User received".to_string(),
    })
}

pub fn router() -> Router {
    Router::new()
        .route("/items/", post(create_catalog_item).get(list_catalog_items))
        .route("/users/", post(create_user))
}
