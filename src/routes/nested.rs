// Recipe: collections of nested models
// The request body is a JSON array of models; the url field must parse
// as an absolute URL or the framework rejects the request

use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Image {
    /// Absolute URL of the image; "not a url" fails deserialization
    pub url: Url,
    pub name: String,
}

/// POST /images/multiple/ - Echo the submitted list of images
#[utoipa::path(
    post,
    tag = "nested",
    operation_id = "create_multiple_images",
    path = "/nested/images/multiple/",
    request_body = Vec<Image>,
    responses(
        (status = 200, description = "The images, unchanged", body = Vec<Image>),
        (status = 422, description = "An element does not match the Image schema"),
    )
)]
pub async fn create_multiple_images(Json(images): Json<Vec<Image>>) -> Json<Vec<Image>> {
    Json(images)
}

pub fn router() -> Router {
    Router::new().route("/images/multiple/", post(create_multiple_images))
}
