// Recipe: echoed validation diagnostics
// The summing endpoint itself is trivial; the point is EchoedJson, which
// answers a malformed body with 422 carrying the errors and the raw payload

use crate::extract::EchoedJson;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

/// POST / - Sum the submitted list of integers
#[utoipa::path(
    post,
    tag = "diagnostics",
    operation_id = "sum_numbers",
    path = "/diagnostics/",
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "The sum of the submitted numbers", body = i64),
        (status = 422, description = "Body did not parse; the detail echoes the raw payload"),
    )
)]
pub async fn sum_numbers(EchoedJson(numbers): EchoedJson<Vec<i64>>) -> Json<i64> {
    Json(numbers.iter().sum())
}

pub fn router() -> Router {
    Router::new().route("/", post(sum_numbers))
}
