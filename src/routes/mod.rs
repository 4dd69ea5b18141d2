// Recipe Routers
// Each submodule is one self-contained recipe exposing its own Router.
// The combined app nests every recipe under its own prefix; single-recipe
// mode mounts one router at the root, preserving its standalone paths.

use crate::config::Settings;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod body;
pub mod clients;
pub mod diagnostics;
pub mod docs;
pub mod health;
pub mod info;
pub mod nested;
pub mod queries;
pub mod schema_examples;

pub use docs::ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

/// Recipe names with one-line descriptions, as printed by `cookbook list`.
pub const RECIPES: &[(&str, &str)] = &[
    ("body", "POST /items/ echoes a JSON Item body"),
    ("nested", "POST /images/multiple/ echoes a list of Image models"),
    (
        "diagnostics",
        "POST / sums a list of numbers; parse failures echo the raw body",
    ),
    (
        "clients",
        "tagged items/users endpoints shaped for OpenAPI client generation",
    ),
    (
        "queries",
        "GET /items/ validates the optional q query parameter",
    ),
    (
        "schema-examples",
        "PUT /items/{item_id} with an example payload in the schema",
    ),
    ("info", "GET /info echoes the environment-backed settings"),
    ("health", "GET /health liveness probe"),
];

/// Build the combined application: every recipe under its own prefix,
/// `/info` and `/health` at the root, Swagger UI at `/docs`.
pub fn app(settings: Arc<Settings>) -> Router {
    let state = AppState { settings };

    Router::new()
        .nest("/body", body::router())
        .nest("/nested", nested::router())
        .nest("/diagnostics", diagnostics::router())
        .nest("/clients", clients::router())
        .nest("/queries", queries::router())
        .nest("/schema-examples", schema_examples::router())
        .merge(info::router().with_state(state))
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
}

/// Build a single recipe's router, mounted at the root path.
/// Returns `None` for unknown recipe names.
pub fn recipe_router(name: &str, settings: Arc<Settings>) -> Option<Router> {
    match name {
        "body" => Some(body::router()),
        "nested" => Some(nested::router()),
        "diagnostics" => Some(diagnostics::router()),
        "clients" => Some(clients::router()),
        "queries" => Some(queries::router()),
        "schema-examples" => Some(schema_examples::router()),
        "info" => Some(info::router().with_state(AppState { settings })),
        "health" => Some(health::router()),
        _ => None,
    }
}
