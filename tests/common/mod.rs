use api_cookbook::{routes, Settings};
use axum::Router;
use std::sync::Arc;

pub fn test_settings() -> Arc<Settings> {
    Arc::new(Settings {
        app_name: "Awesome API".to_string(),
        admin_email: "admin@example.com".to_string(),
        items_per_user: 50,
        port: 0,
    })
}

/// The combined app, every recipe nested under its prefix.
pub fn combined_app() -> Router {
    routes::app(test_settings())
}

/// One recipe's router, mounted at the root path.
pub fn recipe(name: &str) -> Router {
    routes::recipe_router(name, test_settings()).expect("known recipe")
}
