// OpenAPI Document
// Aggregates every annotated operation and schema; serves as the input
// for client generators and for the Swagger UI mounted at /docs

use crate::routes::body::Item;
use crate::routes::clients::{CatalogItem, ResponseMessage, User};
use crate::routes::health::HealthResponse;
use crate::routes::info::InfoResponse;
use crate::routes::nested::Image;
use crate::routes::queries::{ItemRef, ItemsPage};
use crate::routes::schema_examples::ItemUpdate;
use crate::validation::FieldError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::body::create_item,
        crate::routes::nested::create_multiple_images,
        crate::routes::diagnostics::sum_numbers,
        crate::routes::clients::create_catalog_item,
        crate::routes::clients::list_catalog_items,
        crate::routes::clients::create_user,
        crate::routes::queries::read_items,
        crate::routes::schema_examples::update_item,
        crate::routes::info::info,
        crate::routes::health::health,
    ),
    components(
        schemas(
            Item,
            Image,
            CatalogItem,
            User,
            ResponseMessage,
            ItemRef,
            ItemsPage,
            ItemUpdate,
            InfoResponse,
            HealthResponse,
            FieldError,
        )
    ),
    tags(
        (name = "body", description = "Request body model echo"),
        (name = "nested", description = "Collections of nested models"),
        (name = "diagnostics", description = "Validation failures echoed with the raw body"),
        (name = "items", description = "Item catalog endpoints for client generation"),
        (name = "users", description = "User endpoints for client generation"),
        (name = "queries", description = "Query-parameter validation"),
        (name = "schema-examples", description = "Example payloads declared in the schema"),
        (name = "info", description = "Settings echo"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "API Cookbook",
        description = "Runnable recipes for building JSON APIs with axum",
        version = "0.1.0"
    )
)]
#[derive(Debug)]
pub struct ApiDoc;
