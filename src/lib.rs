// API Cookbook - Core Library
// Exposes all recipe modules for use in the CLI server and tests

pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod routes;
pub mod validation;

// Re-export commonly used types
pub use config::Settings;
pub use error::ApiError;
pub use extract::EchoedJson;
pub use validation::{FieldError, StringRules};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
