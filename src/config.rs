// Runtime Settings - Environment-Backed Configuration
// Read once at startup and shared read-only with the handlers

use anyhow::{Context, Result};

/// The configuration parameters for the application.
///
/// All values come from environment variables. Only `ADMIN_EMAIL` is
/// required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Display name of the application (`APP_NAME`)
    pub app_name: String,
    /// Contact address surfaced by `GET /info` (`ADMIN_EMAIL`, required)
    pub admin_email: String,
    /// Per-user item quota surfaced by `GET /info` (`ITEMS_PER_USER`)
    pub items_per_user: u32,
    /// The port to listen for HTTP requests on (`PORT`)
    pub port: u16,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_name = get("APP_NAME").unwrap_or_else(|| "Awesome API".to_string());

        let admin_email = get("ADMIN_EMAIL").context("ADMIN_EMAIL must be provided")?;

        let items_per_user = match get("ITEMS_PER_USER") {
            Some(raw) => raw
                .parse::<u32>()
                .context("ITEMS_PER_USER must be an unsigned integer")?,
            None => 50,
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().context("PORT must be a port number")?,
            None => 8080,
        };

        Ok(Settings {
            app_name,
            admin_email,
            items_per_user,
            port,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
