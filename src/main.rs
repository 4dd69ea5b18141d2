use anyhow::{bail, Context, Result};
use api_cookbook::routes::{self, ApiDoc, RECIPES};
use api_cookbook::{logger, Settings};
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("serve") => serve(args.get(2).map(String::as_str)).await,
        Some("list") => {
            run_list();
            Ok(())
        }
        Some("openapi") => run_openapi(),
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!("usage: cookbook [serve [RECIPE] | list | openapi]");
            std::process::exit(2);
        }
    }
}

/// Print recipe names with their descriptions.
fn run_list() {
    println!("Available recipes:");
    for (name, description) in RECIPES {
        println!("  {name:<16} {description}");
    }
    println!("\nRun: cookbook serve <recipe>");
}

/// Dump the OpenAPI document to stdout, for feeding client generators.
fn run_openapi() -> Result<()> {
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .context("failed to serialize the OpenAPI document")?;
    println!("{doc}");
    Ok(())
}

async fn serve(recipe: Option<&str>) -> Result<()> {
    let settings = Arc::new(
        Settings::from_env().context("failed to load settings from the environment")?,
    );

    let app = match recipe {
        None => routes::app(settings.clone()),
        Some(name) => match routes::recipe_router(name, settings.clone()) {
            Some(router) => router,
            None => {
                let known: Vec<&str> = RECIPES.iter().map(|(name, _)| *name).collect();
                bail!("unknown recipe '{name}', expected one of: {}", known.join(", "));
            }
        },
    };

    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    match recipe {
        None => tracing::info!(
            "serving all recipes on http://localhost:{} (docs at /docs)",
            settings.port
        ),
        Some(name) => tracing::info!(
            "serving recipe '{}' on http://localhost:{}",
            name,
            settings.port
        ),
    }

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
