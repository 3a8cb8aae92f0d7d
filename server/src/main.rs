use std::sync::Arc;

use app::{
    client::ContentClient,
    component,
    config::ContentApiConfig,
    shell,
    types::AppState,
};
use axum::{Router, extract::State, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use serde_json::{Value, json};

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{DefaultPredicate, Predicate as _, SizeAbove};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    health_report(&state.content)
}

fn health_report(content: &ContentClient) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio",
        "version": env!("CARGO_PKG_VERSION"),
        "content_api": content.base_url().as_str(),
    }))
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        tracing::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        tracing::error!("Failed to get configuration");
        return;
    };

    let content_config = match ContentApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid content API configuration: {err}");
            return;
        }
    };
    let content = match ContentClient::new(content_config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("Failed to build content API client: {err}");
            return;
        }
    };
    tracing::info!("Using content API at {}", content.base_url());

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();
    let routes = generate_route_list(component);

    let app_state = AppState {
        content: Arc::new(content),
        leptos_options: Arc::new(leptos_options.clone()),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(site_root))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new().compress_when(
                    DefaultPredicate::new().and(SizeAbove::new(1024)),
                )),
        )
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            tracing::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    tracing::info!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => tracing::info!("Server shutdown gracefully"),
        Err(err) => tracing::error!("Failed to serve app: {err:?}"),
    }
}
