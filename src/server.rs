//! HTTP surface
//!
//! Axum router exposing the GraphQL endpoint (POST executes, GET serves the
//! playground page), plus a health check. Shared here so the serve command
//! and the integration tests build the same app.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::error::{Result, ShelfqlError};
use crate::schema::CatalogSchema;

/// Build the application router around a schema
pub fn make_app(schema: CatalogSchema) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .route("/health", get(health_check))
        .with_state(schema)
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is stopped
pub async fn serve(schema: CatalogSchema, bind: &str, port: u16) -> Result<()> {
    let app = make_app(schema);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        ShelfqlError::Config(format!(
            "Failed to bind to {}: {}. Port may be in use.",
            addr, e
        ))
    })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ShelfqlError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request).await)
}

async fn graphql_playground() -> Html<String> {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
