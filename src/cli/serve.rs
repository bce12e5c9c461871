use shelfql::error::Result;
use shelfql::store::RecordStore;
use std::sync::Arc;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    // Load config
    let config = shelfql::config::load_config(&config_path)?;

    // An explicit --port wins over the configured port
    let server_port = resolve_port(port, config.server.port);

    // Populate the store once; from here on it only grows by append
    let store = match &config.seed {
        Some(seed_config) => {
            tracing::info!("🌱 Loading seed data from {}", seed_config.path);
            let seed = shelfql::store::load_seed(&seed_config.path)?;
            RecordStore::from_seed(seed)
        }
        None => {
            tracing::warn!("No [seed] section in config. Starting with empty collections.");
            RecordStore::new()
        }
    };

    let (author_count, book_count) = store.counts();
    tracing::info!("   {} authors, {} books", author_count, book_count);

    tracing::info!("🔧 Building GraphQL schema...");
    let schema = shelfql::schema::build_schema(Arc::new(store));

    tracing::info!("✅ Schema built successfully");
    tracing::info!("🚀 GraphQL server running on http://localhost:{}", server_port);
    tracing::info!("📊 Playground: http://localhost:{}/graphql", server_port);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    // Start the HTTP server
    shelfql::server::serve(schema, &config.server.bind, server_port).await
}

fn resolve_port(cli_port: Option<u16>, config_port: u16) -> u16 {
    cli_port.unwrap_or(config_port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_port_overrides_config() {
        assert_eq!(resolve_port(Some(4000), 9000), 4000);
        assert_eq!(resolve_port(Some(8080), 9000), 8080);
    }

    #[test]
    fn test_config_port_used_when_no_cli_port() {
        assert_eq!(resolve_port(None, 9000), 9000);
    }
}
