//! CLI command implementations.

use std::sync::Arc;

use color_eyre::eyre::Result;

use schoolmap_server::{Server, ServerConfig};
use schoolmap_store::{InMemoryStore, SchoolStore, SqliteStore};

/// Start the HTTP server.
pub async fn serve(host: String, port: u16, database_url: String, cors: bool) -> Result<()> {
    let addr = format!("{host}:{port}").parse()?;

    let store: Arc<dyn SchoolStore> = if database_url == "memory" {
        tracing::warn!("Using in-memory store; schools are lost on shutdown");
        Arc::new(InMemoryStore::new())
    } else {
        Arc::new(SqliteStore::connect(&database_url).await?)
    };

    let config = ServerConfig::builder().addr(addr).cors(cors).build();

    let server = Server::new(config, store);
    server.run().await?;

    Ok(())
}

/// Print version and build info.
pub fn version() {
    println!("schoolmap {}", env!("CARGO_PKG_VERSION"));
}
