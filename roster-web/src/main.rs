//! Roster web server binary

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_storage::{DatabaseConfig, StorageManager};
use roster_web::config::Config;
use roster_web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize tracing
    let default_filter = format!("{},roster_web=debug", config.logging.level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster user directory");

    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        migrate_on_startup: config.database.migrate_on_startup,
    };
    let storage = Arc::new(StorageManager::new(&db_config).await?);

    if config.database.migrate_on_startup {
        storage.migrate().await?;
    }
    if config.database.seed_on_startup {
        storage.users().seed_sample_users().await?;
    }

    let web_config = WebConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        page_size: config.pagination.page_size,
    };

    WebServer::new(web_config, storage).run().await?;

    Ok(())
}
