use std::sync::Arc;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use academy::{
    api,
    config::{Settings, StorageBackend},
    repository::{CollectionStore, MemoryCollectionStore, SqliteCollectionStore},
    service::ServiceContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "academy=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!("Starting {} on {}:{}", settings.academy.name, settings.server.host, settings.server.port);

    let collections: Arc<dyn CollectionStore> = match settings.storage.backend {
        StorageBackend::Sqlite => {
            let db_pool = SqlitePoolOptions::new()
                .max_connections(settings.database.max_connections)
                .connect(&settings.database.url)
                .await?;

            sqlx::migrate!("./migrations")
                .run(&db_pool)
                .await?;

            tracing::info!("Collections persisted in {}", settings.database.url);
            Arc::new(SqliteCollectionStore::new(db_pool))
        }
        StorageBackend::Memory => {
            tracing::info!("Collections held in memory; they reset on restart");
            Arc::new(MemoryCollectionStore::new())
        }
    };

    let service_context = Arc::new(ServiceContext::from_settings(collections, &settings));

    // Abandoned applications are otherwise only pruned when a new one starts
    let sessions = service_context.admission_sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            let removed = sessions.cleanup_expired().await;
            if removed > 0 {
                tracing::debug!("Pruned {} expired admission sessions", removed);
            }
        }
    });

    let app = api::create_app(service_context, Arc::new(settings.clone()));

    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", settings.server.host, settings.server.port)
    ).await?;

    tracing::info!("Server listening on {}", settings.server.base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
