use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use donation_matcher::config::Settings;
use donation_matcher::core::Matcher;
use donation_matcher::routes::{self, AppState};
use donation_matcher::services::{MemoryStore, PostgresClient, RecordStore};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Donation Matcher service...");
    info!("Configuration loaded successfully");

    // Initialize record store
    let store: Arc<dyn RecordStore> = match settings.database.connection_url() {
        Some(url) => {
            let db_max_conn = settings.database.max_connections.unwrap_or(10);

            let postgres = PostgresClient::from_settings(
                url,
                Some(db_max_conn),
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
                settings.database.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;

            info!("PostgreSQL store initialized (max: {} connections)", db_max_conn);
            Arc::new(postgres)
        }
        None => {
            warn!("No database URL configured, records are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    // Initialize matcher with configured weights
    let matcher = Matcher::new(settings.need_weights());

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let app_state = AppState::new(store, matcher);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
