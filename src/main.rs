use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use modern_infra_backend::controllers::{AccountController, UserController};
use modern_infra_backend::domain::account::AccountService;
use modern_infra_backend::domain::i18n::MessageCatalog;
use modern_infra_backend::domain::problem::ErrorTranslator;
use modern_infra_backend::domain::user::UserService;
use modern_infra_backend::infrastructure::config::{Config, LogFormat};
use modern_infra_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use modern_infra_backend::infrastructure::http::{build_router, start_http_server};
use modern_infra_backend::infrastructure::repositories::UserRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        default_locale = %config.default_locale,
        "Starting Modern Infra Backend on {}:{}",
        config.host,
        config.port
    );

    // Load message bundles
    let catalog = match &config.messages_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Loading message bundle overrides");
            MessageCatalog::with_overrides(dir, config.default_locale.clone())?
        }
        None => MessageCatalog::builtin(config.default_locale.clone()),
    };

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    tracing::info!("Instantiating repositories...");
    let user_repo = Arc::new(UserRepository::new(pool.clone()));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let user_service = Arc::new(UserService::new(user_repo));
    let account_service = Arc::new(AccountService::new());
    let translator = Arc::new(ErrorTranslator::new(Arc::new(catalog)));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let user_controller = Arc::new(UserController::new(user_service, config.app_name.clone()));
    let account_controller = Arc::new(AccountController::new(account_service));

    // Start HTTP server with all routes
    let app = build_router(pool, config.clone(), translator, user_controller, account_controller);
    start_http_server(app, config).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "modern_infra_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "modern_infra_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
