use anyhow::Result;
use axum::Router;
use modern_infra_backend::domain::i18n::{Locale, MessageCatalog};
use modern_infra_backend::infrastructure::config::{Config, Environment, LogFormat};
use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;

pub mod assertions;
pub mod db_pool;

use api_client::TestClient;
use db_pool::{DatabasePool, PooledDatabase};
use fixtures::TestFixtures;

pub const APP_NAME: &str = "modern-infra-e2e";

// Docker client for test containers
static DOCKER: Lazy<Cli> = Lazy::new(Cli::default);

// Shared PostgreSQL container for all tests
static SHARED_CONTAINER: Lazy<SharedContainer> = Lazy::new(SharedContainer::new);

// Global database pool
static DB_POOL: Lazy<DatabasePool> = Lazy::new(|| DatabasePool::new(SHARED_CONTAINER.port));

/// Shared container that lives for the duration of all tests
struct SharedContainer {
    _container: Container<'static, Postgres>,
    port: u16,
}

impl SharedContainer {
    fn new() -> Self {
        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        println!("Started shared PostgreSQL container on port {}", port);

        Self {
            _container: container,
            port,
        }
    }
}

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub pool: PgPool,
    pub config: Config,
    pub fixtures: TestFixtures,
    _db: PooledDatabase,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let pooled_db = DB_POOL
                .get_database()
                .await
                .expect("Failed to get database from pool");

            let config = Config {
                database_url: pooled_db.database_url.clone(),
                host: "127.0.0.1".to_string(),
                port: 0,
                jwt_secret: "test-jwt-secret-key-for-testing-only".to_string(),
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                default_locale: Locale::default(),
                messages_dir: None,
                app_name: APP_NAME.to_string(),
            };

            let app = create_app(config.clone(), pooled_db.pool.clone())
                .await
                .expect("Failed to create app");

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            Self {
                client: TestClient::new(&base_url),
                pool: pooled_db.pool.clone(),
                config,
                fixtures: TestFixtures::new(pooled_db.pool.clone()),
                _db: pooled_db,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Database cleanup happens via Drop on PooledDatabase
        }
    }
}

/// Same wiring as `main`, against the leased database
async fn create_app(config: Config, pool: PgPool) -> Result<Router> {
    use modern_infra_backend::{
        controllers::{AccountController, UserController},
        domain::{account::AccountService, problem::ErrorTranslator, user::UserService},
        infrastructure::{http::build_router, repositories::UserRepository},
    };

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let user_service = Arc::new(UserService::new(user_repo));
    let account_service = Arc::new(AccountService::new());
    let translator = Arc::new(ErrorTranslator::new(Arc::new(MessageCatalog::builtin(
        config.default_locale.clone(),
    ))));

    let user_controller = Arc::new(UserController::new(user_service, config.app_name.clone()));
    let account_controller = Arc::new(AccountController::new(account_service));

    Ok(build_router(
        pool,
        config,
        translator,
        user_controller,
        account_controller,
    ))
}

/// HS256 token for `subject` carrying `roles`
pub fn generate_test_jwt(subject: &str, roles: &[&str], secret: &str) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use modern_infra_backend::domain::auth::Claims;

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp: (now + chrono::Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
