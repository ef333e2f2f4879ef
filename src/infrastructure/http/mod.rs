pub mod extract;
pub mod locale;
pub mod problem;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::controllers::{health, language, AccountController, UserController};
use crate::domain::problem::ErrorTranslator;
use crate::infrastructure::auth::{auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

pub use locale::{locale_middleware, RequestLocale};
pub use problem::{problem_boundary, problem_response};

use problem::method_not_allowed;

/// Build the application router.
///
/// Layers, from the handler outwards: panic capture, bearer auth, problem
/// boundary, locale resolution, request id, tracing. Every fault raised by a
/// handler, an extractor or the auth layer therefore reaches the boundary
/// with the request locale already resolved.
pub fn build_router(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    translator: Arc<ErrorTranslator>,
    user_controller: Arc<UserController>,
    account_controller: Arc<AccountController>,
) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health).fallback(method_not_allowed))
        .route(
            "/health/ready",
            get(health::health_ready).fallback(method_not_allowed),
        )
        .with_state(pool);

    let language_routes = Router::new().route(
        "/internal/changeLanguage",
        get(language::change_language).fallback(method_not_allowed),
    );

    let user_routes = Router::new()
        .route(
            "/api/users",
            post(UserController::register).fallback(method_not_allowed),
        )
        .route(
            "/api/users/:id",
            get(UserController::get_user).fallback(method_not_allowed),
        )
        .with_state(user_controller);

    let account_routes = Router::new()
        .route(
            "/api/accounts",
            put(AccountController::update_account).fallback(method_not_allowed),
        )
        .route(
            "/api/accounts/:number",
            delete(AccountController::delete_account).fallback(method_not_allowed),
        )
        .with_state(account_controller);

    Router::new()
        .merge(health_routes)
        .merge(language_routes)
        .merge(user_routes)
        .merge(account_routes)
        .fallback(problem::route_not_found)
        .layer(CatchPanicLayer::custom(problem::panic_to_fault))
        .layer(middleware::from_fn_with_state(config.clone(), auth_middleware))
        .layer(middleware::from_fn_with_state(translator, problem_boundary))
        .layer(middleware::from_fn_with_state(
            config.default_locale.clone(),
            locale_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` on the configured host and port until the process stops
pub async fn start_http_server(
    app: Router,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
