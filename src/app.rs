use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    config::AppConfig,
    database,
    error::{AppError, Result},
    queries::{PgProductStore, ProductStore},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// Connects to Postgres, creates the products table if needed and returns
/// the fully layered router.
pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let store = Arc::new(PgProductStore::new(pool));

    with_store(store, config)
}

pub fn with_store(store: Arc<dyn ProductStore>, config: &AppConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allow_origin(&config.cors.allowed_origins)?);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(CatchPanicLayer::new())
        .layer(trace)
        .with_state(AppState::new(store));

    Ok(app)
}

/// `*` on its own allows any origin; it cannot be mixed with explicit ones.
fn allow_origin(origins: &[String]) -> Result<AllowOrigin> {
    if origins.iter().any(|origin| origin == "*") {
        if origins.len() > 1 {
            return Err(AppError::ConfigError(
                "CORS origin '*' cannot be combined with other origins".to_string(),
            ));
        }
        return Ok(AllowOrigin::any());
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AllowOrigin::list(origins))
}
