use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::errors::ApiError;
use super::handlers::{customers, health};
use crate::config::AppConfig;
use crate::mediator::{DispatchError, Mediator};

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub mediator: Mediator,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(mediator: Mediator, config: AppConfig) -> Self {
        Self {
            mediator,
            config: Arc::new(config),
        }
    }

    pub(crate) fn fault(&self, err: DispatchError) -> ApiError {
        ApiError::from_dispatch(err, self.config.is_development())
    }
}

/// Builds the HTTP router with all routes and middleware
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Customer routes
        .route(
            "/customers",
            get(customers::list_customers).post(customers::add_customer),
        )
        .route(
            "/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
