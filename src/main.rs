use std::process::ExitCode;
use std::sync::Arc;

use customers_api::api::{router, AppState};
use customers_api::application::{build_mediator, verify_bindings};
use customers_api::config::AppConfig;
use customers_api::infrastructure::DbContext;
use customers_api::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing
    telemetry::init(config.log_format);

    // Wire the store and the mediator; a bad binding aborts startup
    let context = Arc::new(DbContext::new());
    let mediator = match build_mediator(context).and_then(|mediator| {
        verify_bindings(&mediator)?;
        Ok(mediator)
    }) {
        Ok(mediator) => mediator,
        Err(e) => {
            tracing::error!(error = %e, "Handler registration failed");
            return ExitCode::FAILURE;
        }
    };

    let addr = config.bind_addr();
    let app = router(AppState::new(mediator, config));

    // Start server
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind address");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
