// src/bin/api_server.rs

use std::sync::Arc;
use netsis_panel::infra::config::Config;
use netsis_panel::transport;
use netsis_panel::DataService;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Configuration ---
    let config = Config::from_env();
    println!("> Mode: {:?}", config.mode);
    println!("> Netsis store: {}", config.netsis.summary());
    println!("> SenkronERP store: {}", config.senkron_fis.summary());

    // --- Service Initialization ---
    println!("> Initializing DataService...");
    let data_service = Arc::new(DataService::connect(&config).await);
    let app_state = transport::http::AppState { data_service: data_service.clone() };
    println!("> DataService initialized.");

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.api_port)).await?;
    println!("> API server listening on http://0.0.0.0:{}", config.api_port);
    println!("> Swagger UI available at http://localhost:{}/swagger-ui", config.api_port);
    println!("> Press Ctrl+C to shut down and close store connections");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C)...");
            data_service.close().await;
            println!("> Graceful shutdown complete.");
        }
    }

    Ok(())
}
