use sea_orm::Database;
use tracing::info;

use chirp_api::config::ApiConfig;
use chirp_api::router::build_router;
use chirp_api::state::AppState;

#[tokio::main]
async fn main() {
    chirp_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        media_root: config.media_root,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
