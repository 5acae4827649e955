mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, error::AppError, router, service::identity::IdentityClient, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let probe_client = startup::setup_reqwest_client()?;
    if !startup::wait_for_dependencies(&config, probe_client).await {
        tracing::error!("Required dependencies are unavailable, aborting startup");
        std::process::exit(1);
    }

    let db = startup::connect_to_database(&config).await?;
    let identity = IdentityClient::new(IdentityClient::build_http_client()?, &config.identity);

    let port = config.port;
    let app = router::router(AppState::new(db, identity, Arc::new(config)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Starting server on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
