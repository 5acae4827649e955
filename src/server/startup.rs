use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError, readiness::ReadinessGate};

/// Installs the global `tracing` subscriber.
///
/// Log filtering comes from `RUST_LOG` and falls back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the HTTP client used by the readiness probes.
///
/// Redirects are not followed so a redirect response counts as the dependency answering.
/// Per-request timeouts are set by each probe.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Probes every dependency until all are healthy or the attempts run out.
///
/// # Returns
/// - `true` - All dependencies were healthy in the same attempt
/// - `false` - Still unhealthy after `STARTUP_MAX_ATTEMPTS` attempts
pub async fn wait_for_dependencies(config: &Config, client: reqwest::Client) -> bool {
    let settings = config.startup;

    tracing::info!(
        max_attempts = settings.max_attempts,
        retry_delay_ms = settings.retry_delay.as_millis() as u64,
        "Checking external dependencies"
    );

    ReadinessGate::from_config(config, client)
        .wait_for_services(settings.max_attempts, settings.retry_delay)
        .await
}

/// Connects to the PostgreSQL database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the `DB_*` settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::ConfigErr)` - A required database setting is missing
/// - `Err(AppError::DbErr)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(config.database.url()?);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
