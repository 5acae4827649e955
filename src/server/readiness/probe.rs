//! Dependency probes used by the readiness gate.
//!
//! A probe performs exactly one reachability check against one dependency and reports a
//! [`ProbeOutcome`]. Probes never retry and never return errors; every failure mode is
//! folded into the outcome so the gate can treat all dependencies uniformly.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use sea_orm::{ConnectOptions, Database};

use crate::server::config::{DatabaseSettings, ServiceEndpoint};

pub const HEALTH_CHECK_USER_AGENT: &str = "Hackathon-Core-HealthCheck/1.0";

/// Result of probing a single dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Healthy,
    /// No response was received: connection refused, DNS failure or timeout.
    Unreachable { reason: String },
    /// A parameter required to reach the dependency is not configured.
    ConfigurationMissing { reason: String },
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable {
            reason: reason.into(),
        }
    }

    pub fn configuration_missing(reason: impl Into<String>) -> Self {
        Self::ConfigurationMissing {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Unreachable { reason } => write!(f, "unreachable: {}", reason),
            Self::ConfigurationMissing { reason } => {
                write!(f, "configuration missing: {}", reason)
            }
        }
    }
}

/// A single reachability check against one external dependency.
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// Identifier used in logs, e.g. `"identity-service"`.
    fn name(&self) -> &str;

    async fn probe(&self) -> ProbeOutcome;
}

/// Probes a sibling HTTP service by issuing a GET to its health path.
///
/// Reachability is all that matters: any HTTP response, including 4xx and 5xx, is
/// reported as healthy. Only the absence of a response counts as a failure.
pub struct HttpProbe {
    name: String,
    endpoint: ServiceEndpoint,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpProbe {
    /// Creates a probe for the given endpoint.
    ///
    /// # Arguments
    /// - `name` - Dependency identifier used in logs
    /// - `endpoint` - Base URL and health path of the service
    /// - `timeout` - Upper bound for the whole request
    /// - `client` - Shared HTTP client; it should not follow redirects so that a 3xx
    ///   counts as a response
    pub fn new(
        name: impl Into<String>,
        endpoint: ServiceEndpoint,
        timeout: Duration,
        client: reqwest::Client,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint,
            timeout,
            client,
        }
    }
}

#[async_trait]
impl DependencyProbe for HttpProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self) -> ProbeOutcome {
        let Some(target) = self.endpoint.health_url() else {
            return ProbeOutcome::configuration_missing(format!(
                "{} not configured",
                self.endpoint.url_var
            ));
        };

        let response = self
            .client
            .get(&target)
            .timeout(self.timeout)
            .header(USER_AGENT, HEALTH_CHECK_USER_AGENT)
            .send()
            .await;

        match response {
            Ok(response) => {
                tracing::debug!(
                    dependency = %self.name,
                    status = %response.status(),
                    "Health endpoint responded"
                );
                ProbeOutcome::Healthy
            }
            Err(err) if err.is_timeout() => ProbeOutcome::unreachable(format!(
                "no response from {} within {}ms",
                target,
                self.timeout.as_millis()
            )),
            Err(err) => ProbeOutcome::unreachable(format!("{} unreachable: {}", target, err)),
        }
    }
}

/// Probes the relational database.
///
/// By default only validates that host, port and database name are configured, without
/// opening a connection. When `connect_on_probe` is set it additionally connects and
/// pings the server within the probe timeout.
pub struct DatabaseProbe {
    settings: DatabaseSettings,
    timeout: Duration,
}

impl DatabaseProbe {
    pub fn new(settings: DatabaseSettings, timeout: Duration) -> Self {
        Self { settings, timeout }
    }

    async fn ping(&self, url: String) -> Result<(), String> {
        let mut opt = ConnectOptions::new(url);
        opt.connect_timeout(self.timeout)
            .max_connections(1)
            .sqlx_logging(false);

        let connect = async {
            let db = Database::connect(opt).await?;
            db.ping().await?;
            db.close().await
        };

        match tokio::time::timeout(self.timeout, connect).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(_) => Err(format!(
                "no response within {}ms",
                self.timeout.as_millis()
            )),
        }
    }
}

#[async_trait]
impl DependencyProbe for DatabaseProbe {
    fn name(&self) -> &str {
        "database"
    }

    async fn probe(&self) -> ProbeOutcome {
        let url = match self.settings.url() {
            Ok(url) => url,
            Err(_) => {
                return ProbeOutcome::configuration_missing(format!(
                    "Database configuration incomplete, missing {}",
                    self.settings.missing_fields().join(", ")
                ))
            }
        };

        if !self.settings.connect_on_probe {
            return ProbeOutcome::Healthy;
        }

        match self.ping(url).await {
            Ok(()) => ProbeOutcome::Healthy,
            Err(reason) => ProbeOutcome::unreachable(format!("database ping failed: {}", reason)),
        }
    }
}
