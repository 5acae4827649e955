//! Attempt loop of the readiness gate.
//!
//! One attempt fans the probes out as tokio tasks and folds their outcomes into a single
//! verdict; attempts repeat after a fixed delay until one succeeds or the budget runs out.

use std::{sync::Arc, time::Duration};

use crate::server::{
    config::Config,
    readiness::probe::{DatabaseProbe, DependencyProbe, HttpProbe, ProbeOutcome},
};

/// Outcome of one probe within a single attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCheck {
    pub name: String,
    pub outcome: ProbeOutcome,
}

/// Decides whether the server may start accepting traffic.
///
/// Holds the set of dependency probes and runs them as attempts. Within an attempt all
/// probes run concurrently as independent tasks; a failing or panicking probe is captured
/// as `Unreachable` and never cancels its siblings. Attempts are retried with a fixed delay.
#[derive(Clone)]
pub struct ReadinessGate {
    probes: Vec<Arc<dyn DependencyProbe>>,
}

impl ReadinessGate {
    pub fn new(probes: Vec<Arc<dyn DependencyProbe>>) -> Self {
        Self { probes }
    }

    /// Builds the gate for the identity service, the notification service and the database.
    ///
    /// # Arguments
    /// - `config` - Application configuration carrying endpoints and probe timeout
    /// - `client` - HTTP client shared by the network probes
    pub fn from_config(config: &Config, client: reqwest::Client) -> Self {
        let timeout = config.startup.probe_timeout;

        Self::new(vec![
            Arc::new(HttpProbe::new(
                "identity-service",
                config.identity.clone(),
                timeout,
                client.clone(),
            )),
            Arc::new(HttpProbe::new(
                "notification-service",
                config.notification.clone(),
                timeout,
                client,
            )),
            Arc::new(DatabaseProbe::new(config.database.clone(), timeout)),
        ])
    }

    /// Runs every probe once, concurrently, and returns each outcome in declaration order.
    pub async fn run_attempt(&self) -> Vec<DependencyCheck> {
        let handles: Vec<_> = self
            .probes
            .iter()
            .map(|probe| {
                let probe = Arc::clone(probe);
                tokio::spawn(async move { probe.probe().await })
            })
            .collect();

        let mut checks = Vec::with_capacity(handles.len());
        for (probe, handle) in self.probes.iter().zip(handles) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(err) => ProbeOutcome::unreachable(format!("probe task failed: {}", err)),
            };

            match &outcome {
                ProbeOutcome::Healthy => {
                    tracing::info!(dependency = probe.name(), "Dependency healthy");
                }
                unhealthy => {
                    tracing::error!(
                        dependency = probe.name(),
                        reason = %unhealthy,
                        "Dependency unhealthy"
                    );
                }
            }

            checks.push(DependencyCheck {
                name: probe.name().to_string(),
                outcome,
            });
        }

        checks
    }

    /// Runs one attempt and reports whether every dependency was healthy.
    pub async fn check_all(&self) -> bool {
        let all_healthy = self
            .run_attempt()
            .await
            .iter()
            .all(|check| check.outcome.is_healthy());

        if all_healthy {
            tracing::info!("All external dependencies are healthy");
        } else {
            tracing::error!("Some external dependencies are unhealthy");
        }

        all_healthy
    }

    /// Waits until every dependency is healthy in the same attempt.
    ///
    /// Performs at most `max_attempts` attempts, sleeping `retry_delay` between
    /// consecutive failed attempts. Returns as soon as an attempt succeeds and never
    /// sleeps after the final attempt. Never errors; `false` means not ready.
    pub async fn wait_for_services(&self, max_attempts: u32, retry_delay: Duration) -> bool {
        for attempt in 1..=max_attempts {
            tracing::info!("Health check attempt {}/{}", attempt, max_attempts);

            if self.check_all().await {
                return true;
            }

            if attempt < max_attempts {
                tracing::warn!("Retrying in {}ms", retry_delay.as_millis());
                tokio::time::sleep(retry_delay).await;
            }
        }

        false
    }
}
