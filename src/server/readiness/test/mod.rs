use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;

use crate::server::{
    config::{DatabaseSettings, ServiceEndpoint},
    readiness::{
        probe::{DatabaseProbe, DependencyProbe, HttpProbe, ProbeOutcome},
        ReadinessGate,
    },
    test_support,
};


/// Probe returning a scripted outcome per call, repeating the last one once exhausted.
struct ScriptedProbe {
    name: &'static str,
    outcomes: Vec<ProbeOutcome>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    fn new(name: &'static str, outcomes: Vec<ProbeOutcome>) -> Arc<Self> {
        Arc::new(Self {
            name,
            outcomes,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    fn healthy(name: &'static str) -> Arc<Self> {
        Self::new(name, vec![ProbeOutcome::Healthy])
    }

    /// Probe that takes `delay` to answer, mimicking a slow dependency.
    fn slow(name: &'static str, outcome: ProbeOutcome, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            name,
            outcomes: vec![outcome],
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DependencyProbe for ScriptedProbe {
    fn name(&self) -> &str {
        self.name
    }

    async fn probe(&self) -> ProbeOutcome {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let index = call.min(self.outcomes.len() - 1);
        self.outcomes[index].clone()
    }
}

/// Probe that panics, standing in for a probe implementation bug.
struct PanickingProbe;

#[async_trait]
impl DependencyProbe for PanickingProbe {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn probe(&self) -> ProbeOutcome {
        panic!("probe exploded");
    }
}

fn gate_of(probes: Vec<Arc<dyn DependencyProbe>>) -> ReadinessGate {
    ReadinessGate::new(probes)
}

fn complete_database() -> DatabaseSettings {
    DatabaseSettings {
        host: Some("localhost".to_string()),
        port: Some("5432".to_string()),
        name: Some("hackathon".to_string()),
        username: Some("core".to_string()),
        password: Some("secret".to_string()),
        connect_on_probe: false,
    }
}

fn endpoint(base_url: Option<String>, health_path: &str) -> ServiceEndpoint {
    ServiceEndpoint {
        url_var: "AUTH_SERVICE_URL",
        base_url,
        health_path: health_path.to_string(),
    }
}

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
