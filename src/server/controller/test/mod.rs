use std::{collections::HashMap, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use entity::hackathon::HackathonStatus;
use sea_orm::DbErr;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    config::Config,
    router,
    service::identity::IdentityClient,
    state::AppState,
    test_support::{self, ADMIN_ID},
};


const API_KEY: &str = "test-key";

/// Application router backed by an in-memory database and a stand-in identity service.
struct TestApp {
    router: Router,
    test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_env(&[]).await
    }

    /// Builds the app with extra environment entries on top of the defaults.
    async fn with_env(extra: &[(&str, &str)]) -> Self {
        let test = TestBuilder::new()
            .with_hackathon_tables()
            .build()
            .await
            .unwrap();

        let identity_url = test_support::serve_identity_service().await;
        let mut env: HashMap<String, String> = HashMap::from([
            ("AUTH_SERVICE_URL".to_string(), identity_url),
            ("API_KEYS".to_string(), API_KEY.to_string()),
        ]);
        for (key, value) in extra {
            env.insert(key.to_string(), value.to_string());
        }

        let config = Config::from_lookup(|key| env.get(key).cloned()).unwrap();
        let identity =
            IdentityClient::new(IdentityClient::build_http_client().unwrap(), &config.identity);
        let db = test.db.clone().unwrap();

        Self {
            router: router::router(AppState::new(db, identity, Arc::new(config))),
            test,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Sends a request carrying the API key and, when given, an admin token.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-api-key", API_KEY);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        self.raw(request).await
    }

    async fn raw(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }
}

fn admin_id() -> Uuid {
    Uuid::parse_str(ADMIN_ID).unwrap()
}
