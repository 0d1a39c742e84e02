//! Shared setup for HTTP tests: a router over a fresh in-memory store, and a
//! helper that sends one request and decodes the JSON reply.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use burmuda::{
    AppState, Config,
    config::{NotificationConfig, ObservabilityConfig, ServerConfig},
};
use burmuda_notification::EmailConfig;
use burmuda_submission::{Command, Query, Store};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Store,
    pub query: Query,
}

pub fn test_config(public_dir: Option<PathBuf>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_dir,
        },
        observability: ObservabilityConfig::default(),
        email: EmailConfig::default(),
        notification: NotificationConfig::default(),
    }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config(None))
}

pub fn setup_test_app_with(config: Config) -> TestApp {
    let store = Store::default();
    let query = Query(store.clone());
    let router = burmuda::router(AppState {
        config,
        command: Command::new(store.clone()),
        query: query.clone(),
    });

    TestApp {
        router,
        store,
        query,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Body>,
    ) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }

        let response = self
            .router
            .clone()
            .oneshot(request.body(body.unwrap_or_else(Body::empty))?)
            .await?;

        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();

        Ok((status, bytes.to_vec()))
    }

    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let (status, bytes) = self
            .send(method, uri, body.map(|b| Body::from(b.to_string())))
            .await?;

        Ok((status, serde_json::from_slice(&bytes)?))
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.json("POST", uri, Some(body)).await
    }

    pub async fn get_json(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.json("GET", uri, None).await
    }

    pub async fn put_json(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.json("PUT", uri, None).await
    }

    /// Posts a valid contact form and returns the new submission id.
    pub async fn submit_contact(&self, name: &str) -> anyhow::Result<String> {
        let (status, body) = self
            .post_json(
                "/api/contact",
                serde_json::json!({
                    "name": name,
                    "email": format!("{name}@burmuda.localhost"),
                    "service": "website",
                    "message": "hi",
                }),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::OK, "contact rejected: {body}");

        Ok(body["submissionId"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("missing submissionId"))?
            .to_owned())
    }

    /// Posts a valid consultation request and returns the new submission id.
    pub async fn submit_consultation(&self, name: &str) -> anyhow::Result<String> {
        let (status, body) = self
            .post_json(
                "/api/consultation",
                serde_json::json!({
                    "name": name,
                    "email": format!("{name}@burmuda.localhost"),
                    "phone": "+1 555 0100",
                    "projectType": "ecommerce",
                    "message": "Let's talk",
                }),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::OK, "consultation rejected: {body}");

        Ok(body["submissionId"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("missing submissionId"))?
            .to_owned())
    }
}
