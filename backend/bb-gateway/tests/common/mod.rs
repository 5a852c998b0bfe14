#![allow(dead_code)]

//! Test infrastructure for bb-gateway edge tests

use bb_auth::{AuthError, Claims, JwtIssuer, JwtValidator, TokenVerifier};
use bb_config::RouteConfig;
use bb_gateway::{GatewayState, RouteTable};

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::HeaderMap;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const SECRET: &[u8] = b"gateway-test-secret-at-least-32-bytes!";

/// Verifier wrapper that counts how often it is consulted
pub struct CountingVerifier {
    inner: JwtValidator,
    calls: AtomicUsize,
}

impl CountingVerifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: JwtValidator::with_hs256(SECRET),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenVerifier for CountingVerifier {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify(token)
    }
}

/// Upstream stub that echoes what it received
pub struct Upstream {
    pub addr: SocketAddr,
    pub hits: Arc<AtomicUsize>,
}

impl Upstream {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn header(headers: &HeaderMap, name: &str) -> Value {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

pub async fn spawn_upstream() -> Upstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new().fallback(
        move |method: axum::http::Method,
              uri: axum::http::Uri,
              headers: HeaderMap,
              body: String| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "method": method.as_str(),
                    "uri": uri.to_string(),
                    "body": body,
                    "userId": header(&headers, "x-user-id"),
                    "userRole": header(&headers, "x-user-role"),
                    "userEmail": header(&headers, "x-user-email"),
                    "authorization": header(&headers, "authorization"),
                }))
            }
        },
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream { addr, hits }
}

/// Address that refuses connections
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn state_for(
    upstream_url: &str,
    public_url: &str,
    verifier: Arc<dyn TokenVerifier>,
) -> GatewayState {
    let routes = RouteTable::from_config(&[
        RouteConfig::new("/auth", public_url, false),
        RouteConfig::new("/api/orders", upstream_url, true),
        RouteConfig::new("/api/restaurants", upstream_url, true),
    ]);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    GatewayState::new(routes, verifier, client)
}

pub fn token(user_id: i64, role: &str, email: &str) -> String {
    JwtIssuer::with_hs256(SECRET, Duration::from_secs(600))
        .issue(user_id, role, email)
        .unwrap()
}
