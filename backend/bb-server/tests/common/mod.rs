#![allow(dead_code)]

//! Test infrastructure for bb-server API tests

use bb_auth::{HeaderTrust, TrustZone};
use bb_core::{MenuItem, Restaurant};
use bb_db::{OrderRepository, RestaurantRepository};
use bb_config::DEFAULT_ORDER_TOPIC;
use bb_events::{BrokerMessage, EventError, EventPublisher, InMemoryBroker, OrderEvents};
use bb_server::AppState;

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
};
use bytes::Bytes;
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::broadcast;

pub const CUSTOMER_ID: i64 = 42;
pub const OWNER_ID: i64 = 7;
pub const OTHER_OWNER_ID: i64 = 8;
pub const ADMIN_ID: i64 = 1;

/// Caller identity as the gateway would mint it
#[derive(Clone, Copy)]
pub struct As<'a> {
    pub user_id: &'a str,
    pub role: &'a str,
}

pub fn customer() -> As<'static> {
    As {
        user_id: "42",
        role: "CUSTOMER",
    }
}

pub fn owner() -> As<'static> {
    As {
        user_id: "7",
        role: "OWNER",
    }
}

pub fn other_owner() -> As<'static> {
    As {
        user_id: "8",
        role: "ROLE_RESTAURANT_OWNER",
    }
}

pub fn admin() -> As<'static> {
    As {
        user_id: "1",
        role: "ADMIN",
    }
}

/// App state trusting headers from any peer, plus a subscription to order events
pub async fn create_test_app_state() -> (AppState, broadcast::Receiver<BrokerMessage>) {
    create_test_app_state_in(TrustZone::Any).await
}

pub async fn create_test_app_state_in(
    zone: TrustZone,
) -> (AppState, broadcast::Receiver<BrokerMessage>) {
    let broker = InMemoryBroker::new(16);
    let receiver = broker.subscribe(DEFAULT_ORDER_TOPIC).await;

    (app_state_with(Arc::new(broker), zone), receiver)
}

fn app_state_with(publisher: Arc<dyn EventPublisher>, zone: TrustZone) -> AppState {
    AppState::new(
        RestaurantRepository::new(),
        OrderRepository::new(),
        OrderEvents::new(publisher, DEFAULT_ORDER_TOPIC),
        HeaderTrust::new(zone),
    )
}

/// Wait for the next order event, which is published off the request path
pub async fn next_event(receiver: &mut broadcast::Receiver<BrokerMessage>) -> BrokerMessage {
    tokio::time::timeout(Duration::from_secs(2), receiver.recv())
        .await
        .expect("no order event within 2s")
        .expect("order topic closed")
}

/// Publisher that refuses every record
pub struct UnavailableBroker {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl EventPublisher for UnavailableBroker {
    async fn publish(&self, _topic: &str, _payload: Bytes) -> bb_events::Result<usize> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(EventError::Unavailable {
            message: "broker down".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl UnavailableBroker {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Wait until the background publish has been attempted at least once
    pub async fn wait_for_attempt(&self) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while self.attempts() == 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("publish never attempted");
    }
}

/// Publisher that accepts every record only after `delay`
pub struct SlowAckBroker {
    pub delay: Duration,
    pub acked: AtomicBool,
}

#[async_trait]
impl EventPublisher for SlowAckBroker {
    async fn publish(&self, _topic: &str, _payload: Bytes) -> bb_events::Result<usize> {
        tokio::time::sleep(self.delay).await;
        self.acked.store(true, Ordering::SeqCst);
        Ok(1)
    }
}

/// App state whose event broker takes `delay` to acknowledge
pub fn create_test_app_state_with_slow_broker(delay: Duration) -> (AppState, Arc<SlowAckBroker>) {
    let broker = Arc::new(SlowAckBroker {
        delay,
        acked: AtomicBool::new(false),
    });

    (app_state_with(broker.clone(), TrustZone::Any), broker)
}

/// App state whose event broker is down
pub fn create_test_app_state_with_broken_broker() -> (AppState, Arc<UnavailableBroker>) {
    let broker = Arc::new(UnavailableBroker {
        attempts: AtomicUsize::new(0),
    });

    (app_state_with(broker.clone(), TrustZone::Any), broker)
}

/// Create a restaurant directly in the repository
pub async fn create_test_restaurant(state: &AppState, owner_id: i64) -> Restaurant {
    state
        .restaurants
        .create(Restaurant::new("Chop Bar", "Local dishes", "Kumasi", owner_id))
        .await
        .expect("Failed to create test restaurant")
}

pub async fn create_test_menu_item(state: &AppState, restaurant_id: i64) -> MenuItem {
    state
        .restaurants
        .add_menu_item(MenuItem::new(restaurant_id, "Fufu", "With light soup", 35.0))
        .await
        .expect("Failed to create test menu item")
}

/// Build a request, optionally carrying trusted identity headers and a JSON body
pub fn request(
    method: &str,
    uri: &str,
    caller: Option<As<'_>>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(caller) = caller {
        builder = builder
            .header("X-User-Id", caller.user_id)
            .header("X-User-Role", caller.role)
            .header("X-User-Email", "test@bytebites.io");
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
