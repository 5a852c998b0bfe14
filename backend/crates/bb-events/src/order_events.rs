use crate::{EventError, EventMetrics, EventPublisher, Result as EventErrorResult};

use bb_core::{Order, OrderPlacedEvent};

use std::panic::Location;
use std::sync::Arc;

use bytes::Bytes;
use error_location::ErrorLocation;
use tokio::task::JoinHandle;

/// Publishes order lifecycle events after the order is committed
#[derive(Clone)]
pub struct OrderEvents {
    publisher: Arc<dyn EventPublisher>,
    topic: String,
    metrics: EventMetrics,
}

impl OrderEvents {
    pub fn new(publisher: Arc<dyn EventPublisher>, topic: impl Into<String>) -> Self {
        Self {
            publisher,
            topic: topic.into(),
            metrics: EventMetrics::new(),
        }
    }

    /// Hand `OrderPlacedEvent` for a committed order to a background task.
    ///
    /// Returns at once; the caller never waits for the broker.
    pub fn spawn_order_placed(&self, order: Order) -> JoinHandle<()> {
        let events = self.clone();
        tokio::spawn(async move { events.order_placed(&order).await })
    }

    /// Emit `OrderPlacedEvent` for a committed order.
    ///
    /// Exactly one attempt. Failure is logged and counted, never returned:
    /// the order has already been committed and stays committed.
    pub async fn order_placed(&self, order: &Order) {
        match self.try_order_placed(order).await {
            Ok(receivers) => {
                self.metrics.published(&self.topic);
                log::info!(
                    "Published order {} to '{}' ({} receivers)",
                    order.id,
                    self.topic,
                    receivers
                );
            }
            Err(e) => {
                self.metrics.publish_failed(&self.topic, e.kind());
                log::error!(
                    "Order {} committed but its event was lost on '{}': {}",
                    order.id,
                    self.topic,
                    e
                );
            }
        }
    }

    /// Single publish attempt, surfacing the failure
    pub async fn try_order_placed(&self, order: &Order) -> EventErrorResult<usize> {
        let event = OrderPlacedEvent::from(order);
        let payload = serialize(&event)?;
        self.publisher.publish(&self.topic, payload).await
    }
}

#[track_caller]
fn serialize(event: &OrderPlacedEvent) -> EventErrorResult<Bytes> {
    serde_json::to_vec(event)
        .map(Bytes::from)
        .map_err(|e| EventError::Serialization {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
