use crate::{BrokerMessage, EventMetrics, Notification};

use bb_core::{OrderPlacedEvent, OrderStatus};

use std::collections::{HashSet, VecDeque};

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// How many recent deliveries are remembered for de-duplication
const DEDUPE_WINDOW: usize = 10_000;

/// Idempotent consumer of order events.
///
/// Redelivery of the same `(orderId, status)` is dropped, so a replayed event
/// never produces a second notification. Events may arrive in any order.
pub struct NotificationListener {
    seen: HashSet<(i64, OrderStatus)>,
    order: VecDeque<(i64, OrderStatus)>,
    metrics: EventMetrics,
}

impl Default for NotificationListener {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationListener {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            order: VecDeque::new(),
            metrics: EventMetrics::new(),
        }
    }

    /// Handle one payload; returns the notification if one should be sent
    pub fn handle(&mut self, payload: &[u8]) -> Option<Notification> {
        let event: OrderPlacedEvent = match serde_json::from_slice(payload) {
            Ok(event) => event,
            Err(e) => {
                self.metrics.malformed();
                log::warn!("Discarding malformed order event: {e}");
                return None;
            }
        };

        self.metrics.consumed();
        log::info!("Received order event: {:?}", event);

        let key = (event.order_id, event.status);
        if !self.remember(key) {
            self.metrics.duplicate_dropped();
            log::debug!(
                "Dropping duplicate event for order {} ({})",
                event.order_id,
                event.status
            );
            return None;
        }

        let notification = Notification::order_placed(&event);
        log::info!("{}: {}", notification.subject, notification.body);
        Some(notification)
    }

    /// Consume until the topic closes
    pub async fn run(mut self, mut receiver: broadcast::Receiver<BrokerMessage>) {
        loop {
            match receiver.recv().await {
                Ok(message) => {
                    self.handle(&message.payload);
                }
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Notification listener lagged; {} events skipped", skipped);
                }
                Err(RecvError::Closed) => {
                    log::info!("Order event topic closed; notification listener stopping");
                    break;
                }
            }
        }
    }

    fn remember(&mut self, key: (i64, OrderStatus)) -> bool {
        if !self.seen.insert(key) {
            return false;
        }

        self.order.push_back(key);
        if self.order.len() > DEDUPE_WINDOW
            && let Some(oldest) = self.order.pop_front()
        {
            self.seen.remove(&oldest);
        }

        true
    }
}
