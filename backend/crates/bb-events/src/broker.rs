use crate::{BrokerMessage, EventPublisher, Result as EventErrorResult};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::{RwLock, broadcast};

/// Process-local topic broker built on broadcast channels.
///
/// Records published while a topic has no subscribers are dropped.
/// Subscribers that fall more than `capacity` records behind lose the oldest.
#[derive(Clone)]
pub struct InMemoryBroker {
    topics: Arc<RwLock<HashMap<String, broadcast::Sender<BrokerMessage>>>>,
    capacity: usize,
}

impl InMemoryBroker {
    pub fn new(capacity: usize) -> Self {
        Self {
            topics: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Subscribe to `topic`, creating it on first use
    pub async fn subscribe(&self, topic: &str) -> broadcast::Receiver<BrokerMessage> {
        let mut topics = self.topics.write().await;

        let sender = topics.entry(topic.to_string()).or_insert_with(|| {
            let (sender, _) = broadcast::channel(self.capacity);
            log::info!("Created broker topic '{}'", topic);
            sender
        });

        let receiver = sender.subscribe();
        log::debug!(
            "Subscribed to topic '{}' ({} subscribers)",
            topic,
            sender.receiver_count()
        );

        receiver
    }

    pub async fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .read()
            .await
            .get(topic)
            .map(broadcast::Sender::receiver_count)
            .unwrap_or(0)
    }
}

#[async_trait]
impl EventPublisher for InMemoryBroker {
    async fn publish(&self, topic: &str, payload: Bytes) -> EventErrorResult<usize> {
        let topics = self.topics.read().await;

        let Some(sender) = topics.get(topic) else {
            log::debug!("No subscribers for topic '{}'; record dropped", topic);
            return Ok(0);
        };

        let message = BrokerMessage {
            topic: topic.to_string(),
            payload,
        };

        match sender.send(message) {
            Ok(receivers) => {
                log::debug!("Published to topic '{}' ({} receivers)", topic, receivers);
                Ok(receivers)
            }
            Err(_) => {
                log::debug!("Topic '{}' had no active receivers", topic);
                Ok(0)
            }
        }
    }
}
