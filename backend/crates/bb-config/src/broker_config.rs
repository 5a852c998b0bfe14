use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CHANNEL_CAPACITY, DEFAULT_ORDER_TOPIC,
    MAX_CHANNEL_CAPACITY, MIN_CHANNEL_CAPACITY,
};

use serde::Deserialize;

/// In-process event broker settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    pub order_topic: String,
    /// Buffered events per topic before slow subscribers start lagging
    pub channel_capacity: usize,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            order_topic: String::from(DEFAULT_ORDER_TOPIC),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl BrokerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.order_topic.trim().is_empty() {
            return Err(ConfigError::broker("broker.order_topic must not be empty"));
        }

        if !(MIN_CHANNEL_CAPACITY..=MAX_CHANNEL_CAPACITY).contains(&self.channel_capacity) {
            return Err(ConfigError::broker(format!(
                "broker.channel_capacity must be {}-{}, got {}",
                MIN_CHANNEL_CAPACITY, MAX_CHANNEL_CAPACITY, self.channel_capacity
            )));
        }

        Ok(())
    }
}
