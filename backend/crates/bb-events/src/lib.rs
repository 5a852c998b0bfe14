//! Post-commit domain events.
//!
//! Publishing is best effort: an event is handed to the broker once, on a
//! background task, after the state change it describes has been committed.
//! If the broker rejects it the failure is logged at `error` level and
//! counted, and the committed change stands ("mutation committed, event possibly lost"). Consumers therefore see
//! at most one copy per publish, but must still tolerate duplicates and
//! reordering because the broker itself gives no such guarantee.

pub mod broker;
pub mod broker_message;
pub mod error;
pub mod event_metrics;
pub mod event_publisher;
pub mod notification;
pub mod notification_listener;
pub mod order_events;

pub use broker::InMemoryBroker;
pub use broker_message::BrokerMessage;
pub use error::{EventError, Result};
pub use event_metrics::EventMetrics;
pub use event_publisher::EventPublisher;
pub use notification::Notification;
pub use notification_listener::NotificationListener;
pub use order_events::OrderEvents;
