use crate::Result as EventErrorResult;

use async_trait::async_trait;
use bytes::Bytes;

/// Hand-off point to a publish-subscribe broker.
///
/// Implementations may take as long as their broker needs to accept the
/// record, so request paths go through `OrderEvents::spawn_order_placed`
/// rather than awaiting `publish`. The return value is the number of live
/// subscribers that will see the record (0 is a success).
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, payload: Bytes) -> EventErrorResult<usize>;
}
