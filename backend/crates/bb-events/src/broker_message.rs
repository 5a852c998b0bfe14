use bytes::Bytes;

/// One record on a topic: the topic name plus the JSON payload as sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerMessage {
    pub topic: String,
    pub payload: Bytes,
}
