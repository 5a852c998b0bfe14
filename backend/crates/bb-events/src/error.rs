use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Failed to serialize event: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Broker unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl EventError {
    /// Short label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => "serialization",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

pub type Result<T> = std::result::Result<T, EventError>;
