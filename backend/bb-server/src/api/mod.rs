pub mod api_response;
pub mod error;
pub mod extractors;
pub mod orders;
pub mod restaurants;
pub mod validation;
