pub mod order_dto;
#[allow(clippy::module_inception)]
pub mod orders;
pub mod place_order_request;
