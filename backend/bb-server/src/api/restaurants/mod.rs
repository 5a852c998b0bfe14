pub mod create_restaurant_request;
pub mod menu_item_dto;
pub mod menu_item_request;
pub mod restaurant_dto;
#[allow(clippy::module_inception)]
pub mod restaurants;
pub mod update_status_request;
