pub mod order_repository;
pub mod restaurant_repository;
