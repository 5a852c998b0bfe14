mod order_repository_tests;
mod restaurant_repository_tests;
