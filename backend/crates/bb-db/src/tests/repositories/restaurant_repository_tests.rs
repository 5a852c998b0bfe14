use crate::{DbError, MenuItemUpdate, RestaurantRepository};

use bb_core::{MenuItem, Restaurant, RestaurantStatus};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

async fn seeded() -> (RestaurantRepository, Restaurant) {
    let repo = RestaurantRepository::new();
    let restaurant = repo
        .create(Restaurant::new("Chez Kofi", "West African", "Accra", 7))
        .await
        .unwrap();
    (repo, restaurant)
}

#[tokio::test]
async fn given_new_restaurants_when_created_then_ids_assigned_sequentially() {
    let repo = RestaurantRepository::new();

    let first = repo
        .create(Restaurant::new("A", "a", "x", 1))
        .await
        .unwrap();
    let second = repo
        .create(Restaurant::new("B", "b", "y", 2))
        .await
        .unwrap();

    assert_that!(first.id, eq(1));
    assert_that!(second.id, eq(2));
    assert_that!(repo.find_all().await.unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_created_restaurant_when_found_then_pending_and_owned() {
    let (repo, created) = seeded().await;

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_that!(found.status, eq(RestaurantStatus::Pending));
    assert!(found.is_owned_by(7));
    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn given_existing_restaurant_when_status_updated_then_persisted() {
    let (repo, created) = seeded().await;

    let updated = repo
        .update_status(created.id, RestaurantStatus::Active)
        .await
        .unwrap();

    assert_that!(updated.status, eq(RestaurantStatus::Active));
    assert_that!(
        repo.find_by_id(created.id).await.unwrap().unwrap().status,
        eq(RestaurantStatus::Active)
    );
}

#[tokio::test]
async fn given_missing_restaurant_when_status_updated_then_not_found() {
    let repo = RestaurantRepository::new();

    let result = repo.update_status(5, RestaurantStatus::Active).await;

    assert!(matches!(result, Err(DbError::NotFound { id: 5, .. })));
}

#[tokio::test]
async fn given_menu_items_when_listed_then_scoped_to_restaurant() {
    let (repo, created) = seeded().await;
    let other = repo
        .create(Restaurant::new("Other", "o", "z", 8))
        .await
        .unwrap();

    repo.add_menu_item(MenuItem::new(created.id, "Jollof", "Rice", 12.5))
        .await
        .unwrap();
    repo.add_menu_item(MenuItem::new(other.id, "Waakye", "Beans", 9.0))
        .await
        .unwrap();

    let menu = repo.find_menu(created.id).await.unwrap();

    assert_that!(menu.len(), eq(1));
    assert_eq!(menu[0].name, "Jollof");
}

#[tokio::test]
async fn given_unknown_restaurant_when_adding_menu_item_then_integrity_error() {
    let repo = RestaurantRepository::new();

    let result = repo
        .add_menu_item(MenuItem::new(42, "Ghost", "Nothing", 1.0))
        .await;

    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_menu_item_when_updated_through_wrong_restaurant_then_not_found() {
    let (repo, created) = seeded().await;
    let item = repo
        .add_menu_item(MenuItem::new(created.id, "Jollof", "Rice", 12.5))
        .await
        .unwrap();
    let update = MenuItemUpdate {
        name: "Jollof Deluxe".to_string(),
        description: "Rice and chicken".to_string(),
        price: 15.0,
    };

    let wrong = repo
        .update_menu_item(created.id + 1, item.id, update.clone())
        .await;
    let right = repo.update_menu_item(created.id, item.id, update).await;

    assert!(matches!(wrong, Err(DbError::NotFound { .. })));
    assert_that!(right, ok(anything()));
    let menu = repo.find_menu(created.id).await.unwrap();
    assert_eq!(menu[0].name, "Jollof Deluxe");
}
