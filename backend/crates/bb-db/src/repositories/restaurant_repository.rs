use crate::{DbError, Result as DbErrorResult};

use bb_core::{MenuItem, Restaurant, RestaurantStatus};

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Replacement values for an existing menu item
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Default)]
struct Tables {
    restaurants: BTreeMap<i64, Restaurant>,
    menu_items: BTreeMap<i64, MenuItem>,
    next_restaurant_id: i64,
    next_menu_item_id: i64,
}

#[derive(Clone, Default)]
pub struct RestaurantRepository {
    tables: Arc<RwLock<Tables>>,
}

impl RestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a restaurant, assigning its id
    pub async fn create(&self, mut restaurant: Restaurant) -> DbErrorResult<Restaurant> {
        let mut tables = self.tables.write().await;
        tables.next_restaurant_id += 1;
        restaurant.id = tables.next_restaurant_id;

        tables
            .restaurants
            .insert(restaurant.id, restaurant.clone());

        log::debug!(
            "Created restaurant {} owned by user {}",
            restaurant.id,
            restaurant.owner_id
        );
        Ok(restaurant)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Restaurant>> {
        Ok(self.tables.read().await.restaurants.get(&id).cloned())
    }

    /// All restaurants ordered by id
    pub async fn find_all(&self) -> DbErrorResult<Vec<Restaurant>> {
        Ok(self
            .tables
            .read()
            .await
            .restaurants
            .values()
            .cloned()
            .collect())
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: RestaurantStatus,
    ) -> DbErrorResult<Restaurant> {
        let mut tables = self.tables.write().await;

        let restaurant = tables
            .restaurants
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("Restaurant", id))?;

        restaurant.status = status;
        Ok(restaurant.clone())
    }

    /// Insert a menu item under an existing restaurant, assigning its id
    pub async fn add_menu_item(&self, mut item: MenuItem) -> DbErrorResult<MenuItem> {
        let mut tables = self.tables.write().await;

        if !tables.restaurants.contains_key(&item.restaurant_id) {
            return Err(DbError::integrity(format!(
                "restaurant {} does not exist",
                item.restaurant_id
            )));
        }

        tables.next_menu_item_id += 1;
        item.id = tables.next_menu_item_id;
        tables.menu_items.insert(item.id, item.clone());

        Ok(item)
    }

    /// Replace a menu item's fields; the item must belong to `restaurant_id`
    pub async fn update_menu_item(
        &self,
        restaurant_id: i64,
        item_id: i64,
        update: MenuItemUpdate,
    ) -> DbErrorResult<MenuItem> {
        let mut tables = self.tables.write().await;

        let item = tables
            .menu_items
            .get_mut(&item_id)
            .filter(|item| item.restaurant_id == restaurant_id)
            .ok_or_else(|| DbError::not_found("Menu item", item_id))?;

        item.name = update.name;
        item.description = update.description;
        item.price = update.price;

        Ok(item.clone())
    }

    pub async fn find_menu(&self, restaurant_id: i64) -> DbErrorResult<Vec<MenuItem>> {
        Ok(self
            .tables
            .read()
            .await
            .menu_items
            .values()
            .filter(|item| item.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }
}
