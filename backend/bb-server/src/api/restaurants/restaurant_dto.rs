use crate::MenuItemDto;

use bb_core::{MenuItem, Restaurant, RestaurantStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Restaurant as returned to API clients, with its menu
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub owner_id: i64,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub status: RestaurantStatus,
    pub created_at: DateTime<Utc>,
    pub menu_items: Vec<MenuItemDto>,
}

impl RestaurantDto {
    pub fn new(restaurant: Restaurant, menu: Vec<MenuItem>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            description: restaurant.description,
            location: restaurant.location,
            owner_id: restaurant.owner_id,
            email: restaurant.email,
            phone_number: restaurant.phone_number,
            image_url: restaurant.image_url,
            status: restaurant.status,
            created_at: restaurant.created_at,
            menu_items: menu.into_iter().map(MenuItemDto::from).collect(),
        }
    }
}
