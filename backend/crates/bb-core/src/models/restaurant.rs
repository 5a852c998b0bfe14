use crate::RestaurantStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    /// User id of the owning account; the ownership fact for authorization
    pub owner_id: i64,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub status: RestaurantStatus,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    pub fn new(name: &str, description: &str, location: &str, owner_id: i64) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            owner_id,
            email: None,
            phone_number: None,
            image_url: None,
            status: RestaurantStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}
