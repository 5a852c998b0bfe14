use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(restaurant_id: i64, name: &str, description: &str, price: f64) -> Self {
        Self {
            id: 0,
            restaurant_id,
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }
}
