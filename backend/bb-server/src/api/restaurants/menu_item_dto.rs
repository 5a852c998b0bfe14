use bb_core::MenuItem;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<MenuItem> for MenuItemDto {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}
