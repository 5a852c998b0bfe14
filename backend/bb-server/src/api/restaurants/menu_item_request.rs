use crate::{ApiResult, FieldErrors};

use bb_db::MenuItemUpdate;

use serde::Deserialize;

/// Request body for adding or replacing a menu item
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl MenuItemRequest {
    pub fn into_update(self) -> ApiResult<MenuItemUpdate> {
        let mut errors = FieldErrors::new();
        errors.not_blank("name", self.name.as_deref(), "Menu item name is required");
        errors.not_blank(
            "description",
            self.description.as_deref(),
            "Menu item description is required",
        );
        match self.price {
            None => errors.add("price", "Price is required"),
            Some(price) if !(price.is_finite() && price > 0.0) => {
                errors.add("price", "Price must be positive")
            }
            Some(_) => {}
        }
        errors.finish()?;

        Ok(MenuItemUpdate {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        })
    }
}
