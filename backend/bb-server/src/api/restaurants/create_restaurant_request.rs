use crate::{ApiResult, FieldErrors, api::validation::MUST_NOT_BE_BLANK};

use bb_core::Restaurant;

use serde::Deserialize;

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 100;

/// Request body for POST /api/restaurants
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
}

impl CreateRestaurantRequest {
    /// Validate and build a new `PENDING` restaurant owned by `owner_id`
    pub fn into_restaurant(self, owner_id: i64) -> ApiResult<Restaurant> {
        let mut errors = FieldErrors::new();
        errors.not_blank("name", self.name.as_deref(), MUST_NOT_BE_BLANK);
        errors.size("name", self.name.as_deref(), NAME_MIN_LEN, NAME_MAX_LEN);
        errors.not_blank("description", self.description.as_deref(), MUST_NOT_BE_BLANK);
        errors.not_blank("location", self.location.as_deref(), MUST_NOT_BE_BLANK);
        errors.finish()?;

        let mut restaurant = Restaurant::new(
            self.name.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default(),
            self.location.as_deref().unwrap_or_default(),
            owner_id,
        );
        restaurant.email = non_blank(self.email);
        restaurant.phone_number = non_blank(self.phone_number);
        restaurant.image_url = non_blank(self.image_url);

        Ok(restaurant)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
