use crate::{ApiResult, FieldErrors, api::validation::MUST_NOT_BE_NULL};

use bb_core::RestaurantStatus;

use serde::Deserialize;

/// Request body for PATCH /api/restaurants/{id}/status
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    pub fn into_status(self) -> ApiResult<RestaurantStatus> {
        let mut errors = FieldErrors::new();

        let status = match self.status.as_deref().map(str::trim) {
            None => {
                errors.add("status", MUST_NOT_BE_NULL);
                None
            }
            Some(raw) => match raw.to_ascii_uppercase().parse::<RestaurantStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.add("status", "must be one of PENDING, ACTIVE, INACTIVE");
                    None
                }
            },
        };
        errors.finish()?;

        Ok(status.unwrap_or_default())
    }
}
