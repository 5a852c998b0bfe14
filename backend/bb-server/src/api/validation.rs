//! Per-field request validation
//!
//! Collects every problem in a request before failing, so the client sees
//! all of them at once.

use crate::{ApiError, ApiResult};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;

pub const MUST_NOT_BE_BLANK: &str = "must not be blank";
pub const MUST_NOT_BE_NULL: &str = "must not be null";

#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Record `message` against `field` when `value` is missing or whitespace only
    pub fn not_blank(&mut self, field: &str, value: Option<&str>, message: &str) {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.add(field, message);
        }
    }

    /// Record `message` against `field` when `value` is missing
    pub fn not_null<T>(&mut self, field: &str, value: &Option<T>, message: &str) {
        if value.is_none() {
            self.add(field, message);
        }
    }

    /// Character count must fall in `min..=max` (skipped for missing values)
    pub fn size(&mut self, field: &str, value: Option<&str>, min: usize, max: usize) {
        if let Some(v) = value {
            let len = v.chars().count();
            if len < min || len > max {
                self.add(field, format!("size must be between {min} and {max}"));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok` when nothing was recorded, otherwise a validation error with
    /// each field's messages joined by `"; "`
    #[track_caller]
    pub fn finish(self) -> ApiResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }

        Err(ApiError::Validation {
            errors: self
                .errors
                .into_iter()
                .map(|(field, messages)| (field, messages.join("; ")))
                .collect(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
