use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Prefix some upstream systems put in front of every role name
const LEGACY_ROLE_PREFIX: &str = "ROLE_";

/// Canonical role set used for every authorization decision.
///
/// Raw role strings arrive in several historical spellings (`ROLE_OWNER`,
/// `RESTAURANT_OWNER`, `owner`, ...). They are normalized into this set at
/// every trust boundary, and only the canonical form is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Places orders and reads their own order history
    Customer,
    /// Manages the restaurants they own
    Owner,
    /// Platform administrator
    Admin,
    /// Authenticated caller with no business role (edge default)
    User,
}

impl Role {
    /// Canonical wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// Map any known spelling onto the canonical role.
    ///
    /// Case-insensitive; strips surrounding whitespace and the legacy `ROLE_`
    /// prefix. Returns `None` for empty or unknown values.
    pub fn normalize(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix(LEGACY_ROLE_PREFIX).unwrap_or(&upper);

        match bare {
            "CUSTOMER" => Some(Self::Customer),
            "OWNER" | "RESTAURANT_OWNER" => Some(Self::Owner),
            "ADMIN" => Some(Self::Admin),
            "USER" => Some(Self::User),
            _ => None,
        }
    }

    /// Parse a comma-separated role list, keeping recognised roles in order.
    ///
    /// Empty segments are skipped silently, unknown ones with a warning.
    /// Duplicates (e.g. `OWNER,ROLE_RESTAURANT_OWNER`) collapse to one entry.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        let mut roles = Vec::new();

        for segment in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match Self::normalize(segment) {
                Some(role) if !roles.contains(&role) => roles.push(role),
                Some(_) => {}
                None => log::warn!("Ignoring unrecognised role '{}'", segment),
            }
        }

        roles
    }

    /// Join roles back into the comma-separated header form
    pub fn join(roles: &[Self]) -> String {
        roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::normalize(s).ok_or_else(|| CoreError::InvalidRole {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
