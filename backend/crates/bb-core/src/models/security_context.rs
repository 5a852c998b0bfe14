use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;

use error_location::ErrorLocation;

/// Identity of the caller for the duration of a single request.
///
/// Built from trusted headers at the service boundary and carried in the
/// request's extensions. Never stored anywhere that outlives the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    user_id: i64,
    roles: Vec<Role>,
    email: String,
}

impl SecurityContext {
    /// Create a context, enforcing a positive user id and at least one role
    #[track_caller]
    pub fn new(user_id: i64, roles: Vec<Role>, email: impl Into<String>) -> CoreErrorResult<Self> {
        if user_id <= 0 {
            return Err(CoreError::Validation {
                message: format!("user_id must be positive, got {user_id}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if roles.is_empty() {
            return Err(CoreError::Validation {
                message: "security context requires at least one role".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut unique = Vec::with_capacity(roles.len());
        for role in roles {
            if !unique.contains(&role) {
                unique.push(role);
            }
        }

        Ok(Self {
            user_id,
            roles: unique,
            email: email.into(),
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// First role presented by the caller
    pub fn primary_role(&self) -> Role {
        self.roles[0]
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.iter().any(|role| self.has_role(*role))
    }
}
