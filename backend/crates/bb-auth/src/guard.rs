//! Role and ownership policy for every protected operation.

use bb_core::{Role, SecurityContext};

/// Operations subject to authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    PlaceOrder,
    ListOwnOrders,
    ListRestaurantOrders,
    CreateRestaurant,
    AddMenuItem,
    UpdateMenuItem,
    ChangeRestaurantStatus,
    ReadListings,
}

/// Static policy row for one operation
struct Policy {
    /// Empty means public
    roles: &'static [Role],
    /// Caller must own the resource unless they are ADMIN
    owner_check: bool,
}

impl Operation {
    fn policy(self) -> Policy {
        match self {
            Self::PlaceOrder | Self::ListOwnOrders => Policy {
                roles: &[Role::Customer],
                owner_check: false,
            },
            Self::ListRestaurantOrders | Self::AddMenuItem | Self::UpdateMenuItem => Policy {
                roles: &[Role::Owner, Role::Admin],
                owner_check: true,
            },
            Self::CreateRestaurant => Policy {
                roles: &[Role::Owner, Role::Admin],
                owner_check: false,
            },
            Self::ChangeRestaurantStatus => Policy {
                roles: &[Role::Admin],
                owner_check: false,
            },
            Self::ReadListings => Policy {
                roles: &[],
                owner_check: false,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PlaceOrder => "place_order",
            Self::ListOwnOrders => "list_own_orders",
            Self::ListRestaurantOrders => "list_restaurant_orders",
            Self::CreateRestaurant => "create_restaurant",
            Self::AddMenuItem => "add_menu_item",
            Self::UpdateMenuItem => "update_menu_item",
            Self::ChangeRestaurantStatus => "change_restaurant_status",
            Self::ReadListings => "read_listings",
        }
    }

    pub fn is_public(&self) -> bool {
        self.policy().roles.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    RoleMismatch,
    NotOwner,
}

impl DenyReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::RoleMismatch => "ROLE_MISMATCH",
            Self::NotOwner => "NOT_OWNER",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Authentication required",
            Self::RoleMismatch => "Access denied: insufficient role",
            Self::NotOwner => "Access denied: you do not own this resource",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `ctx` may perform `op`.
///
/// `resource_owner` is the owner id of the target resource for operations
/// with an ownership check; `None` there denies every non-admin caller.
/// Pure: no I/O, no logging.
pub fn authorize(
    ctx: Option<&SecurityContext>,
    op: Operation,
    resource_owner: Option<i64>,
) -> Decision {
    let policy = op.policy();

    if policy.roles.is_empty() {
        return Decision::Allow;
    }

    let Some(ctx) = ctx else {
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    if !ctx.has_any_role(policy.roles) {
        return Decision::Deny(DenyReason::RoleMismatch);
    }

    if policy.owner_check && !ctx.has_role(Role::Admin) && resource_owner != Some(ctx.user_id()) {
        return Decision::Deny(DenyReason::NotOwner);
    }

    Decision::Allow
}
