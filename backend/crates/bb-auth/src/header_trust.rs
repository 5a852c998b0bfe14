use crate::{TrustZone, X_USER_EMAIL, X_USER_ID, X_USER_ROLE};

use bb_core::{Role, SecurityContext};

use std::net::IpAddr;

use http::{HeaderMap, HeaderValue};

/// Rebuilds the caller's identity from edge-minted headers.
///
/// Malformed or untrusted headers never fail the request here. They yield no
/// context, and the guard then denies whatever needs authentication.
#[derive(Debug, Clone)]
pub struct HeaderTrust {
    zone: TrustZone,
}

impl HeaderTrust {
    pub fn new(zone: TrustZone) -> Self {
        Self { zone }
    }

    /// Build a context for this request, or `None` for an anonymous caller
    pub fn reconstruct(&self, headers: &HeaderMap, peer: Option<IpAddr>) -> Option<SecurityContext> {
        let user_id_raw = headers.get(X_USER_ID)?;

        if !self.zone.admits(peer) {
            log::warn!(
                "Ignoring identity headers from peer {:?} outside trust zone '{}'",
                peer,
                self.zone.name()
            );
            return None;
        }

        let Some(user_id) = parse_user_id(user_id_raw) else {
            log::warn!(
                "Failed to parse 'X-User-Id' header, received {:?}; continuing unauthenticated",
                user_id_raw
            );
            return None;
        };

        let roles = header_str(headers, X_USER_ROLE)
            .map(Role::parse_list)
            .unwrap_or_default();

        if roles.is_empty() {
            log::debug!("No usable role in 'X-User-Role' for user {user_id}; continuing unauthenticated");
            return None;
        }

        let email = header_str(headers, X_USER_EMAIL).unwrap_or_default();

        match SecurityContext::new(user_id, roles, email) {
            Ok(ctx) => {
                log::debug!(
                    "Authenticated user [id={}] with roles {}",
                    ctx.user_id(),
                    Role::join(ctx.roles())
                );
                Some(ctx)
            }
            Err(e) => {
                log::warn!("Rejected identity headers: {e}");
                None
            }
        }
    }
}

/// Positive decimal id, or `None` for anything else (including non-UTF-8 bytes)
pub(crate) fn parse_user_id(value: &HeaderValue) -> Option<i64> {
    let id = value.to_str().ok()?.trim().parse::<i64>().ok()?;
    (id > 0).then_some(id)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
