//! The edge-to-internal identity header contract.
//!
//! Only the edge gate may call [`mint_trusted_headers`]; internal services
//! read these headers through [`crate::HeaderTrust`].

use crate::{Claims, Result as AuthErrorResult};

use http::{HeaderMap, HeaderValue};

pub const X_USER_ID: &str = "x-user-id";
pub const X_USER_ROLE: &str = "x-user-role";
pub const X_USER_EMAIL: &str = "x-user-email";

/// Role forwarded when the credential carries none
pub const DEFAULT_ROLE: &str = "USER";

const TRUSTED_HEADERS: [&str; 3] = [X_USER_ID, X_USER_ROLE, X_USER_EMAIL];

/// Remove every client-supplied copy of the trusted headers.
///
/// Returns how many values were dropped so callers can log spoofing attempts.
pub fn strip_trusted_headers(headers: &mut HeaderMap) -> usize {
    TRUSTED_HEADERS
        .iter()
        .map(|name| {
            let count = headers.get_all(*name).iter().count();
            headers.remove(*name);
            count
        })
        .sum()
}

/// Overwrite the trusted headers from verified claims.
///
/// Any previous values are replaced, never appended.
pub fn mint_trusted_headers(headers: &mut HeaderMap, claims: &Claims) -> AuthErrorResult<()> {
    let user_id = claims.user_id()?;

    let role = if claims.role.trim().is_empty() {
        DEFAULT_ROLE
    } else {
        claims.role.as_str()
    };

    headers.insert(X_USER_ID, HeaderValue::from(user_id));
    headers.insert(X_USER_ROLE, header_value(role));
    headers.insert(X_USER_EMAIL, header_value(&claims.email));

    Ok(())
}

/// Claim text that cannot be represented as a header degrades to empty
fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| {
        log::warn!("Claim value is not a valid header value; forwarding empty");
        HeaderValue::from_static("")
    })
}
