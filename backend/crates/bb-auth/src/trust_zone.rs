use std::net::IpAddr;

/// Where trusted identity headers are accepted from.
///
/// Header-based identity is only as good as the network boundary around the
/// service, so the boundary is named here instead of being assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustZone {
    /// Accept headers from every peer
    Any,
    /// Loopback, private (RFC 1918 / ULA) and link-local peers
    PrivateNetwork,
    /// Only the listed peer addresses
    Allowlist(Vec<IpAddr>),
}

impl TrustZone {
    /// Whether a request arriving from `peer` may carry trusted headers
    pub fn admits(&self, peer: Option<IpAddr>) -> bool {
        match self {
            Self::Any => true,
            Self::PrivateNetwork => peer.is_some_and(is_private),
            Self::Allowlist(peers) => peer.is_some_and(|ip| peers.contains(&canonical(ip))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::PrivateNetwork => "private_network",
            Self::Allowlist(_) => "allowlist",
        }
    }
}

fn canonical(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6
            .to_ipv4_mapped()
            .map(IpAddr::V4)
            .unwrap_or(IpAddr::V6(v6)),
        v4 => v4,
    }
}

fn is_private(ip: IpAddr) -> bool {
    match canonical(ip) {
        IpAddr::V4(v4) => v4.is_loopback() || v4.is_private() || v4.is_link_local(),
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            v6.is_loopback()
                // fc00::/7 unique local
                || (first & 0xfe00) == 0xfc00
                // fe80::/10 link local
                || (first & 0xffc0) == 0xfe80
        }
    }
}
