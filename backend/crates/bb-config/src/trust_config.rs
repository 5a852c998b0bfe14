use crate::{ConfigError, ConfigErrorResult};

use std::net::IpAddr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustZoneKind {
    Any,
    #[default]
    PrivateNetwork,
    Allowlist,
}

impl std::str::FromStr for TrustZoneKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "private_network" => Ok(Self::PrivateNetwork),
            "allowlist" => Ok(Self::Allowlist),
            other => Err(ConfigError::trust(format!(
                "trust.zone must be any, private_network or allowlist, got '{other}'"
            ))),
        }
    }
}

impl TrustZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::PrivateNetwork => "private_network",
            Self::Allowlist => "allowlist",
        }
    }
}

/// Which peers may present trusted identity headers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub zone: TrustZoneKind,
    /// Peer IP addresses, only consulted for `allowlist`
    pub trusted_peers: Vec<String>,
}

impl TrustConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let peers = self.peers()?;

        if self.zone == TrustZoneKind::Allowlist && peers.is_empty() {
            return Err(ConfigError::trust(
                "trust.trusted_peers must not be empty when zone = \"allowlist\"",
            ));
        }

        Ok(())
    }

    pub fn peers(&self) -> ConfigErrorResult<Vec<IpAddr>> {
        self.trusted_peers
            .iter()
            .map(|peer| {
                peer.trim().parse::<IpAddr>().map_err(|_| {
                    ConfigError::trust(format!("trusted peer '{peer}' is not an IP address"))
                })
            })
            .collect()
    }
}
