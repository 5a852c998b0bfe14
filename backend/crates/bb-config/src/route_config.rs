use serde::Deserialize;

/// One entry of the edge route table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteConfig {
    /// Path prefix, matched on segment boundaries
    pub prefix: String,
    /// Absolute base URL of the upstream service
    pub upstream: String,
    /// Whether the edge verifies a bearer token before forwarding
    #[serde(default = "default_authenticated")]
    pub authenticated: bool,
}

fn default_authenticated() -> bool {
    true
}

impl RouteConfig {
    pub fn new(prefix: &str, upstream: &str, authenticated: bool) -> Self {
        Self {
            prefix: prefix.to_string(),
            upstream: upstream.to_string(),
            authenticated,
        }
    }
}
