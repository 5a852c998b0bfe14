use bb_config::RouteConfig;

/// A compiled route: where a path prefix is forwarded and whether it needs a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub prefix: String,
    pub upstream: String,
    pub authenticated: bool,
}

impl Route {
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(&self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || self.prefix.ends_with('/'),
            None => false,
        }
    }

    /// Upstream URL for `path_and_query`
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.upstream.trim_end_matches('/'), path_and_query)
    }
}

/// Immutable route table, longest prefix wins
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        let mut routes: Vec<Route> = routes
            .iter()
            .map(|r| Route {
                prefix: r.prefix.clone(),
                upstream: r.upstream.clone(),
                authenticated: r.authenticated,
            })
            .collect();

        routes.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));

        Self { routes }
    }

    /// Route for `path`, matched on path-segment boundaries
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(path))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
