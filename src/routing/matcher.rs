//! Route matching module
//!
//! Implements path matching over an ordered route table. Rules are evaluated
//! in table order and the first match wins.

/// Endpoints the router can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Static greeting
    Message,
    /// Random identifier generator
    Random,
    /// KV store write (`/kv/put/:key/:value`)
    KvPut,
    /// KV store read (`/kv/get/:key`)
    KvGet,
}

/// Route matching conditions
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteMatch {
    /// Exact path match
    pub path: Option<&'static str>,
    /// Path prefix match
    pub prefix: Option<&'static str>,
}

/// A route: match conditions plus the endpoint dispatched to on a hit
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub match_rule: RouteMatch,
    pub endpoint: Endpoint,
}

/// The fixed route table, evaluated in order.
///
/// No two exact routes share a path; the KV prefixes are disjoint, so table
/// order only matters in that exact rules are listed before prefix rules.
static ROUTE_TABLE: [Route; 4] = [
    Route {
        match_rule: RouteMatch {
            path: Some("/message"),
            prefix: None,
        },
        endpoint: Endpoint::Message,
    },
    Route {
        match_rule: RouteMatch {
            path: Some("/random"),
            prefix: None,
        },
        endpoint: Endpoint::Random,
    },
    Route {
        match_rule: RouteMatch {
            path: None,
            prefix: Some("/kv/put/"),
        },
        endpoint: Endpoint::KvPut,
    },
    Route {
        match_rule: RouteMatch {
            path: None,
            prefix: Some("/kv/get/"),
        },
        endpoint: Endpoint::KvGet,
    },
];

/// The route table served by the router
pub fn route_table() -> &'static [Route] {
    &ROUTE_TABLE
}

/// Find the first matching route for a given path
pub fn match_route<'a>(path: &str, routes: &'a [Route]) -> Option<&'a Route> {
    routes
        .iter()
        .find(|route| match_path(&route.match_rule, path))
}

/// Check if a path matches a route rule
pub fn match_path(rule: &RouteMatch, path: &str) -> bool {
    // Exact path match takes priority
    if let Some(exact) = rule.path {
        return path == exact;
    }

    // Prefix match
    if let Some(prefix) = rule.prefix {
        return path.starts_with(prefix);
    }

    // No path rule means match all
    true
}
