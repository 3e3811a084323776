//! Routing module
//!
//! Provides the fixed route table and ordered path matching:
//! - Exact path matching (`/message`, `/random`)
//! - Prefix matching with positional segments (`/kv/put/`, `/kv/get/`)

mod matcher;

pub use matcher::{match_route, route_table, Endpoint, Route, RouteMatch};
