//! Route Table
//!
//! Maps paths to the route references the guard decides on.

use crate::domain::value_object::route::{RouteAccess, RouteName, RouteRef};

/// Application route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteRef>,
}

impl RouteTable {
    /// Empty table (every path falls back to an unmatched public route)
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Application routes: `/` and `/about` need a session, `/login` does not
    pub fn app() -> Self {
        Self::new()
            .route(RouteName::HOME, "/", RouteAccess::RequiresAuth)
            .route("about", "/about", RouteAccess::RequiresAuth)
            .route(RouteName::LOGIN, "/login", RouteAccess::Public)
    }

    /// Add a route
    pub fn route(
        mut self,
        name: impl Into<RouteName>,
        path: impl Into<String>,
        access: RouteAccess,
    ) -> Self {
        let path = normalize(&path.into()).to_string();
        self.routes.push(RouteRef::named(name, path, access));
        self
    }

    /// Resolve a location to a route
    ///
    /// Query string, fragment and trailing slash are ignored. Unknown paths
    /// resolve to an unmatched public route.
    pub fn resolve(&self, location: &str) -> RouteRef {
        let path = normalize(location);
        self.routes
            .iter()
            .find(|route| route.path == path)
            .cloned()
            .unwrap_or_else(|| RouteRef::unmatched(path))
    }

    pub fn by_name(&self, name: &RouteName) -> Option<&RouteRef> {
        self.routes.iter().find(|route| route.is_named(name))
    }

    pub fn routes(&self) -> &[RouteRef] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::app()
    }
}

fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}
