//! Path Navigator
//!
//! Turns location strings into navigation requests through the route table
//! and hands them to the guard.

use std::sync::Arc;

use crate::application::navigation_guard::NavigationGuard;
use crate::application::session_store::SessionStore;
use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::navigation::{NavigationOutcome, NavigationRequest};
use crate::presentation::router::RouteTable;

/// Guard bound to a route table
pub struct Navigator<P> {
    guard: NavigationGuard<P>,
    routes: Arc<RouteTable>,
}

impl<P> Clone for Navigator<P> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            routes: Arc::clone(&self.routes),
        }
    }
}

impl<P> Navigator<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub fn new(guard: NavigationGuard<P>, routes: Arc<RouteTable>) -> Self {
        Self { guard, routes }
    }

    pub fn guard(&self) -> &NavigationGuard<P> {
        &self.guard
    }

    pub fn store(&self) -> &SessionStore<P> {
        self.guard.store()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Build the request for a transition between two locations
    pub fn request(&self, from: &str, to: &str) -> NavigationRequest {
        NavigationRequest::new(self.routes.resolve(from), self.routes.resolve(to))
    }

    /// Resolve a transition between two locations
    pub async fn navigate(&self, from: &str, to: &str) -> NavigationOutcome {
        let request = self.request(from, to);
        self.guard.resolve(&request).await
    }
}
