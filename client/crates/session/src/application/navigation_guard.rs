//! Navigation Guard
//!
//! Consulted before every route transition. Verifies the session once,
//! then applies the access table to the cached verdict.

use tracing::Instrument;

use crate::application::config::SessionConfig;
use crate::application::session_store::SessionStore;
use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::navigation::{NavigationOutcome, NavigationRequest};
use crate::domain::value_object::route::RouteRef;

/// Access table, first match wins
///
/// | destination                  | authenticated | outcome           |
/// |------------------------------|---------------|-------------------|
/// | requires auth                | no            | redirect to login |
/// | login route                  | yes           | redirect to home  |
/// | anything else                | any           | proceed           |
pub fn decide(to: &RouteRef, authenticated: bool, config: &SessionConfig) -> NavigationOutcome {
    if to.requires_auth() && !authenticated {
        return NavigationOutcome::Redirect(config.login_route.clone());
    }
    if to.is_named(&config.login_route) && authenticated {
        return NavigationOutcome::Redirect(config.home_route.clone());
    }
    NavigationOutcome::Proceed
}

/// Navigation guard
pub struct NavigationGuard<P> {
    store: SessionStore<P>,
}

impl<P> Clone for NavigationGuard<P> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<P> NavigationGuard<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub fn new(store: SessionStore<P>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore<P> {
        &self.store
    }

    /// Resolve one navigation
    ///
    /// Suspends on the identity round-trip only while no verdict exists.
    pub async fn resolve(&self, request: &NavigationRequest) -> NavigationOutcome {
        let span = tracing::info_span!(
            "navigation",
            id = %request.id,
            from = %request.from.path,
            to = %request.to.path,
        );

        async {
            let state = self.store.ensure_verified().await;
            let authenticated = state.is_authenticated();
            let outcome = decide(&request.to, authenticated, self.store.config());

            match &outcome {
                NavigationOutcome::Proceed => {
                    tracing::info!(authenticated, "Navigation allowed");
                }
                NavigationOutcome::Redirect(target) => {
                    tracing::info!(authenticated, target = %target, "Navigation redirected");
                }
            }
            outcome
        }
        .instrument(span)
        .await
    }
}
