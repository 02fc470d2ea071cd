//! Navigation Value Objects

use derive_more::Display;
use kernel::id::NavigationId;

use super::route::{RouteName, RouteRef};

/// One transition attempt
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    /// Correlates log lines of this attempt
    pub id: NavigationId,
    pub from: RouteRef,
    pub to: RouteRef,
}

impl NavigationRequest {
    pub fn new(from: RouteRef, to: RouteRef) -> Self {
        Self {
            id: NavigationId::new(),
            from,
            to,
        }
    }

    /// First navigation of the application
    pub fn initial(to: RouteRef) -> Self {
        Self::new(RouteRef::start(), to)
    }
}

/// How a navigation resolved
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NavigationOutcome {
    /// Continue to the requested destination
    #[display("proceed")]
    Proceed,
    /// Substitute the named route for the destination
    #[display("redirect to {_0}")]
    Redirect(RouteName),
}

impl NavigationOutcome {
    #[inline]
    pub fn is_proceed(&self) -> bool {
        matches!(self, NavigationOutcome::Proceed)
    }

    pub fn redirect_target(&self) -> Option<&RouteName> {
        match self {
            NavigationOutcome::Redirect(name) => Some(name),
            NavigationOutcome::Proceed => None,
        }
    }
}
