//! Domain Layer
//!
//! Contains the session state entity, value objects, and the identity
//! collaborator trait.

pub mod entity;
pub mod provider;
pub mod value_object;

// Re-exports
pub use entity::session_state::{SessionState, SessionStatus};
pub use provider::{IdentityProvider, LocalIdentityProvider};
pub use value_object::{
    identity::{Identity, IdentityId},
    navigation::{NavigationOutcome, NavigationRequest},
    route::{RouteAccess, RouteName, RouteRef},
};
