//! Session Gate Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session state, identity, routes, identity provider trait
//! - `application/` - Session store, navigation guard, configuration
//! - `infra/` - HTTP identity provider
//! - `presentation/` - Route table, path navigator
//!
//! ## Features
//! - Lazy one-shot session verification on the first guarded navigation
//! - Coalesced identity round-trips (one in flight at a time)
//! - Timeout-bounded verification; every failure reads as "not signed in"
//! - Access table: protected routes need a session, signed-in users skip login
//!
//! ## State Model
//! - `Unverified` until the first verdict exists
//! - `Asserted` after a direct `set_auth` with no completed round-trip
//! - `Verified` after a round-trip settles
//! - An identity is only ever held with an authenticated verdict

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{NavigationGuard, SessionConfig, SessionStore};
pub use domain::{
    Identity, IdentityId, IdentityProvider, NavigationOutcome, NavigationRequest, RouteAccess,
    RouteName, RouteRef, SessionState, SessionStatus,
};
pub use error::{VerificationError, VerificationResult};
pub use infra::HttpIdentityProvider;
pub use presentation::{Navigator, RouteTable};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
