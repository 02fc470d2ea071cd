//! Application Layer
//!
//! Session store, navigation guard, and their configuration.

pub mod config;
pub mod navigation_guard;
pub mod session_store;

// Re-exports
pub use config::SessionConfig;
pub use navigation_guard::NavigationGuard;
pub use session_store::SessionStore;
