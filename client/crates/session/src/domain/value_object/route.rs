//! Route Value Objects
//!
//! What the guard knows about a destination: its name, its path, and
//! whether it requires an authenticated session.

use std::borrow::Cow;

use derive_more::Display;

/// Route name as declared in the routing table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct RouteName(Cow<'static, str>);

impl RouteName {
    pub const HOME: RouteName = RouteName::from_static("home");
    pub const LOGIN: RouteName = RouteName::from_static("login");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for RouteName {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// Access requirement declared on a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteAccess {
    /// Reachable without a session
    #[default]
    Public,
    /// Needs an authenticated session
    RequiresAuth,
}

impl RouteAccess {
    #[inline]
    pub const fn requires_auth(&self) -> bool {
        matches!(self, RouteAccess::RequiresAuth)
    }
}

/// Resolved route reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRef {
    pub name: Option<RouteName>,
    pub path: String,
    pub access: RouteAccess,
}

impl RouteRef {
    pub fn named(name: impl Into<RouteName>, path: impl Into<String>, access: RouteAccess) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
            access,
        }
    }

    /// Path that matched no route definition
    pub fn unmatched(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
            access: RouteAccess::Public,
        }
    }

    /// Location before the first navigation of the application
    pub fn start() -> Self {
        Self::unmatched("/")
    }

    #[inline]
    pub fn requires_auth(&self) -> bool {
        self.access.requires_auth()
    }

    pub fn is_named(&self, name: &RouteName) -> bool {
        self.name.as_ref() == Some(name)
    }
}
