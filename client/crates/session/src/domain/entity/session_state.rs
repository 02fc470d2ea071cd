//! Session State Entity
//!
//! The verdict the gate holds about the current session, together with the
//! identity that backs it.
//!
//! ## Invariant
//! An identity is only ever held alongside an authenticated verdict. All
//! constructors and transitions below preserve this; fields are private so
//! no caller can break it.

use crate::domain::value_object::identity::Identity;

/// Where the verdict came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No verdict yet; the next navigation triggers a round-trip
    #[default]
    Unverified,
    /// Verdict written directly, no round-trip has completed
    Asserted { authenticated: bool },
    /// Verdict from a completed round-trip (possibly overridden since)
    Verified { authenticated: bool },
}

impl SessionStatus {
    /// Whether a round-trip has completed
    #[inline]
    pub const fn is_verified(&self) -> bool {
        matches!(self, SessionStatus::Verified { .. })
    }

    #[inline]
    pub const fn is_authenticated(&self) -> bool {
        match self {
            SessionStatus::Unverified => false,
            SessionStatus::Asserted { authenticated } | SessionStatus::Verified { authenticated } => {
                *authenticated
            }
        }
    }

    /// Whether the gate must ask the identity endpoint before deciding
    #[inline]
    pub const fn needs_verification(&self) -> bool {
        matches!(self, SessionStatus::Unverified)
    }

    /// Status after the verdict is overwritten directly
    pub const fn with_auth(self, authenticated: bool) -> Self {
        match self {
            SessionStatus::Verified { .. } => SessionStatus::Verified { authenticated },
            SessionStatus::Unverified | SessionStatus::Asserted { .. } => {
                SessionStatus::Asserted { authenticated }
            }
        }
    }
}

/// Session state held by the session store
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    status: SessionStatus,
    identity: Option<Identity>,
}

impl SessionState {
    /// Empty state at application start
    pub fn unverified() -> Self {
        Self::default()
    }

    /// State after a successful round-trip
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            status: SessionStatus::Verified {
                authenticated: true,
            },
            identity: Some(identity),
        }
    }

    /// State after a failed round-trip
    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Verified {
                authenticated: false,
            },
            identity: None,
        }
    }

    /// State after the verdict is overwritten without a round-trip
    ///
    /// Dropping to unauthenticated also drops the identity.
    pub fn with_auth(&self, authenticated: bool) -> Self {
        Self {
            status: self.status.with_auth(authenticated),
            identity: if authenticated {
                self.identity.clone()
            } else {
                None
            },
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[inline]
    pub fn is_verified(&self) -> bool {
        self.status.is_verified()
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    #[inline]
    pub fn needs_verification(&self) -> bool {
        self.status.needs_verification()
    }

    /// Identity implies an authenticated verdict
    pub fn is_consistent(&self) -> bool {
        self.identity.is_none() || self.is_authenticated()
    }
}
