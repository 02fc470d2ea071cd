//! Session Store
//!
//! Single owner of the [`SessionState`]. The only ways to change it are
//! [`SessionStore::set_auth`] and [`SessionStore::check_auth_status`].
//!
//! ## Concurrency
//! - At most one identity round-trip is in flight. Concurrent callers share
//!   it and all observe the same settled state.
//! - The in-flight slot is cleared when the round-trip settles, so the next
//!   call starts a fresh one.
//! - A round-trip abandoned by every waiter is resumed by the next caller.
//!   Its deadline still counts from the first poll, so a resume after the
//!   deadline settles as timed out.
//! - The lazy path re-checks the verdict under the in-flight lock. A round-trip
//!   writes its state before clearing the slot, so a caller that finds the slot
//!   empty also sees any verdict it produced.
//!
//! ## Precedence
//! Last writer wins: a round-trip that settles after a direct `set_auth`
//! overwrites it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::watch;

use crate::application::config::SessionConfig;
use crate::domain::entity::session_state::SessionState;
use crate::domain::provider::IdentityProvider;
use crate::error::VerificationError;

type PendingVerification = Shared<BoxFuture<'static, SessionState>>;

/// What a caller waits on
enum Verification {
    /// A verdict already exists
    Settled(SessionState),
    Pending(PendingVerification),
}

impl Verification {
    async fn wait(self) -> SessionState {
        match self {
            Verification::Settled(state) => state,
            Verification::Pending(pending) => pending.await,
        }
    }
}

/// Session store
pub struct SessionStore<P> {
    inner: Arc<StoreInner<P>>,
}

struct StoreInner<P> {
    provider: Arc<P>,
    config: Arc<SessionConfig>,
    state: watch::Sender<SessionState>,
    in_flight: Mutex<Option<PendingVerification>>,
    round_trips: AtomicU64,
}

impl<P> Clone for SessionStore<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SessionStore<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub fn new(provider: Arc<P>, config: Arc<SessionConfig>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                provider,
                config,
                state: watch::Sender::new(SessionState::unverified()),
                in_flight: Mutex::new(None),
                round_trips: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Current state
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Current verdict
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Observe state changes
    ///
    /// Receivers are woken only when the state actually changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Number of identity round-trips issued so far
    pub fn round_trips(&self) -> u64 {
        self.inner.round_trips.load(Ordering::Relaxed)
    }

    /// Overwrite the verdict without asking the identity endpoint
    pub fn set_auth(&self, authenticated: bool) {
        let changed = self.inner.state.send_if_modified(|state| {
            let next = state.with_auth(authenticated);
            if *state == next {
                return false;
            }
            *state = next;
            true
        });

        tracing::debug!(authenticated, changed, "Session verdict set directly");
    }

    /// Perform one identity round-trip, or join the one in flight
    ///
    /// Never fails: any verification error settles as unauthenticated.
    /// Returns the state as settled by the round-trip.
    pub async fn check_auth_status(&self) -> SessionState {
        self.verification(false).wait().await
    }

    /// Cached state, verifying first if no verdict exists yet
    pub async fn ensure_verified(&self) -> SessionState {
        let current = self.snapshot();
        if !current.needs_verification() {
            return current;
        }

        self.verification(true).wait().await
    }

    /// Join the in-flight round-trip or start one
    ///
    /// With `reuse_verdict`, an existing verdict is returned instead of
    /// starting a new round-trip.
    fn verification(&self, reuse_verdict: bool) -> Verification {
        let mut slot = self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(pending) = slot.as_ref() {
            tracing::debug!("Joining in-flight identity check");
            return Verification::Pending(pending.clone());
        }

        if reuse_verdict {
            let current = self.snapshot();
            if !current.needs_verification() {
                tracing::debug!("Verdict settled while waiting for the slot");
                return Verification::Settled(current);
            }
        }

        let inner = Arc::clone(&self.inner);
        let pending = async move { inner.verify().await }.boxed().shared();
        *slot = Some(pending.clone());
        Verification::Pending(pending)
    }
}

impl<P> StoreInner<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    async fn verify(&self) -> SessionState {
        let attempt = self.round_trips.fetch_add(1, Ordering::Relaxed) + 1;
        let timeout = self.config.verify_timeout;
        tracing::debug!(attempt, timeout_ms = self.config.verify_timeout_ms(), "Starting identity check");

        let result = match tokio::time::timeout(timeout, self.provider.who_am_i()).await {
            Ok(result) => result,
            Err(_) => Err(VerificationError::TimedOut(timeout)),
        };

        let next = match result {
            Ok(identity) => {
                tracing::info!(attempt, identity = %identity, "Session verified");
                SessionState::authenticated(identity)
            }
            Err(err) => {
                err.log();
                tracing::info!(attempt, kind = %err.kind(), "Session not authenticated");
                SessionState::unauthenticated()
            }
        };
        debug_assert!(next.is_consistent());

        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            *state = next.clone();
            true
        });

        *self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;

        next
    }
}
