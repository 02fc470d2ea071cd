//! Identity Provider Trait
//!
//! Interface to the remote "who am I" check. Implementation is in the
//! infrastructure layer.

use crate::domain::value_object::identity::Identity;
use crate::error::VerificationResult;

/// Identity collaborator trait
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Ask the API who owns the current session
    ///
    /// Any failure (rejection, network, malformed payload) is an `Err`.
    async fn who_am_i(&self) -> VerificationResult<Identity>;
}
