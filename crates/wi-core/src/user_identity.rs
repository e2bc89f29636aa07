//! The user identity contract.
//!
//! Anything that acts as a user (a local account, an anonymous IP editor, an
//! account on another wiki) implements [`UserIdentity`], so revision
//! attribution, log entries and permission checks can treat them uniformly.

use crate::{ActorScopePolicy, Result as IdentityResult, UserKind, WikiAwareEntity, WikiId};
use crate::user_name;

use log::warn;

/// Read-only view of a user's identity within a wiki scope.
///
/// Implementations must be immutable from the caller's point of view.
pub trait UserIdentity: WikiAwareEntity + Send + Sync + std::fmt::Debug {
    /// The local user ID, without any scope check. `0` means no local account.
    ///
    /// Legacy accessor; prefer [`UserIdentity::user_id`], which states the expected wiki.
    fn local_id(&self) -> u64;

    /// The local user ID, after checking that `wiki_id` admits this identity's scope.
    ///
    /// Fails with a precondition error on mismatch. `WikiId::Local` is always admitted.
    #[track_caller]
    fn user_id(&self, wiki_id: &WikiId) -> IdentityResult<u64> {
        self.assert_wiki(wiki_id)?;
        Ok(self.local_id())
    }

    /// The logical name. An IPv4 or IPv6 literal for anonymous users.
    fn name(&self) -> &str;

    /// The actor ID, `0` if unset.
    ///
    /// Scope mismatches are handled per [`ActorScopePolicy`]; see [`check_actor_scope`].
    fn actor_id(&self, wiki_id: &WikiId) -> IdentityResult<u64>;

    /// Whether `other` is the same user in the same wiki.
    fn equals(&self, other: &dyn UserIdentity) -> bool {
        self.name() == other.name() && self.wiki_id() == other.wiki_id()
    }

    /// True if the user has an account on its wiki. Equivalent to `local_id() != 0`.
    fn is_registered(&self) -> bool {
        self.local_id() != 0
    }

    fn kind(&self) -> UserKind {
        if !self.is_registered() {
            UserKind::Anonymous
        } else if self.wiki_id().is_local() {
            UserKind::Registered
        } else {
            UserKind::Remote
        }
    }

    fn is_ip_name(&self) -> bool {
        user_name::is_ip_address(self.name())
    }
}

/// Scope check for actor ID accessors.
///
/// Under [`ActorScopePolicy::Strict`] a mismatch is a precondition error. Under
/// [`ActorScopePolicy::Warn`] it is logged as deprecated usage and the call proceeds.
#[track_caller]
pub fn check_actor_scope<E>(
    entity: &E,
    wiki_id: &WikiId,
    policy: ActorScopePolicy,
) -> IdentityResult<()>
where
    E: WikiAwareEntity + ?Sized,
{
    match policy {
        ActorScopePolicy::Strict => entity.assert_wiki(wiki_id),
        ActorScopePolicy::Warn => {
            if !wiki_id.admits(entity.wiki_id()) {
                warn!(
                    "Deprecated: actor ID requested for wiki {wiki_id}, but entity belongs to {}",
                    entity.wiki_id()
                );
            }
            Ok(())
        }
    }
}
