//! User identity contract for a multi-wiki platform.
//!
//! [`UserIdentity`] is the read-only surface any "thing that acts as a user"
//! exposes. [`UserIdentityValue`] is the immutable reference implementation.
//! Scope-taking accessors validate the caller's [`WikiId`] against the
//! identity's own scope before returning data.

pub mod actor_scope_policy;
pub mod error;
pub mod precondition;
pub mod user_identity;
pub mod user_identity_value;
pub mod user_kind;
pub mod user_name;
pub mod wiki_aware;
pub mod wiki_id;

pub use actor_scope_policy::ActorScopePolicy;
pub use error::{IdentityError, Result};
pub use precondition::check_precondition;
pub use user_identity::{UserIdentity, check_actor_scope};
pub use user_identity_value::UserIdentityValue;
pub use user_kind::UserKind;
pub use wiki_aware::WikiAwareEntity;
pub use wiki_id::WikiId;

#[cfg(test)]
mod tests;
