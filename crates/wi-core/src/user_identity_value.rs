use crate::user_identity::check_actor_scope;
use crate::{
    ActorScopePolicy, IdentityError, Result as IdentityResult, UserIdentity, WikiAwareEntity,
    WikiId,
};

use std::hash::{Hash, Hasher};

use log::debug;
use serde::{Deserialize, Serialize};

/// Immutable value object implementing [`UserIdentity`].
///
/// Equality and hashing follow [`UserIdentity::equals`]: name and wiki scope.
/// The actor scope policy is runtime behavior and is not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "UserIdentityRecord")]
pub struct UserIdentityValue {
    id: u64,
    name: String,
    actor_id: u64,
    wiki_id: WikiId,
    #[serde(skip)]
    actor_scope_policy: ActorScopePolicy,
}

/// Unvalidated shape accepted on deserialization.
#[derive(Deserialize)]
struct UserIdentityRecord {
    #[serde(default)]
    id: u64,
    name: String,
    #[serde(default)]
    actor_id: u64,
    #[serde(default)]
    wiki_id: WikiId,
}

impl UserIdentityValue {
    /// Create an identity. `id == 0` denotes a user without a local account.
    #[track_caller]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        actor_id: u64,
        wiki_id: WikiId,
    ) -> IdentityResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IdentityError::invalid_name("name cannot be empty"));
        }

        debug!("Created user identity {name}@{wiki_id} (id={id}, actor={actor_id})");

        Ok(Self {
            id,
            name,
            actor_id,
            wiki_id,
            actor_scope_policy: ActorScopePolicy::default(),
        })
    }

    /// Create an identity for a user with no local account and no actor.
    #[track_caller]
    pub fn anonymous(name: impl Into<String>, wiki_id: WikiId) -> IdentityResult<Self> {
        Self::new(0, name, 0, wiki_id)
    }

    pub fn with_actor_scope_policy(mut self, policy: ActorScopePolicy) -> Self {
        self.actor_scope_policy = policy;
        self
    }

    pub fn actor_scope_policy(&self) -> ActorScopePolicy {
        self.actor_scope_policy
    }
}

impl TryFrom<UserIdentityRecord> for UserIdentityValue {
    type Error = IdentityError;

    fn try_from(record: UserIdentityRecord) -> IdentityResult<Self> {
        Self::new(record.id, record.name, record.actor_id, record.wiki_id)
    }
}

impl WikiAwareEntity for UserIdentityValue {
    fn wiki_id(&self) -> &WikiId {
        &self.wiki_id
    }
}

impl UserIdentity for UserIdentityValue {
    fn local_id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[track_caller]
    fn actor_id(&self, wiki_id: &WikiId) -> IdentityResult<u64> {
        check_actor_scope(self, wiki_id, self.actor_scope_policy)?;
        Ok(self.actor_id)
    }
}

impl PartialEq for UserIdentityValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for UserIdentityValue {}

impl Hash for UserIdentityValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.wiki_id.hash(state);
    }
}

impl std::fmt::Display for UserIdentityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.wiki_id)
    }
}
