use crate::{ConfigError, ConfigErrorResult, MAX_WIKI_ID_LENGTH};

use serde::Deserialize;
use wi_core::{ActorScopePolicy, WikiId};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// The wiki this process runs against. `None` keeps the unnamed local scope.
    pub local_wiki: Option<String>,
    /// How actor ID lookups treat a wiki scope mismatch.
    pub actor_scope_policy: ActorScopePolicy,
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(wiki) = &self.local_wiki else {
            return Ok(());
        };

        if wiki.is_empty() {
            return Err(ConfigError::identity("local_wiki cannot be empty"));
        }
        if wiki.chars().any(char::is_whitespace) {
            return Err(ConfigError::identity(
                "local_wiki cannot contain whitespace",
            ));
        }
        if wiki.len() > MAX_WIKI_ID_LENGTH {
            return Err(ConfigError::identity(format!(
                "local_wiki exceeds {MAX_WIKI_ID_LENGTH} characters"
            )));
        }

        Ok(())
    }

    /// The configured local wiki by name, or `Local` when unnamed.
    pub fn wiki_id(&self) -> WikiId {
        match &self.local_wiki {
            Some(wiki) if !wiki.is_empty() => WikiId::Wiki(wiki.clone()),
            _ => WikiId::Local,
        }
    }

    /// Map a token naming the configured local wiki to `WikiId::Local`.
    ///
    /// Both spellings then admit each other and classify the same way.
    pub fn resolve(&self, wiki_id: WikiId) -> WikiId {
        match (&wiki_id, self.local_wiki.as_deref()) {
            (WikiId::Wiki(name), Some(local)) if name == local => WikiId::Local,
            _ => wiki_id,
        }
    }
}
