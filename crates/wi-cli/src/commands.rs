use clap::{Args, Subcommand};
use wi_config::IdentityConfig;
use wi_core::{ActorScopePolicy, Result as IdentityResult, UserIdentityValue, WikiId};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every accessor of an identity
    Inspect {
        #[command(flatten)]
        identity: IdentityArgs,
    },
    /// Read the user ID, stating the wiki the caller expects
    UserId {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Expected wiki ("local" accepts any scope)
        #[arg(long, default_value = "local")]
        expect: WikiId,
    },
    /// Read the actor ID, stating the wiki the caller expects
    ActorId {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Expected wiki ("local" accepts any scope)
        #[arg(long, default_value = "local")]
        expect: WikiId,
    },
    /// Check whether two names denote the same user
    Compare {
        left: String,
        right: String,
        /// Wiki of the left user (defaults to the configured local wiki)
        #[arg(long)]
        left_wiki: Option<WikiId>,
        /// Wiki of the right user (defaults to the configured local wiki)
        #[arg(long)]
        right_wiki: Option<WikiId>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct IdentityArgs {
    /// User name (an IP address for anonymous users)
    pub name: String,

    /// Local user ID, 0 for no local account
    #[arg(long, default_value_t = 0)]
    pub user_id: u64,

    /// Actor ID, 0 if unset
    #[arg(long, default_value_t = 0)]
    pub actor_id: u64,

    /// Wiki the user belongs to (defaults to the configured local wiki)
    #[arg(long)]
    pub wiki: Option<WikiId>,
}

impl IdentityArgs {
    /// Build the identity, reading a `--wiki` naming the configured local wiki as `Local`.
    pub fn materialize(
        &self,
        identity: &IdentityConfig,
        policy: ActorScopePolicy,
    ) -> IdentityResult<UserIdentityValue> {
        let wiki_id = identity.resolve(self.wiki.clone().unwrap_or_default());
        let user = UserIdentityValue::new(self.user_id, self.name.as_str(), self.actor_id, wiki_id)?;
        Ok(user.with_actor_scope_policy(policy))
    }
}
