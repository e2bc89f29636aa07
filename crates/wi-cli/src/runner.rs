use crate::commands::Commands;
use crate::error::Result as CliResult;

use log::info;
use serde::Serialize;
use serde_json::{Value, json};
use wi_config::Config;
use wi_core::{
    ActorScopePolicy, UserIdentity, UserIdentityValue, UserKind, WikiAwareEntity, WikiId,
};

/// Everything the identity contract exposes about one user.
#[derive(Debug, Serialize)]
struct IdentityReport<'a> {
    name: &'a str,
    user_id: u64,
    actor_id: u64,
    wiki_id: &'a WikiId,
    registered: bool,
    kind: UserKind,
    ip_name: bool,
}

/// Run a command against the given configuration and return its JSON output.
///
/// `strict_actor_scope` forces [`ActorScopePolicy::Strict`] over the configured policy.
pub fn execute(command: &Commands, config: &Config, strict_actor_scope: bool) -> CliResult<Value> {
    let policy = if strict_actor_scope {
        ActorScopePolicy::Strict
    } else {
        config.identity.actor_scope_policy
    };
    let identity_config = &config.identity;

    match command {
        Commands::Inspect { identity } => {
            let user = identity.materialize(identity_config, policy)?;
            report(&user)
        }
        Commands::UserId { identity, expect } => {
            let user = identity.materialize(identity_config, policy)?;
            let user_id = user.user_id(&identity_config.resolve(expect.clone()))?;
            Ok(json!({ "user_id": user_id }))
        }
        Commands::ActorId { identity, expect } => {
            let user = identity.materialize(identity_config, policy)?;
            let actor_id = user.actor_id(&identity_config.resolve(expect.clone()))?;
            Ok(json!({ "actor_id": actor_id }))
        }
        Commands::Compare {
            left,
            right,
            left_wiki,
            right_wiki,
        } => {
            let left = UserIdentityValue::anonymous(
                left.as_str(),
                identity_config.resolve(left_wiki.clone().unwrap_or_default()),
            )?;
            let right = UserIdentityValue::anonymous(
                right.as_str(),
                identity_config.resolve(right_wiki.clone().unwrap_or_default()),
            )?;
            let equal = left.equals(&right);
            info!("Compared {left} with {right}: equal={equal}");
            Ok(json!({ "equal": equal }))
        }
    }
}

fn report(user: &UserIdentityValue) -> CliResult<Value> {
    let report = IdentityReport {
        name: user.name(),
        user_id: user.local_id(),
        actor_id: user.actor_id(user.wiki_id())?,
        wiki_id: user.wiki_id(),
        registered: user.is_registered(),
        kind: user.kind(),
        ip_name: user.is_ip_name(),
    };
    Ok(serde_json::to_value(report)?)
}
