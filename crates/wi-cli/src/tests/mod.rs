
use crate::Cli;

use clap::Parser;
use wi_config::Config;
use wi_core::ActorScopePolicy;

pub(crate) fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("wiuser").chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap()
}

pub(crate) fn config_with(local_wiki: Option<&str>, policy: ActorScopePolicy) -> Config {
    let mut config = Config::default();
    config.identity.local_wiki = local_wiki.map(str::to_string);
    config.identity.actor_scope_policy = policy;
    config
}
