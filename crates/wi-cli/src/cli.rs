use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wiuser")]
#[command(about = "Inspect user identities and their wiki scoping")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Fail actor ID lookups on wiki mismatch, regardless of configuration
    #[arg(long, global = true)]
    pub strict_actor_scope: bool,
}
