//! wiuser - user identity inspection CLI
//!
//! # Examples
//!
//! ```bash
//! # Everything about a registered user on enwiki
//! wiuser inspect Alice --user-id 42 --actor-id 7 --wiki enwiki --pretty
//!
//! # Fails: the caller expects dewiki
//! wiuser user-id Alice --user-id 42 --wiki enwiki --expect dewiki
//!
//! # Same user?
//! wiuser compare 203.0.113.5 203.0.113.5
//! ```

use wi_cli::{Cli, Result as CliResult, execute, logger};

use std::process::ExitCode;

use clap::Parser;
use wi_config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(&config.logging)?;
    config.log_summary();

    let value = execute(&cli.command, &config, cli.strict_actor_scope)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}
