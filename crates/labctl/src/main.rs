mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use gitlab_api::GitLabClient;
use output::output_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli);
    config.validate()?;

    let client = GitLabClient::new(config.to_client_config());

    match &cli.command {
        Commands::MergeRequest { action } => {
            commands::merge_request::handle_merge_request(&client, action, cli.format)
        }
        Commands::Issue { action } => commands::issue::handle_issue(&client, action, cli.format),
    }
}
