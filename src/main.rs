//! gitai - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use gitai::{ChatCompletionClient, Config, GitRepository, RunOutcome, TerminalOperator, logging, pipeline};

/// Generate a commit message for the current changes and commit them.
#[derive(Parser, Debug)]
#[command(name = "gitai")]
#[command(about = "Generate a commit message for the current changes and commit them")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let repo = GitRepository::discover(".")
        .context("Not a git repository. Run gitai from within a git working tree.")?;

    let mut operator = TerminalOperator::new();

    // Configuration is only needed once there is something to commit.
    let outcome = pipeline::run_with_setup(&repo, &mut operator, || {
        let config = Config::load()?;
        let client = ChatCompletionClient::new(&config)?;
        Ok((client, config.max_attempts))
    })
    .await?;

    if matches!(outcome, RunOutcome::Committed { .. }) {
        println!();
    }
    println!("{}", outcome.summary());

    Ok(())
}
