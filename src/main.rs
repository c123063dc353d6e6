use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_changelog::cli::orchestration::{run_collect, run_release, run_release_sync};
use git_changelog::cli::{Cli, Command};
use git_changelog::{config, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("git_changelog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref()).context("Error loading config")?;

    match cli.command {
        Command::Collect(args) => {
            let result = run_collect(&args, &config)?;
            match result.output {
                Some(path) => ui::display_success(&format!(
                    "Wrote {} releases to {}",
                    result.release_count,
                    path.display()
                )),
                None => println!("{}", result.changelog),
            }
        }
        Command::Release(args) => {
            let result = run_release(&args, &config).await?;
            if result.dry_run {
                ui::display_release_list("Releases that would be created:", &result.tags);
            } else {
                ui::display_success(&format!("Created {} releases", result.tags.len()));
                ui::display_release_list("Created:", &result.tags);
            }
        }
        Command::ReleaseSync(args) => {
            let result = run_release_sync(&args, &config).await?;
            if result.dry_run {
                ui::display_release_list("Releases that would be updated:", &result.tags);
            } else {
                ui::display_success(&format!("Updated {} releases", result.tags.len()));
                ui::display_release_list("Updated:", &result.tags);
            }
        }
    }

    Ok(())
}
