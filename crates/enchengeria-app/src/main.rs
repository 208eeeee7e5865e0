use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use enchengeria_config::Config;
use enchengeria_core::QueryEngine;

pub mod cli;
pub mod command;
pub mod commands;
pub mod controller;
pub mod events;
pub mod profile;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::commands::{run_command, run_profile_command};
use self::controller::AppController;
use self::profile::ProfileStore;
use self::render::Renderer;
use self::state::{AppState, build_engine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let store = ProfileStore::default();
    let init_result = store.init_user_config();
    let config = store
        .load_user_profile(&cli.profile)
        .with_context(|| format!("failed to load profile '{}'", cli.profile))?;

    setup_tracing(cli.verbose, &config.log_level);
    if let Err(e) = init_result {
        tracing::warn!("Could not initialize user config: {e}");
    }

    let command = cli.command.unwrap_or(Command::Interactive);
    if let Command::Profile { action } = command {
        return run_profile_command(&store, action, &mut std::io::stdout().lock());
    }

    let mut engine = build_engine(&config, cli.ephemeral);

    match command {
        Command::Interactive => run(config, engine).await,
        command => {
            let renderer = Renderer::new(config.ui.max_results);
            let mut out = std::io::stdout().lock();
            run_command(&mut engine, command, &renderer, &mut out)
        }
    }
}

/// Interactive session until `/quit`, end of input or Ctrl+C
pub async fn run(config: Config, engine: QueryEngine) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(engine);

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for ctrl+c")?;
                tracing::info!("Shutdown requested");
                break;
            }
            joined = tasks.join_next() => match joined {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited with error: {e}");
                    break;
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    break;
                }
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}

fn setup_tracing(verbose: bool, fallback: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    // stderr keeps logs out of rendered output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
