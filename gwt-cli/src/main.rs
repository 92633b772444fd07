//! gwt CLI - git worktree manager TUI

use clap::Parser;
use futures::StreamExt;
use gwt_cli::error::CliError;
use gwt_cli::logging;
use gwt_cli::tui::{self, state::AppEvent, App, AppSettings};
use gwt_config::Config;
use gwt_git::Git;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// List, create, open, and delete git worktrees from the keyboard
#[derive(Parser, Debug)]
#[command(name = "gwt", version, about)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let config = Config::load_or_default()?;
    logging::init(&config.log);
    info!(version = env!("CARGO_PKG_VERSION"), "gwt starting");

    let git = Git::new().with_program(config.options.git.clone());

    // Fails fast outside a repository, before the terminal is touched
    let worktrees = git.list_worktrees()?;
    let cwd = std::env::current_dir()?;
    let (app, _) = App::new(AppSettings::from_config(&config.ui, cwd)).update(
        AppEvent::WorktreesLoaded {
            generation: 0,
            result: Ok(worktrees),
        },
    );

    let should_exit = Arc::new(AtomicBool::new(false));
    let signals = Signals::new([SIGTERM, SIGHUP, SIGINT])?;
    let signals_handle = signals.handle();
    let flag = should_exit.clone();
    let signal_task = tokio::spawn(async move {
        let mut signals = signals;
        while let Some(signal) = signals.next().await {
            info!(signal, "received signal, exiting");
            flag.store(true, Ordering::Relaxed);
        }
    });

    let result = tui::run(app, git, config.options.editor.clone(), should_exit).await;

    signals_handle.close();
    let _ = signal_task.await;
    result?;

    info!("gwt exiting");
    Ok(())
}
