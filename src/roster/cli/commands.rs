//! # UI Shell
//!
//! This module is **one possible UI client** for roster, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Emits log events
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and format output
//! - `session`: the interactive loop behind `roster shell`

use super::input::{Piped, Terminal};
use super::logging;
use super::render::{print_config, print_messages, print_people};
use super::session::Session;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{ConfigAction, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::store::memory::InMemoryStore;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};

struct AppContext {
    api: RosterApi<InMemoryStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Shell { load }) => handle_shell(ctx, load),
        Some(Commands::View { file, filter }) => handle_view(ctx, file, filter),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        None => handle_shell(ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| RosterError::Api("Could not determine config dir".to_string()))?,
    };
    debug!(config_dir = %config_dir.display(), "resolved config dir");

    let config = RosterConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        RosterConfig::default()
    });

    let api = RosterApi::new(InMemoryStore::new(), config_dir).with_file_ext(config.file_ext);
    Ok(AppContext { api })
}

fn handle_shell(ctx: AppContext, load: Option<PathBuf>) -> Result<()> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        start_session(Session::new(ctx.api, Terminal::new()), load)
    } else {
        debug!("stdin is not a terminal, reading commands line by line");
        start_session(Session::new(ctx.api, Piped::new(stdin.lock())), load)
    }
}

fn start_session<L: super::input::LineSource>(
    mut session: Session<L>,
    load: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = load {
        session.preload(path)?;
    }
    session.run()
}

fn handle_view(mut ctx: AppContext, file: PathBuf, filter: Option<String>) -> Result<()> {
    let imported = ctx.api.import_file(&file)?;
    let warnings: Vec<_> = imported
        .messages
        .into_iter()
        .filter(|m| m.level != roster::api::MessageLevel::Success)
        .collect();
    print_messages(&warnings);

    let filter = filter.as_deref().filter(|term| !term.is_empty());
    let result = ctx.api.list_people(filter)?;
    print_people(&result.listed_people, filter);
    Ok(())
}

fn handle_config(mut ctx: AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
