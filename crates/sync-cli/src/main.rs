//! cc-config-sync CLI
//!
//! Pulls Claude Code config files into a git-tracked sync repo, pushes them
//! back, and shows drift between the two.

mod cli;
mod commands;
mod error;
mod output;
mod prompt;

use clap::Parser;
use colored::Colorize;
use sync_core::{PullOptions, PushOptions, StatusOptions};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, ConfigAction};
use commands::Session;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} Sync Claude Code configurations across machines", "cc-config-sync".green().bold());
        println!();
        println!("Run {} for available commands.", "cc-config-sync --help".cyan());
        return Ok(());
    };

    if !command.needs_repo() {
        return execute_standalone(command);
    }

    let session = Session::open(cli.repo.as_deref(), cli.machine)?;
    execute_command(&session, command)
}

/// Commands that never touch a sync repo.
fn execute_standalone(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Config { action } => match action {
            ConfigAction::SetRepo { path } => commands::run_config_set_repo(&path),
            ConfigAction::Show => commands::run_config_show(),
        },
        Commands::Completions { shell } => commands::run_completions(shell),
        other => Err(CliError::user(format!("{other:?} requires a sync repo"))),
    }
}

fn execute_command(session: &Session, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Pull {
            filter,
            dry_run,
            commit,
        } => commands::run_pull(session, filter.into(), PullOptions { dry_run }, commit),
        Commands::Push {
            filter,
            yes,
            dry_run,
        } => commands::run_push(session, filter.into(), PushOptions { dry_run, yes }),
        Commands::Status { diff, all, filter } => commands::run_status(
            session,
            filter.into(),
            StatusOptions {
                show_missing: all,
                include_diff: diff,
            },
        ),
        Commands::List => commands::run_list(session),
        Commands::Init => commands::run_init(session),
        Commands::AddProject { name, path } => commands::run_add_project(session, &name, &path),
        Commands::RemoveProject { name } => commands::run_remove_project(session, &name),
        Commands::RenameProject { old_name, new_name } => {
            commands::run_rename_project(session, &old_name, &new_name)
        }
        Commands::CleanBackups { yes } => commands::run_clean_backups(session, yes),
        Commands::Config { .. } | Commands::Completions { .. } => execute_standalone(cmd),
    }
}
