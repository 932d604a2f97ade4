use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ws_cli::commands::{class, conflicts, employer, shift, status, summary};
use ws_cli::{Cli, ClassAction, Commands, Config, EmployerAction, ShiftAction};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<(ws_db::Database, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let db = ws_db::Database::open(&config.database_path).context("failed to open database")?;
    Ok((db, config))
}

#[expect(
    clippy::too_many_lines,
    reason = "CLI command dispatch is inherently verbose"
)]
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Class { action }) => {
            let (mut db, _config) = open_database(cli.config.as_deref())?;
            match action {
                ClassAction::Add {
                    name,
                    day,
                    start,
                    end,
                    location,
                } => class::add(
                    &mut stdout,
                    &mut db,
                    name,
                    *day,
                    *start,
                    *end,
                    location.as_deref(),
                )?,
                ClassAction::List => class::list(&mut stdout, &db)?,
                ClassAction::Edit {
                    id,
                    name,
                    day,
                    start,
                    end,
                    location,
                } => class::edit(
                    &mut stdout,
                    &mut db,
                    *id,
                    name.as_deref(),
                    *day,
                    *start,
                    *end,
                    location.clone(),
                )?,
                ClassAction::Delete { id } => class::delete(&mut stdout, &mut db, *id)?,
            }
        }
        Some(Commands::Employer { action }) => {
            let (mut db, _config) = open_database(cli.config.as_deref())?;
            match action {
                EmployerAction::Add { name, rate } => {
                    employer::add(&mut stdout, &mut db, name, *rate)?;
                }
                EmployerAction::List => employer::list(&mut stdout, &db)?,
                EmployerAction::Edit { id, name, rate } => {
                    employer::edit(&mut stdout, &mut db, *id, name.as_deref(), *rate)?;
                }
                EmployerAction::Delete { id } => employer::delete(&mut stdout, &mut db, *id)?,
            }
        }
        Some(Commands::Shift { action }) => {
            let (mut db, _config) = open_database(cli.config.as_deref())?;
            match action {
                ShiftAction::Add {
                    employer,
                    date,
                    start,
                    end,
                    notes,
                } => shift::add(
                    &mut stdout,
                    &mut db,
                    *employer,
                    *date,
                    *start,
                    *end,
                    notes.as_deref(),
                )?,
                ShiftAction::List { from, to } => shift::list(&mut stdout, &db, *from, *to)?,
                ShiftAction::Edit {
                    id,
                    employer,
                    date,
                    start,
                    end,
                    notes,
                } => shift::edit(
                    &mut stdout,
                    &mut db,
                    *id,
                    *employer,
                    *date,
                    *start,
                    *end,
                    notes.clone(),
                )?,
                ShiftAction::Delete { id } => shift::delete(&mut stdout, &mut db, *id)?,
            }
        }
        Some(Commands::Conflicts { json, out }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            conflicts::run(&mut stdout, &db, *json, out.as_deref())?;
        }
        Some(Commands::Summary {
            from,
            to,
            json,
            out,
        }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            summary::run(&mut stdout, &db, *from, *to, *json, out.as_deref())?;
        }
        Some(Commands::Status) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            status::run(&mut stdout, &db, &config.database_path)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
