//! Work/study scheduler CLI library.
//!
//! This crate provides the CLI interface for the scheduler.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, ClassAction, Commands, EmployerAction, ShiftAction};
pub use config::Config;
