// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Version                         (no workspace)
//!   List | Enable | Disable | Install  (verified workspace + ModManager)
//! ```

use std::process::ExitCode;

use rushmm::cli::global::GlobalOptions;
use rushmm::cli::{self, Command};
use rushmm::cmd::disable::run_disable_command;
use rushmm::cmd::enable::run_enable_command;
use rushmm::cmd::install::run_install_command;
use rushmm::cmd::list::run_list_command;
use rushmm::cmd::session::run_with_manager;
use rushmm::logging::init_logging;
use rushmm::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let global = &cli.global;
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::List) => run_with_manager(global, |manager| run_list_command(manager)),
        Some(Command::Enable(args)) => {
            run_with_manager(global, |manager| run_enable_command(args, manager))
        }
        Some(Command::Disable(args)) => {
            run_with_manager(global, |manager| run_disable_command(args, manager))
        }
        Some(Command::Install(args)) => {
            run_with_manager(global, |manager| run_install_command(args, manager))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
