#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use money_ui::{
    gui::{load_config_or_default, start_app},
    logging::{LoggingOptions, init_logging},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal money assistant: pick a bank statement to work with.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML file overriding window and screen settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,money_ui=trace`. Defaults to `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not log to stdout.
    #[arg(long)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let logging = LoggingOptions {
        level: cli.log_level,
        file: cli.log_file,
        quiet: cli.quiet,
    };
    if let Err(error) = init_logging(&logging) {
        error!(?error, "logging setup incomplete");
    }

    let config = load_config_or_default(cli.config.as_deref());
    start_app(config);
}
