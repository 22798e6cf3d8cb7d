//! `update-url` -- find and replace a URL across the application database.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default | Description                        |
//! |---------------------------|----------|---------|------------------------------------|
//! | `DATABASE_URL`            | yes      | --      | PostgreSQL connection string       |
//! | `DB_TABLE_PREFIX`         | no       | empty   | Prefix applied to every table name |
//! | `DB_CONNECT_TIMEOUT_SECS` | no       | `10`    | Seconds to wait for a connection   |

use std::io;
use std::process::ExitCode;

use clap::Parser;
use relink_cli::app;
use relink_cli::args::Cli;
use relink_cli::config::CliConfig;
use relink_cli::prompt::TerminalPrompter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let mut prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
    let mut out = io::stdout();

    match app::run(&cli, &config, |q| prompter.confirm(q), &mut out).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
