//! Hourglass - a terminal countdown timer
//!
//! Pick a duration, start the countdown, and cancel or reset it while it
//! runs. A background daemon owns the timer; the CLI talks to it over a
//! Unix socket and a chime plays when the countdown reaches zero.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use hourglass::cli::{Cli, Commands, Display, IpcClient};
use hourglass::daemon::service::{self, DaemonOptions};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Select(args)) => {
            let client = IpcClient::new()?;
            let response = client.select(&args).await?;
            Display::show_select_success(&response);
        }
        Some(Commands::Start(args)) => {
            let client = IpcClient::new()?;
            let response = client.start(&args).await?;
            Display::show_start_success(&response);
        }
        Some(Commands::Cancel) => {
            let client = IpcClient::new()?;
            let response = client.cancel().await?;
            Display::show_cancel_success(&response);
        }
        Some(Commands::Reset) => {
            let client = IpcClient::new()?;
            let response = client.reset().await?;
            Display::show_reset_success(&response);
        }
        Some(Commands::Status) => {
            let client = IpcClient::new()?;
            let response = client.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Daemon(args)) => {
            service::run(DaemonOptions {
                socket_path: args.socket,
                sound_file: args.sound,
                no_sound: args.no_sound,
            })
            .await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
