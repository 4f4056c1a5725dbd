//! Command definitions for the Hourglass CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Hourglass - a terminal countdown timer
#[derive(Parser, Debug)]
#[command(
    name = "hourglass",
    version,
    about = "Terminal countdown timer with daemon and CLI control",
    long_about = "A countdown timer that runs in a background daemon.\n\
                  Pick a duration, start the countdown, and cancel or reset it\n\
                  while it runs; a chime plays when the timer reaches zero.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Select the countdown duration
    Select(SelectArgs),

    /// Start the countdown (optionally selecting a duration inline)
    Start(StartArgs),

    /// Cancel the running countdown, dropping the remaining time to zero
    Cancel,

    /// Reset the running countdown back to its starting duration
    Reset,

    /// Show the current countdown status
    Status,

    /// Run the countdown daemon (background service)
    Daemon(DaemonArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Select Command Arguments
// ============================================================================

/// Arguments for the select command
#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// Hours component (0-99)
    #[arg(
        short = 'H',
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=99)
    )]
    pub hours: u32,

    /// Minutes component (0-59)
    #[arg(
        short = 'M',
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub minutes: u32,

    /// Seconds component (0-59)
    #[arg(
        short = 'S',
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub seconds: u32,
}

// ============================================================================
// Start Command Arguments
// ============================================================================

/// Arguments for the start command
#[derive(Args, Debug, Clone, Default)]
pub struct StartArgs {
    /// Hours component (0-99); omit all three to use the stored selection
    #[arg(
        short = 'H',
        long,
        value_parser = clap::value_parser!(u32).range(0..=99)
    )]
    pub hours: Option<u32>,

    /// Minutes component (0-59)
    #[arg(
        short = 'M',
        long,
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub minutes: Option<u32>,

    /// Seconds component (0-59)
    #[arg(
        short = 'S',
        long,
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub seconds: Option<u32>,
}

// ============================================================================
// Daemon Command Arguments
// ============================================================================

/// Arguments for the daemon command
#[derive(Args, Debug, Clone, Default)]
pub struct DaemonArgs {
    /// Socket path override (default: ~/.hourglass/hourglass.sock)
    #[arg(long)]
    pub socket: Option<PathBuf>,

    /// Audio file to play when the countdown completes
    #[arg(long)]
    pub sound: Option<PathBuf>,

    /// Disable the completion sound
    #[arg(long)]
    pub no_sound: bool,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Cli Tests
    // ------------------------------------------------------------------------

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["hourglass"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["hourglass", "--verbose"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_status_command() {
            let cli = Cli::parse_from(["hourglass", "status"]);
            assert!(matches!(cli.command, Some(Commands::Status)));
        }

        #[test]
        fn test_parse_cancel_command() {
            let cli = Cli::parse_from(["hourglass", "cancel"]);
            assert!(matches!(cli.command, Some(Commands::Cancel)));
        }

        #[test]
        fn test_parse_reset_command() {
            let cli = Cli::parse_from(["hourglass", "reset"]);
            assert!(matches!(cli.command, Some(Commands::Reset)));
        }

        #[test]
        fn test_parse_daemon_command() {
            let cli = Cli::parse_from(["hourglass", "daemon"]);
            match cli.command {
                Some(Commands::Daemon(args)) => {
                    assert!(args.socket.is_none());
                    assert!(args.sound.is_none());
                    assert!(!args.no_sound);
                }
                _ => panic!("Expected Daemon command"),
            }
        }

        #[test]
        fn test_parse_daemon_with_options() {
            let cli = Cli::parse_from([
                "hourglass",
                "daemon",
                "--socket",
                "/tmp/hg.sock",
                "--no-sound",
            ]);
            match cli.command {
                Some(Commands::Daemon(args)) => {
                    assert_eq!(args.socket, Some(PathBuf::from("/tmp/hg.sock")));
                    assert!(args.no_sound);
                }
                _ => panic!("Expected Daemon command"),
            }
        }

        #[test]
        fn test_parse_completions_bash() {
            let cli = Cli::parse_from(["hourglass", "completions", "bash"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Bash);
                }
                _ => panic!("Expected Completions command"),
            }
        }

        #[test]
        fn test_parse_completions_zsh() {
            let cli = Cli::parse_from(["hourglass", "completions", "zsh"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Zsh);
                }
                _ => panic!("Expected Completions command"),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Select Command Tests
    // ------------------------------------------------------------------------

    mod select_args_tests {
        use super::*;

        #[test]
        fn test_parse_select_defaults() {
            let cli = Cli::parse_from(["hourglass", "select"]);
            match cli.command {
                Some(Commands::Select(args)) => {
                    assert_eq!(args.hours, 0);
                    assert_eq!(args.minutes, 0);
                    assert_eq!(args.seconds, 0);
                }
                _ => panic!("Expected Select command"),
            }
        }

        #[test]
        fn test_parse_select_all_components() {
            let cli = Cli::parse_from([
                "hourglass", "select", "--hours", "1", "--minutes", "30", "--seconds", "15",
            ]);
            match cli.command {
                Some(Commands::Select(args)) => {
                    assert_eq!(args.hours, 1);
                    assert_eq!(args.minutes, 30);
                    assert_eq!(args.seconds, 15);
                }
                _ => panic!("Expected Select command"),
            }
        }

        #[test]
        fn test_parse_select_short_flags() {
            let cli = Cli::parse_from(["hourglass", "select", "-M", "5", "-S", "30"]);
            match cli.command {
                Some(Commands::Select(args)) => {
                    assert_eq!(args.hours, 0);
                    assert_eq!(args.minutes, 5);
                    assert_eq!(args.seconds, 30);
                }
                _ => panic!("Expected Select command"),
            }
        }

        #[test]
        fn test_parse_select_boundary_values() {
            let cli = Cli::parse_from([
                "hourglass", "select", "-H", "99", "-M", "59", "-S", "59",
            ]);
            match cli.command {
                Some(Commands::Select(args)) => {
                    assert_eq!(args.hours, 99);
                    assert_eq!(args.minutes, 59);
                    assert_eq!(args.seconds, 59);
                }
                _ => panic!("Expected Select command"),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Start Command Tests
    // ------------------------------------------------------------------------

    mod start_args_tests {
        use super::*;

        #[test]
        fn test_parse_start_no_selection() {
            let cli = Cli::parse_from(["hourglass", "start"]);
            match cli.command {
                Some(Commands::Start(args)) => {
                    assert!(args.hours.is_none());
                    assert!(args.minutes.is_none());
                    assert!(args.seconds.is_none());
                }
                _ => panic!("Expected Start command"),
            }
        }

        #[test]
        fn test_parse_start_inline_selection() {
            let cli = Cli::parse_from(["hourglass", "start", "-M", "25"]);
            match cli.command {
                Some(Commands::Start(args)) => {
                    assert!(args.hours.is_none());
                    assert_eq!(args.minutes, Some(25));
                    assert!(args.seconds.is_none());
                }
                _ => panic!("Expected Start command"),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Error Case Tests (using try_parse)
    // ------------------------------------------------------------------------

    mod error_tests {
        use super::*;

        #[test]
        fn test_parse_select_hours_too_high() {
            let result = Cli::try_parse_from(["hourglass", "select", "-H", "100"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_select_minutes_too_high() {
            let result = Cli::try_parse_from(["hourglass", "select", "-M", "60"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_select_seconds_too_high() {
            let result = Cli::try_parse_from(["hourglass", "select", "-S", "60"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_start_minutes_too_high() {
            let result = Cli::try_parse_from(["hourglass", "start", "-M", "60"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_select_not_a_number() {
            let result = Cli::try_parse_from(["hourglass", "select", "-M", "abc"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_select_negative() {
            let result = Cli::try_parse_from(["hourglass", "select", "-M", "-5"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_unknown_command() {
            let result = Cli::try_parse_from(["hourglass", "unknown"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_completions_invalid_shell() {
            let result = Cli::try_parse_from(["hourglass", "completions", "invalid"]);
            assert!(result.is_err());
        }
    }
}
