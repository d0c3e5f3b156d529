//! CLI - Command Line Interface for DarkFlix
//!
//! Every catalog and tracking operation is scriptable. All output is
//! JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # Dump the merged catalog
//! darkflix catalog --json
//!
//! # Resolve a bare id to movie or series
//! darkflix resolve 414906
//!
//! # Favorites and resume points
//! darkflix favorites --toggle 1396
//! darkflix continue
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Title not found under either kind
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// DarkFlix - terminal client for a curated movie and series catalog
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "darkflix",
    version,
    author = "Gorka & Hermes",
    about = "Dark-themed TUI for a curated movie and series catalog",
    long_about = "A terminal interface over a curated TMDB-backed catalog: \
                  browse movies and series, pick episodes, track favorites \
                  and resume points.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  darkflix                        Launch interactive TUI\n\
                  darkflix catalog --json         Dump the merged catalog\n\
                  darkflix resolve 414906         Resolve an id to its kind\n\
                  darkflix favorites -t 1396      Toggle a favorite\n\
                  darkflix continue               List resumable titles"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump the merged catalog (movies then grouped series)
    #[command(visible_alias = "cat")]
    Catalog(CatalogCmd),

    /// Resolve a numeric id to movie or series with metadata
    #[command(visible_alias = "r")]
    Resolve(ResolveCmd),

    /// List or toggle favorites
    #[command(visible_alias = "fav")]
    Favorites(FavoritesCmd),

    /// List titles with a saved resume point
    #[command(name = "continue", visible_alias = "cw")]
    Continue(ContinueCmd),
}

/// Dump the merged catalog
#[derive(Args, Debug)]
pub struct CatalogCmd {
    /// Restrict to one kind
    #[arg(long, short = 'k', value_enum)]
    pub kind: Option<KindFilter>,
}

/// Content kind filter
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    /// Movies only
    Movie,
    /// Series only
    Series,
}

/// Resolve a numeric id against TMDB
#[derive(Args, Debug)]
pub struct ResolveCmd {
    /// TMDB numeric id
    #[arg(required = true)]
    pub id: u64,
}

/// List or toggle favorites
#[derive(Args, Debug)]
pub struct FavoritesCmd {
    /// Toggle this id instead of listing
    #[arg(long, short = 't')]
    pub toggle: Option<u64>,
}

/// List resumable titles
#[derive(Args, Debug)]
pub struct ContinueCmd {}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["darkflix"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_catalog_command() {
        let cli = Cli::parse_from(["darkflix", "catalog", "-k", "movie"]);
        assert!(cli.is_cli_mode());
        if let Some(Command::Catalog(cmd)) = cli.command {
            assert_eq!(cmd.kind, Some(KindFilter::Movie));
        } else {
            panic!("Expected Catalog command");
        }
    }

    #[test]
    fn test_resolve_command() {
        let cli = Cli::parse_from(["darkflix", "resolve", "414906"]);
        if let Some(Command::Resolve(cmd)) = cli.command {
            assert_eq!(cmd.id, 414906);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn test_favorites_toggle() {
        let cli = Cli::parse_from(["darkflix", "favorites", "--toggle", "1396"]);
        if let Some(Command::Favorites(cmd)) = cli.command {
            assert_eq!(cmd.toggle, Some(1396));
        } else {
            panic!("Expected Favorites command");
        }
    }

    #[test]
    fn test_continue_alias() {
        let cli = Cli::parse_from(["darkflix", "cw"]);
        assert!(matches!(cli.command, Some(Command::Continue(_))));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["darkflix", "--json", "--quiet", "catalog"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
    }
}
