//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use themekeeper::Theme;

/// Show, toggle and persist the light/dark theme preference.
#[derive(Debug, Parser)]
#[command(name = "themekeeper", version, about)]
pub struct Cli {
    /// Preference store (a JSON file)
    #[arg(
        long,
        global = true,
        env = "THEMEKEEPER_STORE",
        default_value = ".themekeeper.json",
        value_name = "PATH"
    )]
    pub store: PathBuf,

    /// YAML file overriding storage key, attribute and icon names
    #[arg(long, global = true, env = "THEMEKEEPER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output mode
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the displayed theme and where it comes from (default)
    Show,
    /// Switch to the other theme and remember the choice
    Toggle,
    /// Choose a theme explicitly
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    /// Forget the explicit choice and follow the system again
    Reset,
    /// Follow system color-scheme changes until interrupted
    Watch {
        /// Milliseconds between checks of the system setting
        #[arg(long, default_value_t = 1000, value_name = "MS")]
        interval_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout is a terminal, plain otherwise
    Auto,
    Term,
    Text,
    Json,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse().map_err(|e: themekeeper::ParseThemeError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["themekeeper"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.output, OutputMode::Auto);
    }

    #[test]
    fn test_set_parses_theme() {
        let cli = Cli::try_parse_from(["themekeeper", "set", "dark"]).unwrap();
        assert_eq!(cli.command, Some(Command::Set { theme: Theme::Dark }));
    }

    #[test]
    fn test_set_rejects_unknown_theme() {
        let err = Cli::try_parse_from(["themekeeper", "set", "sepia"]).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "themekeeper",
            "toggle",
            "--store",
            "/tmp/prefs.json",
            "--output",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Toggle));
        assert_eq!(cli.store, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(cli.output, OutputMode::Json);
    }

    #[test]
    fn test_watch_interval() {
        let cli = Cli::try_parse_from(["themekeeper", "watch", "--interval-ms", "250"]).unwrap();
        assert_eq!(cli.command, Some(Command::Watch { interval_ms: 250 }));
    }
}
