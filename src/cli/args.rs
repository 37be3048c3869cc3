//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "rovercam")]
#[command(about = "Browse NASA Mars rover photos from the terminal", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Earth date to query (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Martian sol to query
    #[arg(short, long, global = true)]
    pub(crate) sol: Option<u32>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// NASA API key (overrides NASA_API_KEY and the config file)
    #[arg(long, global = true, value_name = "KEY")]
    pub(crate) api_key: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (request and decode details on stderr)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            match color {
                ConfigColorMode::Always => self.color = ColorMode::Always,
                ConfigColorMode::Never => self.color = ColorMode::Never,
                ConfigColorMode::Auto => {}
            }
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_color_applies_when_cli_is_default() {
        let cli = Cli::parse_from(["rovercam"]);
        let config = Config {
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = cli.with_config(&config);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(!cli.use_color());
    }

    #[test]
    fn cli_color_wins_over_config() {
        let cli = Cli::parse_from(["rovercam", "--color", "always"]);
        let config = Config {
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = cli.with_config(&config);
        assert_eq!(cli.color, ColorMode::Always);
        assert!(cli.use_color());
    }

    #[test]
    fn no_color_overrides_always() {
        let cli = Cli::parse_from(["rovercam", "--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }

    #[test]
    fn config_debug_merges_in() {
        let cli = Cli::parse_from(["rovercam"]);
        let config = Config {
            debug: true,
            ..Config::default()
        };
        assert!(cli.with_config(&config).debug);
    }
}
