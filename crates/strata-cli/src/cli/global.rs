//! Flags accepted by every `strata` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Log more: -v lists every deleted item, -vv shows resolved stack info, -vvv traces
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only; housekeeping warnings are hidden as well
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colours
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of ./strata.yaml or ./strata.toml
    #[arg(short, long, global = true, value_name = "FILE", env = "STRATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// How command results are written to stdout
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Maximum level of events printed to stderr.
    ///
    /// Warnings stay visible by default because failed deletions during
    /// `terraform clean` are reported as warnings rather than errors.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    /// Coloured, aligned fields
    Human,
    /// Uncoloured text, one value per line
    Plain,
    /// A single JSON document
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    fn parse(args: &[&str]) -> GlobalArgs {
        Harness::try_parse_from(std::iter::once("strata").chain(args.iter().copied()))
            .unwrap()
            .global
    }

    #[test]
    fn default_level_keeps_warnings() {
        assert_eq!(parse(&[]).log_level(), LevelFilter::WARN);
    }

    #[test]
    fn each_verbose_flag_raises_the_level() {
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::INFO);
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::DEBUG);
        assert_eq!(parse(&["-vvv"]).log_level(), LevelFilter::TRACE);
        assert_eq!(parse(&["-vvvvvvv"]).log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_only_shows_errors() {
        assert_eq!(parse(&["--quiet"]).log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn output_format_defaults_to_auto() {
        assert_eq!(parse(&[]).output_format, OutputFormat::Auto);
        assert_eq!(
            parse(&["--output-format", "json"]).output_format,
            OutputFormat::Json
        );
    }
}
