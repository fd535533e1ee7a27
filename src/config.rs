use std::path::PathBuf;

use tracing::Level;

use crate::cli::commands::Cli;

/// How much the run logs to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Adds per-file progress and the run summary.
    Verbose,
    /// Adds per-line decisions.
    Debug,
}

impl Verbosity {
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
        }
    }
}

/// Run configuration resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input files, formatted in this order.
    pub inputs: Vec<PathBuf>,
    /// Continue with the next file when one cannot be read.
    pub keep_going: bool,
    pub verbosity: Verbosity,
}

impl Config {
    /// Config for the given inputs with default settings.
    #[must_use]
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Build the config from parsed arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let verbosity = if cli.debug {
            Verbosity::Debug
        } else if cli.verbose {
            Verbosity::Verbose
        } else if cli.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };

        Self {
            keep_going: cli.keep_going,
            verbosity,
            ..Self::new(cli.files.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Config {
        let cli = Cli::try_parse_from(std::iter::once("pubmed-html").chain(args.iter().copied()))
            .unwrap();
        Config::from_cli(&cli)
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]);
        assert!(cfg.inputs.is_empty());
        assert!(!cfg.keep_going);
        assert_eq!(cfg.verbosity, Verbosity::Normal);
        assert_eq!(cfg.verbosity.level(), Level::WARN);
    }

    #[test]
    fn inputs_keep_argument_order() {
        let cfg = parse(&["b.tsv", "a.tsv"]);
        assert_eq!(cfg.inputs, [PathBuf::from("b.tsv"), PathBuf::from("a.tsv")]);
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(parse(&["-q"]).verbosity, Verbosity::Quiet);
        assert_eq!(parse(&["-v"]).verbosity, Verbosity::Verbose);
        assert_eq!(parse(&["--debug"]).verbosity, Verbosity::Debug);
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::Debug.level(), Level::DEBUG);
    }

    #[test]
    fn keep_going_flag() {
        assert!(parse(&["--keep-going", "x.tsv"]).keep_going);
    }

    #[test]
    fn conflicting_verbosity_flags_are_rejected() {
        assert!(Cli::try_parse_from(["pubmed-html", "-q", "-v"]).is_err());
    }
}
