use std::io::{self, Write};

use clap::Parser;

use pubmed_html::cli::commands::Cli;
use pubmed_html::cli::output;
use pubmed_html::config::Config;
use pubmed_html::{formatter, logging};

fn main() {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    logging::init(config.verbosity);

    if let Err(e) = run(&config) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(config: &Config) -> pubmed_html::error::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diag = stderr.lock();

    let result = formatter::format_all(config, &mut out, &mut diag);
    // Keep fragments written before a fatal error.
    if let Err(e) = out.flush() {
        tracing::warn!("cannot flush stdout: {e}");
    }
    result.map(|_| ())
}
