use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pubmed-html",
    version,
    about = "Render tab-separated PubMed records as HTML fragments",
    after_help = "Each non-blank input line must hold ID<TAB>TITLE<TAB>BODY. \
                  Fragments are written to stdout; lines that do not split into \
                  three fields are echoed unchanged to stderr."
)]
pub struct Cli {
    /// Tab-separated input files, processed in order
    pub files: Vec<PathBuf>,

    /// Log errors only
    #[arg(short, long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    /// Log progress and a run summary
    #[arg(short, long, conflicts_with = "debug")]
    pub verbose: bool,

    /// Log debug messages
    #[arg(short, long)]
    pub debug: bool,

    /// Continue with the remaining files when one cannot be read
    #[arg(long)]
    pub keep_going: bool,
}
