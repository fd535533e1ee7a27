//! Turns tab-separated citation files into HTML fragments.
//!
//! Fragments go to `out`, malformed lines are echoed to `diag`. Both are
//! plain [`Write`] sinks so the binary can hand in stdout/stderr and tests
//! can hand in buffers.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{PubmedError, Result};
use crate::models::{Line, Summary};
use crate::render;

/// Format every line read from `reader`, counting into `summary`.
///
/// Counters are updated line by line, so a file that fails partway through
/// still accounts for the lines already handled. `files` is only bumped once
/// the reader is exhausted. `path` is used for error reporting and logging.
pub fn format_reader<R, O, D>(
    reader: R,
    path: &Path,
    out: &mut O,
    diag: &mut D,
    summary: &mut Summary,
) -> Result<()>
where
    R: BufRead,
    O: Write + ?Sized,
    D: Write + ?Sized,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| PubmedError::file_access(path, e))?;
        match Line::parse(&line) {
            Line::Blank => summary.blank += 1,
            Line::Malformed(raw) => {
                tracing::debug!(path = %path.display(), line = idx + 1, "skipping malformed line");
                writeln!(diag, "{raw}")?;
                summary.malformed += 1;
            }
            Line::Record(record) => {
                render::write_fragment(out, &record)?;
                summary.records += 1;
            }
        }
    }

    summary.files += 1;
    Ok(())
}

/// Open `path` and format its lines into `summary`.
pub fn format_file<O, D>(
    path: &Path,
    out: &mut O,
    diag: &mut D,
    summary: &mut Summary,
) -> Result<()>
where
    O: Write + ?Sized,
    D: Write + ?Sized,
{
    let file = File::open(path).map_err(|e| PubmedError::file_access(path, e))?;
    tracing::info!(path = %path.display(), "formatting");
    format_reader(BufReader::new(file), path, out, diag, summary)
}

/// Format all configured input files in order.
///
/// The first unreadable file aborts the run unless `config.keep_going` is
/// set, in which case the failure is logged, the remaining files are still
/// formatted and [`PubmedError::FilesFailed`] is returned at the end.
pub fn format_all<O, D>(config: &Config, out: &mut O, diag: &mut D) -> Result<Summary>
where
    O: Write + ?Sized,
    D: Write + ?Sized,
{
    let mut total = Summary::default();
    let mut failed = 0;

    for path in &config.inputs {
        match format_file(path, out, diag, &mut total) {
            Ok(()) => {}
            Err(err @ PubmedError::FileAccess { .. }) if config.keep_going => {
                tracing::error!("{err}");
                failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    out.flush()?;
    diag.flush()?;

    tracing::info!(
        files = total.files,
        failed,
        lines = total.lines(),
        records = total.records,
        malformed = total.malformed,
        blank = total.blank,
        "done"
    );

    if failed > 0 {
        return Err(PubmedError::FilesFailed { failed });
    }
    Ok(total)
}
