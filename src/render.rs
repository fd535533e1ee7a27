use std::io::Write;

use crate::models::Record;

/// Article page prefix; the record id is appended as-is.
pub const PUBMED_URL: &str = "http://www.ncbi.nlm.nih.gov/pubmed/";

/// Write the six-line HTML fragment for one record.
///
/// Fields are interpolated verbatim, without HTML escaping.
pub fn write_fragment<W>(out: &mut W, record: &Record<'_>) -> std::io::Result<()>
where
    W: Write + ?Sized,
{
    let Record { id, title, body } = record;
    writeln!(out, "<div id={id}>")?;
    writeln!(out, "<h1>{title}")?;
    writeln!(
        out,
        "<br/><span style=\"font-size:0.5em;\"><a href=\"{PUBMED_URL}{id}\">{id}</a></span>"
    )?;
    writeln!(out, "</h1>")?;
    writeln!(out, "<p>{body}</p>")?;
    writeln!(out, "</div>")
}
