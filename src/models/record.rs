/// One citation parsed from a tab-separated line. Borrows from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Article identifier (a PubMed ID in practice, not validated).
    pub id: &'a str,
    pub title: &'a str,
    /// Everything after the second tab, internal tabs included.
    pub body: &'a str,
}

/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F, which also count as blank padding in this input.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn strip(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming; produces neither output nor diagnostic.
    Blank,
    /// Fewer than three tab-separated fields. Holds the untouched line.
    Malformed(&'a str),
    Record(Record<'a>),
}

impl<'a> Line<'a> {
    /// Classify a line (without its terminator).
    ///
    /// The split is bounded to three parts so tabs inside the body survive.
    /// Fields are trimmed independently; empty fields are accepted.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        if strip(line).is_empty() {
            return Self::Blank;
        }

        let mut parts = line.splitn(3, '\t');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(title), Some(body)) => Self::Record(Record {
                id: strip(id),
                title: strip(title),
                body: strip(body),
            }),
            _ => Self::Malformed(line),
        }
    }
}
