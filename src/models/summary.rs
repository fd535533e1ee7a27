use std::ops::AddAssign;

/// Line counters for one file or a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files read to the end.
    pub files: usize,
    /// Fragments written.
    pub records: usize,
    /// Lines echoed to the diagnostic stream.
    pub malformed: usize,
    pub blank: usize,
}

impl Summary {
    #[must_use]
    pub fn lines(&self) -> usize {
        self.records + self.malformed + self.blank
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.records += other.records;
        self.malformed += other.malformed;
        self.blank += other.blank;
    }
}
