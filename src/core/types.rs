/// The linkage key: birth year, gender and postal code of one record.
///
/// A key only exists when all three quasi-identifiers are present, so two
/// records that are both missing a field can never compare equal on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuasiKey<'a> {
    pub birth_year: &'a str,
    pub gender: &'a str,
    pub postal_code: &'a str,
}

impl std::fmt::Display for QuasiKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.birth_year, self.gender, self.postal_code)
    }
}

/// Which dataset a collection of records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Source {
    /// Identity-bearing auxiliary data (poll or voter rolls)
    Poll,
    /// Anonymized disease records
    Disease,
}

impl Source {
    /// Number of fields a row of this source must carry
    #[must_use]
    pub fn field_count(self) -> usize {
        match self {
            Self::Poll => 5,
            Self::Disease => 7,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poll => write!(f, "poll"),
            Self::Disease => write!(f, "disease"),
        }
    }
}
