use std::fmt;
use std::str::FromStr;

use crate::error::SzzError;

/// A Mercurial local revision number.
///
/// Kept numeric so "earliest revision" comparisons are well defined; the
/// string form doubles as the query key for hg invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    pub const fn new(number: u64) -> Self {
        Revision(number)
    }

    pub fn number(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Revision {
    type Err = SzzError;

    fn from_str(s: &str) -> Result<Self, SzzError> {
        let trimmed = s.trim();
        trimmed
            .parse::<u64>()
            .map(Revision)
            .map_err(|_| SzzError::RevisionParseError {
                input: trimmed.to_string(),
            })
    }
}
