use std::fmt;

/// A site index outside the universe `[0, n)`.
///
/// Raised before any mutation, so a failed operation leaves the structure
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "site index {} out of range for a universe of {} sites",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

pub type Result<T> = std::result::Result<T, OutOfRange>;
