use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum RangeIndexError {
    /// A range tree cannot be built over zero points.
    #[error("cannot build a range tree from an empty point set")]
    EmptyPointSet,
}

pub type Result<T> = std::result::Result<T, RangeIndexError>;
