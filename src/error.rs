use std::fmt::Display;

pub type Result<T> = std::result::Result<T, SliceError>;

/// Errors of slice generation.
/// Lookups, comparisons and partitions never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    /// Requested `index` doesn't fit in a slice of size `max`.
    IndexOutOfRange { index: usize, max: usize },
    /// There is nothing to fill the slice with.
    NoCandidates,
}

impl SliceError {
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl Display for SliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, max } => {
                write!(f, "index {} out of range in slice size {}", index, max)
            }
            Self::NoCandidates => write!(f, "test slices must be able to contain values"),
        }
    }
}

impl std::error::Error for SliceError {}
