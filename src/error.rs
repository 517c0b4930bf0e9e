//! Error types for the allocator
use core::fmt;

/// Errors that can occur during allocation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// No free block in any eligible size class can satisfy the request.
    ///
    /// The allocator state is left untouched; the caller may retry with a
    /// smaller size or after freeing other blocks.
    BlockNotFound,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockNotFound => write!(f, "failed to allocate block"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for AllocError {}
