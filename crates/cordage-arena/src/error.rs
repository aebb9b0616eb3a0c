//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena construction or allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena configuration was rejected by [`ArenaConfig::validate`].
    ///
    /// [`ArenaConfig::validate`]: crate::config::ArenaConfig::validate
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },
    /// A size/alignment pair that cannot describe a valid memory layout
    /// (alignment not a power of two, or size overflowing once padded).
    InvalidLayout {
        /// Number of bytes requested.
        size: usize,
        /// Alignment requested.
        align: usize,
    },
    /// The system allocator could not supply storage for a new block.
    AllocationFailed {
        /// Size of the block that could not be allocated.
        size: usize,
        /// Alignment of the block that could not be allocated.
        align: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
            Self::InvalidLayout { size, align } => {
                write!(f, "invalid layout: {size} bytes aligned to {align}")
            }
            Self::AllocationFailed { size, align } => {
                write!(
                    f,
                    "block allocation failed: {size} bytes aligned to {align}"
                )
            }
        }
    }
}

impl Error for ArenaError {}
