//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the block arena.
///
/// Controls how large each block is. Validated by [`Arena::with_config`];
/// immutable once the arena is built.
///
/// [`Arena::with_config`]: crate::arena::Arena::with_config
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Capacity of each regular block in bytes.
    ///
    /// Default: 4096. Should be at least as large as the largest single
    /// allocation expected on the hot path; larger requests still succeed
    /// but each one gets a dedicated block.
    pub block_size: usize,
}

impl ArenaConfig {
    /// Default block size: one 4 KiB page.
    pub const DEFAULT_BLOCK_SIZE: usize = 4096;

    /// Upper bound on `block_size` (1 GiB).
    pub const MAX_BLOCK_SIZE: usize = 1 << 30;

    /// Alignment of every block's base address.
    ///
    /// Matches the largest fundamental alignment on mainstream targets, so
    /// any primitive type can be placed at offset zero without padding.
    pub const BLOCK_ALIGN: usize = 16;

    /// Create a config with the default block size.
    pub fn new() -> Self {
        Self {
            block_size: Self::DEFAULT_BLOCK_SIZE,
        }
    }

    /// Create a config with a custom block size.
    pub fn with_block_size(block_size: usize) -> Self {
        Self { block_size }
    }

    /// Check that the configuration can back an arena.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.block_size == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "block_size must be non-zero".into(),
            });
        }
        if self.block_size > Self::MAX_BLOCK_SIZE {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "block_size {} exceeds maximum {}",
                    self.block_size,
                    Self::MAX_BLOCK_SIZE
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
