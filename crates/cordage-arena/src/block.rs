//! Fixed-capacity storage blocks with bump allocation.
//!
//! A [`Block`] wraps one raw region and a `used` cursor. Requests are
//! carved off the front of the free tail; a request that does not fit is
//! never split across blocks.

use std::ptr::NonNull;

use crate::error::ArenaError;
use crate::raw::RawBlock;

/// One contiguous storage region owned by an [`Arena`](crate::Arena).
pub(crate) struct Block {
    raw: RawBlock,
    /// Offset of the next free byte. Always `<= capacity`.
    used: usize,
}

impl Block {
    /// Allocate a fresh, empty block.
    pub(crate) fn new(capacity: usize, align: usize) -> Result<Self, ArenaError> {
        Ok(Self {
            raw: RawBlock::new(capacity, align)?,
            used: 0,
        })
    }

    /// Offset at which a `size`-byte request aligned to `align` would start,
    /// or `None` if the remaining space cannot hold it.
    ///
    /// `align` must be a power of two.
    fn fit(&self, size: usize, align: usize) -> Option<usize> {
        let base = self.raw.base_addr();
        let cursor = base.checked_add(self.used)?;
        let aligned = cursor.checked_add(align - 1)? & !(align - 1);
        let start = aligned - base;
        let end = start.checked_add(size)?;
        (end <= self.raw.capacity()).then_some(start)
    }

    /// Bump-allocate `size` bytes aligned to `align`.
    ///
    /// Returns `None` without touching the cursor if the block is too full.
    pub(crate) fn bump(&mut self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let start = self.fit(size, align)?;
        self.used = start + size;
        Some(self.raw.at(start))
    }

    /// Bytes consumed so far, including alignment padding.
    pub(crate) fn used(&self) -> usize {
        self.used
    }

    /// Total capacity in bytes.
    pub(crate) fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
