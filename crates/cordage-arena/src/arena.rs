//! The block arena.
//!
//! [`Arena`] owns a list of [`Block`]s and serves aligned sub-allocations by
//! bumping the cursor of the newest block. When the newest block cannot hold
//! a request, a fresh block is allocated and becomes current; the unused
//! tail of the previous block is abandoned. Nothing is freed until the arena
//! itself is dropped, at which point every block is released at once.
//!
//! Allocation takes `&self`, so many structures (cords, typed allocators,
//! buffers) can draw from one arena at the same time. The borrow checker
//! ties every reference handed out to the arena's lifetime.

use std::alloc::{handle_alloc_error, Layout};
use std::cell::RefCell;
use std::fmt;
use std::ptr::NonNull;

use crate::block::Block;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::raw;

/// Point-in-time usage counters for an [`Arena`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Number of blocks allocated so far.
    pub block_count: usize,
    /// Sum of all block capacities in bytes.
    pub capacity_bytes: usize,
    /// Sum of bytes consumed in all blocks, including alignment padding.
    pub used_bytes: usize,
}

/// A bump-pointer arena built from fixed-size blocks.
///
/// # Lifetimes
///
/// Every pointer or reference returned by the arena stays valid, at the
/// same address, until the arena is dropped. Values moved in with
/// [`Arena::alloc`] are never dropped; their storage is simply released.
///
/// # Thread safety
///
/// The arena is neither `Send` nor `Sync`. Confine it to one owner.
///
/// # Example
///
/// ```rust
/// use cordage_arena::Arena;
///
/// let arena = Arena::new();
/// let n = arena.alloc(7u64);
/// let s = arena.alloc_slice_copy(b"hello");
/// *n += 1;
/// assert_eq!((*n, &*s), (8, &b"hello"[..]));
/// assert_eq!(arena.block_count(), 1);
/// ```
pub struct Arena {
    config: ArenaConfig,
    /// Oldest first; the last block is the current one.
    blocks: RefCell<Vec<Block>>,
}

impl Arena {
    /// Create an empty arena with the default 4 KiB block size.
    ///
    /// No memory is allocated until the first request.
    pub fn new() -> Self {
        Self {
            config: ArenaConfig::new(),
            blocks: RefCell::new(Vec::new()),
        }
    }

    /// Create an empty arena with a validated custom configuration.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            config,
            blocks: RefCell::new(Vec::new()),
        })
    }

    /// Shorthand for [`Arena::with_config`] with only the block size set.
    pub fn with_block_size(block_size: usize) -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::with_block_size(block_size))
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Allocate `size` bytes aligned to `align`.
    ///
    /// Requests larger than the configured block size get a dedicated
    /// block sized to fit, placed behind the current block so bumping
    /// continues where it left off. Zero-size requests are valid and
    /// return an aligned pointer into the current block.
    pub fn try_allocate(&self, size: usize, align: usize) -> Result<NonNull<u8>, ArenaError> {
        Layout::from_size_align(size, align)
            .map_err(|_| ArenaError::InvalidLayout { size, align })?;

        let mut blocks = self.blocks.borrow_mut();
        if let Some(ptr) = blocks.last_mut().and_then(|b| b.bump(size, align)) {
            return Ok(ptr);
        }

        let oversized = size > self.config.block_size;
        let capacity = if oversized { size } else { self.config.block_size };
        // Base alignment >= `align`, so offset 0 of the new block always fits.
        let mut block = Block::new(capacity, align.max(ArenaConfig::BLOCK_ALIGN))?;
        let ptr = block
            .bump(size, align)
            .ok_or(ArenaError::InvalidLayout { size, align })?;
        // A dedicated block goes behind the current one so the remaining
        // room in the current block stays usable.
        let block_index = match blocks.len() {
            n if oversized && n > 0 => n - 1,
            n => n,
        };
        tracing::debug!(block_index, capacity, oversized, "arena block allocated");
        blocks.insert(block_index, block);
        Ok(ptr)
    }

    /// Allocate `size` bytes aligned to `align`, treating failure as fatal.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two or `size` overflows once
    /// padded. Aborts through [`handle_alloc_error`] if the system cannot
    /// supply a new block.
    pub fn allocate(&self, size: usize, align: usize) -> NonNull<u8> {
        match self.try_allocate(size, align) {
            Ok(ptr) => ptr,
            Err(ArenaError::AllocationFailed { size, align }) => {
                match Layout::from_size_align(size, align) {
                    Ok(layout) => handle_alloc_error(layout),
                    Err(_) => panic!("arena block allocation failed: {size} bytes"),
                }
            }
            Err(err) => panic!("{err}"),
        }
    }

    /// [`Arena::allocate`] for a precomputed [`Layout`].
    pub fn alloc_layout(&self, layout: Layout) -> NonNull<u8> {
        self.allocate(layout.size(), layout.align())
    }

    /// Move `value` into the arena and return a mutable reference to it.
    ///
    /// The value's destructor never runs.
    #[allow(unsafe_code)]
    pub fn alloc<T>(&self, value: T) -> &mut T {
        let ptr = self.alloc_layout(Layout::new::<T>()).cast::<T>();
        // SAFETY: `ptr` is fresh storage sized and aligned for `T`, handed
        // out exactly once, and lives as long as `self`.
        unsafe { raw::write_value(ptr, value) }
    }

    /// Copy `src` into the arena.
    #[allow(unsafe_code)]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &mut [T] {
        let ptr = self.alloc_layout(array_layout::<T>(src.len())).cast::<T>();
        // SAFETY: `ptr` is fresh storage for `src.len()` aligned `T`s,
        // handed out exactly once, and lives as long as `self`.
        unsafe { raw::copy_slice(ptr, src) }
    }

    /// Allocate `len` copies of `value` as one contiguous slice.
    #[allow(unsafe_code)]
    pub fn alloc_slice_fill_copy<T: Copy>(&self, len: usize, value: T) -> &mut [T] {
        let ptr = self.alloc_layout(array_layout::<T>(len)).cast::<T>();
        // SAFETY: as in `alloc_slice_copy`, for `len` elements.
        unsafe { raw::fill_slice(ptr, len, value) }
    }

    /// Copy a string into the arena.
    #[allow(unsafe_code)]
    pub fn alloc_str(&self, src: &str) -> &mut str {
        let ptr = self.allocate(src.len(), 1);
        // SAFETY: `ptr` is fresh storage for `src.len()` bytes, handed out
        // exactly once, and lives as long as `self`.
        unsafe { raw::copy_str(ptr, src) }
    }

    /// Number of blocks allocated so far.
    pub fn block_count(&self) -> usize {
        self.blocks.borrow().len()
    }

    /// Current usage counters.
    pub fn stats(&self) -> ArenaStats {
        summarize(&self.blocks.borrow())
    }
}

fn array_layout<T>(len: usize) -> Layout {
    match Layout::array::<T>(len) {
        Ok(layout) => layout,
        Err(_) => panic!(
            "arena capacity overflow: {len} elements of {} bytes",
            std::mem::size_of::<T>()
        ),
    }
}

fn summarize(blocks: &[Block]) -> ArenaStats {
    blocks.iter().fold(ArenaStats::default(), |acc, b| ArenaStats {
        block_count: acc.block_count + 1,
        capacity_bytes: acc.capacity_bytes + b.capacity(),
        used_bytes: acc.used_bytes + b.used(),
    })
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        let stats = summarize(self.blocks.get_mut());
        if stats.block_count > 0 {
            tracing::debug!(
                blocks = stats.block_count,
                capacity_bytes = stats.capacity_bytes,
                used_bytes = stats.used_bytes,
                "arena released"
            );
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
