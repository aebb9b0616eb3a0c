//! Low-level primitives for block storage.
//!
//! This is the only module of the crate that talks to the global allocator
//! or writes through raw pointers. Each `unsafe` function states its
//! contract under `# Safety`, and each `unsafe` block carries a
//! `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::ArenaError;

/// An owned, uninitialised region obtained from the global allocator.
///
/// The region never moves and is released exactly once, on drop.
pub(crate) struct RawBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl RawBlock {
    /// Allocate `size` bytes whose base address is a multiple of `align`.
    pub(crate) fn new(size: usize, align: usize) -> Result<Self, ArenaError> {
        let layout = Layout::from_size_align(size, align)
            .map_err(|_| ArenaError::InvalidLayout { size, align })?;
        if layout.size() == 0 {
            return Err(ArenaError::InvalidLayout { size, align });
        }
        // SAFETY: `layout` has a non-zero size (checked above).
        let ptr = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(ptr).ok_or(ArenaError::AllocationFailed { size, align })?;
        Ok(Self { ptr, layout })
    }

    /// Size of the region in bytes.
    pub(crate) fn capacity(&self) -> usize {
        self.layout.size()
    }

    /// Address of the first byte, for alignment arithmetic.
    pub(crate) fn base_addr(&self) -> usize {
        self.ptr.as_ptr().addr()
    }

    /// Pointer `offset` bytes into the region.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of the region.
    pub(crate) fn at(&self, offset: usize) -> NonNull<u8> {
        assert!(
            offset <= self.capacity(),
            "offset {offset} outside block of {} bytes",
            self.capacity()
        );
        // SAFETY: `offset <= capacity`, so the result points into the
        // allocation or one past its end, and cannot wrap.
        unsafe { self.ptr.add(offset) }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        // SAFETY: `ptr` was returned by `alloc::alloc` with exactly this
        // layout and is released only here.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

/// Move `value` into arena storage and return a unique reference to it.
///
/// # Safety
///
/// `ptr` must be aligned for `T`, valid for writes of one `T`, not aliased
/// by any other live reference, and remain valid for `'a`.
pub(crate) unsafe fn write_value<'a, T>(ptr: NonNull<T>, value: T) -> &'a mut T {
    // SAFETY: the caller guarantees `ptr` is aligned, writable and unaliased.
    unsafe {
        ptr.as_ptr().write(value);
        &mut *ptr.as_ptr()
    }
}

/// Initialise `len` slots at `ptr` with `value` and return them as a slice.
///
/// # Safety
///
/// `ptr` must be aligned for `T`, valid for writes of `len` consecutive
/// `T`s, not aliased by any other live reference, and remain valid for `'a`.
pub(crate) unsafe fn fill_slice<'a, T: Copy>(ptr: NonNull<T>, len: usize, value: T) -> &'a mut [T] {
    // SAFETY: every slot in `[0, len)` is written before the slice is formed.
    unsafe {
        for i in 0..len {
            ptr.as_ptr().add(i).write(value);
        }
        std::slice::from_raw_parts_mut(ptr.as_ptr(), len)
    }
}

/// Copy `src` into the storage at `ptr` and return the copy as a slice.
///
/// # Safety
///
/// Same contract as [`fill_slice`] with `len = src.len()`; additionally the
/// destination must not overlap `src`.
pub(crate) unsafe fn copy_slice<'a, T: Copy>(ptr: NonNull<T>, src: &[T]) -> &'a mut [T] {
    // SAFETY: the destination is fresh arena storage, so it cannot overlap
    // `src`, and all `src.len()` slots are initialised by the copy.
    unsafe {
        std::ptr::copy_nonoverlapping(src.as_ptr(), ptr.as_ptr(), src.len());
        std::slice::from_raw_parts_mut(ptr.as_ptr(), src.len())
    }
}

/// Copy a string into the storage at `ptr`.
///
/// # Safety
///
/// Same contract as [`copy_slice`] for `src.len()` bytes.
pub(crate) unsafe fn copy_str<'a>(ptr: NonNull<u8>, src: &str) -> &'a mut str {
    // SAFETY: the bytes are copied verbatim from a `str`, so they are valid
    // UTF-8; the storage contract is forwarded to `copy_slice`.
    unsafe {
        let bytes = copy_slice(ptr, src.as_bytes());
        std::str::from_utf8_unchecked_mut(bytes)
    }
}
