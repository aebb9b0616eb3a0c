//! Typed allocation front end over an [`Arena`].
//!
//! [`ArenaAllocator<T>`] turns the arena's byte-level `allocate(size, align)`
//! into element-level `allocate(n)` for a fixed `T`. It is a capability
//! object: containers take one explicitly at construction instead of
//! picking an allocator implicitly.
//!
//! Two allocators compare equal exactly when they draw from the same arena,
//! whatever their element types. Memory from one may be handed to the
//! `deallocate` of the other, which is always a no-op anyway.

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::arena::Arena;
use crate::error::ArenaError;

/// Element-typed view of an [`Arena`].
pub struct ArenaAllocator<'a, T> {
    arena: &'a Arena,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> ArenaAllocator<'a, T> {
    /// Wrap an arena.
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            _marker: PhantomData,
        }
    }

    /// The same arena, viewed for a different element type.
    pub fn rebind<U>(self) -> ArenaAllocator<'a, U> {
        ArenaAllocator::new(self.arena)
    }

    /// The underlying arena.
    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    /// Whether `other` draws from the same arena.
    pub fn is_same_arena<U>(&self, other: &ArenaAllocator<'_, U>) -> bool {
        ptr::eq(self.arena, other.arena)
    }

    /// Uninitialised storage for `n` values of `T`.
    pub fn try_allocate(&self, n: usize) -> Result<NonNull<T>, ArenaError> {
        let layout = Layout::array::<T>(n).map_err(|_| ArenaError::InvalidLayout {
            size: std::mem::size_of::<T>().saturating_mul(n),
            align: std::mem::align_of::<T>(),
        })?;
        self.arena
            .try_allocate(layout.size(), layout.align())
            .map(NonNull::cast)
    }

    /// Uninitialised storage for `n` values of `T`, treating failure as fatal.
    ///
    /// # Panics
    ///
    /// Panics if `n * size_of::<T>()` overflows.
    pub fn allocate(&self, n: usize) -> NonNull<T> {
        match Layout::array::<T>(n) {
            Ok(layout) => self.arena.alloc_layout(layout).cast(),
            Err(_) => panic!("arena capacity overflow: {n} elements"),
        }
    }

    /// Individual frees are not supported; storage is reclaimed when the
    /// arena drops.
    pub fn deallocate(&self, _ptr: NonNull<T>, _n: usize) {}

    /// Move `value` into the arena.
    pub fn alloc(&self, value: T) -> &'a mut T {
        self.arena.alloc(value)
    }

    /// Allocate `n` copies of `value` as one initialised slice.
    pub fn alloc_slice_fill(&self, n: usize, value: T) -> &'a mut [T]
    where
        T: Copy,
    {
        self.arena.alloc_slice_fill_copy(n, value)
    }
}

impl<T> Clone for ArenaAllocator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaAllocator<'_, T> {}

impl<'a, T> From<&'a Arena> for ArenaAllocator<'a, T> {
    fn from(arena: &'a Arena) -> Self {
        Self::new(arena)
    }
}

impl<T, U> PartialEq<ArenaAllocator<'_, U>> for ArenaAllocator<'_, T> {
    fn eq(&self, other: &ArenaAllocator<'_, U>) -> bool {
        self.is_same_arena(other)
    }
}

impl<T> Eq for ArenaAllocator<'_, T> {}

impl<T> fmt::Debug for ArenaAllocator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaAllocator")
            .field("arena", &ptr::from_ref(self.arena))
            .field("element", &std::any::type_name::<T>())
            .finish()
    }
}
