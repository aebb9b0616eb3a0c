//! Cord stored as one contiguous array of fragment records.
//!
//! The array lives in the arena and grows by doubling. On growth the live
//! records are copied into a new array and the old one is handed back to
//! the allocator, which for an arena means it is abandoned in place until
//! the arena drops. A running byte total is maintained on every append,
//! so flattening needs only a single pass over the records.

use std::fmt;
use std::ptr::NonNull;

use cordage_arena::{Arena, ArenaAllocator};

use crate::cord::Cord;
use crate::fragment::Fragment;

/// A cord whose fragment records sit side by side in an arena array.
///
/// # Example
///
/// ```rust
/// use cordage_arena::Arena;
/// use cordage_cord::{Cord, FlatCord, MemoryBuffer};
///
/// let arena = Arena::new();
/// let mut cord = FlatCord::new(&arena);
/// cord.append(b"flat ");
/// cord.append(b"cord");
/// assert_eq!(cord.size_bytes(), 9);
///
/// let mut buf = MemoryBuffer::new();
/// cord.flatten(&mut buf);
/// assert_eq!(buf.data(), b"flat cord");
/// ```
pub struct FlatCord<'a> {
    alloc: ArenaAllocator<'a, Fragment<'a>>,
    /// Backing array; its length is the capacity.
    slots: &'a mut [Fragment<'a>],
    len: usize,
    total_bytes: usize,
    growth_count: usize,
}

impl<'a> FlatCord<'a> {
    /// Number of slots allocated by the first growth.
    pub const INITIAL_CAPACITY: usize = 8;

    /// An empty cord drawing its array from `arena`. Allocates nothing.
    pub fn new(arena: &'a Arena) -> Self {
        Self::new_in(ArenaAllocator::new(arena))
    }

    /// An empty cord drawing its array from `alloc`. Allocates nothing.
    pub fn new_in(alloc: ArenaAllocator<'a, Fragment<'a>>) -> Self {
        Self {
            alloc,
            slots: Default::default(),
            len: 0,
            total_bytes: 0,
            growth_count: 0,
        }
    }

    /// An empty cord with room for `capacity` fragments up front.
    pub fn with_capacity(arena: &'a Arena, capacity: usize) -> Self {
        let mut cord = Self::new(arena);
        if capacity > 0 {
            cord.grow(capacity);
        }
        cord
    }

    /// The allocator supplying the backing array.
    pub fn allocator(&self) -> ArenaAllocator<'a, Fragment<'a>> {
        self.alloc
    }

    /// Total referenced bytes; same as [`Cord::total_bytes`].
    pub fn size_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Fragments the current array can hold before growing.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of times the backing array has been replaced.
    pub fn growth_count(&self) -> usize {
        self.growth_count
    }

    /// The recorded fragments as a slice, in append order.
    pub fn as_slice(&self) -> &[Fragment<'a>] {
        &self.slots[..self.len]
    }

    fn grow(&mut self, needed: usize) {
        let old_capacity = self.slots.len();
        let mut new_capacity = if old_capacity == 0 {
            Self::INITIAL_CAPACITY
        } else {
            old_capacity
                .checked_mul(2)
                .unwrap_or_else(|| panic!("flat cord capacity overflow"))
        };
        while new_capacity < needed {
            new_capacity = new_capacity
                .checked_mul(2)
                .unwrap_or_else(|| panic!("flat cord capacity overflow"));
        }

        let new_slots = self.alloc.alloc_slice_fill(new_capacity, Fragment::EMPTY);
        new_slots[..self.len].copy_from_slice(&self.slots[..self.len]);
        let old_slots = std::mem::replace(&mut self.slots, new_slots);
        let old_len = old_slots.len();
        self.alloc
            .deallocate(NonNull::from(old_slots).cast(), old_len);
        self.growth_count += 1;
        tracing::trace!(
            old_capacity,
            new_capacity,
            fragments = self.len,
            "flat cord array grown"
        );
    }
}

impl<'a> Cord<'a> for FlatCord<'a> {
    fn push(&mut self, fragment: Fragment<'a>) {
        if self.len == self.slots.len() {
            self.grow(self.len + 1);
        }
        self.slots[self.len] = fragment;
        self.len += 1;
        self.total_bytes += fragment.len();
    }

    fn fragment_count(&self) -> usize {
        self.len
    }

    fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    fn fragments(&self) -> impl Iterator<Item = Fragment<'a>> + '_ {
        self.as_slice().iter().copied()
    }
}

impl<'a> Extend<Fragment<'a>> for FlatCord<'a> {
    fn extend<I: IntoIterator<Item = Fragment<'a>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len.saturating_add(lower);
        if needed > self.slots.len() {
            self.grow(needed);
        }
        for fragment in iter {
            self.push(fragment);
        }
    }
}

impl<'a> Extend<&'a [u8]> for FlatCord<'a> {
    fn extend<I: IntoIterator<Item = &'a [u8]>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(Fragment::new));
    }
}

impl fmt::Debug for FlatCord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatCord")
            .field("fragments", &self.len)
            .field("capacity", &self.slots.len())
            .field("total_bytes", &self.total_bytes)
            .finish()
    }
}
