//! Cord stored as a singly linked list of arena-allocated nodes.
//!
//! Each append costs one small arena allocation and never moves earlier
//! nodes. No running total is kept, so flattening walks the list twice:
//! once to size the destination, once to copy.

use std::cell::Cell;
use std::fmt;

use cordage_arena::{Arena, ArenaAllocator};

use crate::cord::Cord;
use crate::fragment::Fragment;

struct Node<'a> {
    fragment: Fragment<'a>,
    next: Cell<Option<&'a Node<'a>>>,
}

/// A cord whose fragment records are linked arena nodes.
///
/// The nodes live in the arena, not in the cord; the arena must outlive
/// the cord, which the `'a` lifetime enforces.
///
/// # Example
///
/// ```rust
/// use cordage_arena::Arena;
/// use cordage_cord::{Cord, LinkedCord, MemoryBuffer};
///
/// let arena = Arena::new();
/// let mut cord = LinkedCord::new(&arena);
/// cord.append_str("hello, ");
/// cord.append_str("world");
///
/// let mut buf = MemoryBuffer::new();
/// cord.flatten(&mut buf);
/// assert_eq!(buf.data(), b"hello, world");
/// ```
pub struct LinkedCord<'a> {
    alloc: ArenaAllocator<'a, Node<'a>>,
    head: Option<&'a Node<'a>>,
    tail: Option<&'a Node<'a>>,
    len: usize,
}

impl<'a> LinkedCord<'a> {
    /// An empty cord whose nodes will be allocated from `arena`.
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            alloc: ArenaAllocator::new(arena),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// The arena backing this cord's nodes.
    pub fn arena(&self) -> &'a Arena {
        self.alloc.arena()
    }

    fn nodes(&self) -> impl Iterator<Item = &'a Node<'a>> {
        std::iter::successors(self.head, |node| node.next.get())
    }
}

impl<'a> Cord<'a> for LinkedCord<'a> {
    fn push(&mut self, fragment: Fragment<'a>) {
        let node: &'a Node<'a> = self.alloc.alloc(Node {
            fragment,
            next: Cell::new(None),
        });
        match self.tail {
            Some(tail) => tail.next.set(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    fn fragment_count(&self) -> usize {
        self.len
    }

    fn total_bytes(&self) -> usize {
        self.nodes().map(|node| node.fragment.len()).sum()
    }

    fn fragments(&self) -> impl Iterator<Item = Fragment<'a>> + '_ {
        self.nodes().map(|node| node.fragment)
    }
}

impl<'a> Extend<Fragment<'a>> for LinkedCord<'a> {
    fn extend<I: IntoIterator<Item = Fragment<'a>>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}

impl<'a> Extend<&'a [u8]> for LinkedCord<'a> {
    fn extend<I: IntoIterator<Item = &'a [u8]>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(Fragment::new));
    }
}

impl fmt::Debug for LinkedCord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedCord")
            .field("fragments", &self.len)
            .field("total_bytes", &self.total_bytes())
            .finish()
    }
}
