//! Growable contiguous byte buffer used as the flatten destination.
//!
//! [`MemoryBuffer`] keeps its bytes in one allocation. Capacity grows by
//! doubling (starting from [`MemoryBuffer::INITIAL_CAPACITY`]), and each
//! growth is a single reallocation that carries the written bytes over.
//! [`MemoryBuffer::clear`] forgets the content but keeps the allocation,
//! so one buffer can be reused across many flattens.

use std::io;

use crate::sink::FlattenSink;

/// A write-only byte accumulator.
///
/// Bytes `[0, size())` are exactly the bytes written since the last
/// [`clear`](MemoryBuffer::clear), in write order.
#[derive(Clone, Default)]
pub struct MemoryBuffer {
    data: Vec<u8>,
    growth_count: usize,
}

impl MemoryBuffer {
    /// Capacity of the first allocation made by a growing write.
    pub const INITIAL_CAPACITY: usize = 64;

    /// An empty buffer. Allocates nothing.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            growth_count: 0,
        }
    }

    /// An empty buffer with room for at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        buf.reserve(capacity);
        buf
    }

    /// Ensure capacity is at least `n` bytes.
    ///
    /// `n` is a total, not a count of extra bytes: content already written
    /// counts toward it. [`FlattenSink::reserve`] on this type takes the
    /// extra-bytes form instead and forwards `size() + additional` here.
    ///
    /// Does nothing if the buffer is already large enough; otherwise
    /// doubles the capacity until it covers `n` and reallocates once.
    pub fn reserve(&mut self, n: usize) {
        if n > self.data.capacity() {
            self.grow(n);
        }
    }

    /// Append `bytes` after the current content.
    pub fn write(&mut self, bytes: &[u8]) {
        let needed = match self.data.len().checked_add(bytes.len()) {
            Some(needed) => needed,
            None => panic!("memory buffer capacity overflow"),
        };
        self.reserve(needed);
        self.data.extend_from_slice(bytes);
    }

    /// The bytes written so far.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes written so far.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written since the last clear.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Number of reallocations performed over the buffer's lifetime.
    pub fn growth_count(&self) -> usize {
        self.growth_count
    }

    /// Forget the content, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Take the content as a `Vec<u8>`.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    fn grow(&mut self, min_capacity: usize) {
        let old_capacity = self.data.capacity();
        let mut new_capacity = if old_capacity == 0 {
            Self::INITIAL_CAPACITY
        } else {
            old_capacity
        };
        while new_capacity < min_capacity {
            new_capacity = new_capacity.checked_mul(2).unwrap_or(min_capacity);
        }
        self.data.reserve_exact(new_capacity - self.data.len());
        self.growth_count += 1;
        tracing::trace!(old_capacity, new_capacity, "memory buffer grown");
    }
}

impl FlattenSink for MemoryBuffer {
    fn reserve(&mut self, additional: usize) {
        let total = match self.size().checked_add(additional) {
            Some(total) => total,
            None => panic!("memory buffer capacity overflow"),
        };
        MemoryBuffer::reserve(self, total);
    }

    fn write(&mut self, bytes: &[u8]) {
        MemoryBuffer::write(self, bytes);
    }
}

impl io::Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        MemoryBuffer::write(self, buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        MemoryBuffer::write(self, buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl AsRef<[u8]> for MemoryBuffer {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl From<MemoryBuffer> for Vec<u8> {
    fn from(buf: MemoryBuffer) -> Self {
        buf.into_vec()
    }
}

impl std::fmt::Debug for MemoryBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBuffer")
            .field("size", &self.size())
            .field("capacity", &self.capacity())
            .field("growth_count", &self.growth_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty_and_unallocated() {
        let buf = MemoryBuffer::new();
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.data().is_empty());
    }

    #[test]
    fn first_write_allocates_initial_capacity() {
        let mut buf = MemoryBuffer::new();
        buf.write(b"hi");
        assert!(buf.capacity() >= MemoryBuffer::INITIAL_CAPACITY);
        assert_eq!(buf.growth_count(), 1);
        assert_eq!(buf.data(), b"hi");
    }

    #[test]
    fn reserve_is_idempotent() {
        let mut buf = MemoryBuffer::new();
        buf.reserve(100);
        let cap = buf.capacity();
        buf.reserve(100);
        buf.reserve(10);
        assert_eq!(buf.capacity(), cap);
        assert_eq!(buf.growth_count(), 1);
    }

    #[test]
    fn reserve_doubles_from_initial() {
        let mut buf = MemoryBuffer::new();
        buf.reserve(100);
        // 64 -> 128 covers 100.
        assert!(buf.capacity() >= 128);
    }

    #[test]
    fn writes_preserve_order_across_growth() {
        let mut buf = MemoryBuffer::new();
        let mut expected = Vec::new();
        for i in 0..1000u32 {
            let chunk = i.to_le_bytes();
            buf.write(&chunk);
            expected.extend_from_slice(&chunk);
        }
        assert_eq!(buf.size(), 4000);
        assert_eq!(buf.data(), expected.as_slice());
        // 64 -> 4096 is six doublings plus the first allocation.
        assert!(buf.growth_count() <= 7);
    }

    #[test]
    fn reserve_then_write_needs_no_growth() {
        let mut buf = MemoryBuffer::new();
        buf.reserve(10_000);
        let grown = buf.growth_count();
        for _ in 0..10_000 {
            buf.write(b"x");
        }
        assert_eq!(buf.growth_count(), grown);
        assert_eq!(buf.size(), 10_000);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = MemoryBuffer::new();
        buf.write(&[7; 300]);
        let cap = buf.capacity();
        buf.clear();
        assert_eq!(buf.size(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);
        buf.write(b"again");
        assert_eq!(buf.data(), b"again");
    }

    #[test]
    fn zero_length_write_is_noop() {
        let mut buf = MemoryBuffer::new();
        buf.write(b"");
        assert_eq!(buf.size(), 0);
    }

    #[test]
    fn sink_reserve_accounts_for_existing_content() {
        let mut buf = MemoryBuffer::new();
        buf.write(&[1; 60]);
        FlattenSink::reserve(&mut buf, 100);
        assert!(buf.capacity() >= 160);
    }

    #[test]
    fn inherent_reserve_is_total_sink_reserve_is_additional() {
        let mut buf = MemoryBuffer::new();
        buf.write(&[1; 60]);
        assert_eq!(buf.capacity(), 64);

        buf.reserve(100);
        assert_eq!(buf.capacity(), 128);

        FlattenSink::reserve(&mut buf, 100);
        assert_eq!(buf.capacity(), 256);
        assert_eq!(buf.growth_count(), 3);
    }

    #[test]
    fn io_write_appends() {
        use std::io::Write as _;
        let mut buf = MemoryBuffer::new();
        write!(buf, "{}-{}", 12, "ab").unwrap();
        assert_eq!(buf.data(), b"12-ab");
    }

    #[test]
    fn into_vec_returns_content() {
        let mut buf = MemoryBuffer::with_capacity(8);
        buf.write(b"abc");
        let v: Vec<u8> = buf.into();
        assert_eq!(v, b"abc");
    }
}
