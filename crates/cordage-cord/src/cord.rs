//! The append/flatten contract shared by both cord layouts.

use crate::fragment::Fragment;
use crate::sink::FlattenSink;

/// An ordered, append-only list of borrowed fragments.
///
/// [`LinkedCord`](crate::LinkedCord) and [`FlatCord`](crate::FlatCord)
/// implement this trait with identical observable behaviour; they differ
/// only in how fragment records are stored.
pub trait Cord<'a> {
    /// Record `fragment` after every fragment appended so far.
    fn push(&mut self, fragment: Fragment<'a>);

    /// Number of fragments appended.
    fn fragment_count(&self) -> usize;

    /// Sum of all fragment lengths.
    fn total_bytes(&self) -> usize;

    /// The recorded fragments, in append order.
    fn fragments(&self) -> impl Iterator<Item = Fragment<'a>> + '_;

    /// Record a byte slice. No bytes are copied.
    fn append(&mut self, bytes: &'a [u8]) {
        self.push(Fragment::new(bytes));
    }

    /// Record a string slice. No bytes are copied.
    fn append_str(&mut self, s: &'a str) {
        self.push(Fragment::new(s.as_bytes()));
    }

    /// Whether no fragments have been appended.
    fn is_empty(&self) -> bool {
        self.fragment_count() == 0
    }

    /// Write every fragment, in append order, into `sink`.
    ///
    /// The sink is reserved once for [`total_bytes`](Cord::total_bytes)
    /// before the first write, so a fresh sink allocates at most once.
    /// An empty cord performs no writes.
    fn flatten<S: FlattenSink + ?Sized>(&self, sink: &mut S) {
        let total_bytes = self.total_bytes();
        tracing::trace!(
            fragments = self.fragment_count(),
            total_bytes,
            "flattening cord"
        );
        sink.reserve(total_bytes);
        for fragment in self.fragments() {
            sink.write(fragment.as_bytes());
        }
    }

    /// Flatten into a freshly allocated `Vec<u8>`.
    fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.flatten(&mut out);
        out
    }
}
