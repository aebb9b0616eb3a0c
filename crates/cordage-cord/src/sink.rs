//! Destinations a cord can be flattened into.

/// A byte sink that can be told the final size up front.
///
/// Flattening calls [`reserve`](FlattenSink::reserve) exactly once with the
/// cord's total byte count, then [`write`](FlattenSink::write) once per
/// fragment in append order.
pub trait FlattenSink {
    /// Make room for `additional` more bytes beyond what is already written.
    fn reserve(&mut self, additional: usize);

    /// Append `bytes` after everything written so far.
    fn write(&mut self, bytes: &[u8]);
}

impl FlattenSink for Vec<u8> {
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn write(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: FlattenSink + ?Sized> FlattenSink for &mut S {
    fn reserve(&mut self, additional: usize) {
        (**self).reserve(additional);
    }

    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes);
    }
}
