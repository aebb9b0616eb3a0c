//! Non-owning byte views recorded by cords.

use std::fmt;

/// A borrowed run of caller-owned bytes.
///
/// Cords store fragments, never the bytes themselves. The lifetime `'a`
/// keeps the source alive and immutable until the cord is gone, so a
/// fragment can never dangle.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fragment<'a> {
    bytes: &'a [u8],
}

impl<'a> Fragment<'a> {
    /// The zero-length fragment.
    pub const EMPTY: Fragment<'static> = Fragment { bytes: &[] };

    /// View `bytes` as a fragment.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The referenced bytes.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the fragment is zero-length.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Address of the first referenced byte.
    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }
}

impl<'a> From<&'a [u8]> for Fragment<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Fragment<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a String> for Fragment<'a> {
    fn from(s: &'a String) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a Vec<u8>> for Fragment<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Self::new(v)
    }
}

impl AsRef<[u8]> for Fragment<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({:?})", String::from_utf8_lossy(self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_borrows_without_copying() {
        let source = String::from("borrowed");
        let frag = Fragment::from(&source);
        assert_eq!(frag.as_ptr(), source.as_ptr());
        assert_eq!(frag.len(), 8);
    }

    #[test]
    fn empty_fragment() {
        assert!(Fragment::EMPTY.is_empty());
        assert_eq!(Fragment::default(), Fragment::EMPTY);
        assert_eq!(Fragment::from("").len(), 0);
    }

    #[test]
    fn debug_is_readable() {
        assert_eq!(format!("{:?}", Fragment::from("ab")), "Fragment(\"ab\")");
    }
}
