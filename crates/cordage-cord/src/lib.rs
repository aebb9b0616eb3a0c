//! Deferred-concatenation cords for Cordage.
//!
//! A cord records borrowed byte fragments in append order and copies them
//! into a destination only when flattened, reserving the full size first
//! so the destination allocates at most once. Two storage layouts share
//! the [`Cord`] trait:
//!
//! - [`LinkedCord`]: one arena node per fragment, O(1) append, two-pass
//!   flatten.
//! - [`FlatCord`]: a doubling arena array of fragments with a running byte
//!   total, single-pass flatten.
//!
//! [`MemoryBuffer`] is the standard destination; anything implementing
//! [`FlattenSink`] works.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod cord;
pub mod flat;
pub mod fragment;
pub mod linked;
pub mod sink;

pub use buffer::MemoryBuffer;
pub use cord::Cord;
pub use flat::FlatCord;
pub use fragment::Fragment;
pub use linked::LinkedCord;
pub use sink::FlattenSink;
