//! Cordage: build one contiguous byte output from many borrowed fragments.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Cordage sub-crates. For most users, adding `cordage` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cordage::prelude::*;
//!
//! let parts = ["assemble ", "without ", "copying ", "twice"];
//!
//! let arena = Arena::new();
//! let mut cord = FlatCord::new(&arena);
//! for part in &parts {
//!     cord.append_str(part);
//! }
//!
//! let mut buf = MemoryBuffer::new();
//! cord.flatten(&mut buf);
//! assert_eq!(buf.data(), parts.concat().as_bytes());
//! assert_eq!(buf.growth_count(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `cordage-arena` | `Arena`, `ArenaAllocator`, `ArenaConfig`, `ArenaError` |
//! | [`cord`] | `cordage-cord` | `LinkedCord`, `FlatCord`, `Fragment`, `MemoryBuffer`, `FlattenSink` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Block arena and typed allocation front end (`cordage-arena`).
pub use cordage_arena as arena;

/// Cords, fragments, and flatten destinations (`cordage-cord`).
pub use cordage_cord as cord;

/// Common imports for building and flattening cords.
///
/// ```rust
/// use cordage::prelude::*;
/// ```
pub mod prelude {
    pub use cordage_arena::{Arena, ArenaAllocator, ArenaConfig, ArenaError};
    pub use cordage_cord::{Cord, FlatCord, FlattenSink, Fragment, LinkedCord, MemoryBuffer};
}
