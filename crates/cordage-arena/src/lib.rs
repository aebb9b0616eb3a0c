//! Bump-pointer block arena for Cordage.
//!
//! Provides a region allocator that hands out aligned storage from
//! fixed-size blocks and frees everything at once when it is dropped.
//! This crate is the only one in the workspace that contains `unsafe`
//! code, confined to `raw.rs` and a handful of annotated allocation
//! helpers.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── ArenaConfig (block size, validated at construction)
//! └── Block[] (oldest first, last one is current)
//!     └── RawBlock (global-allocator region, freed on drop)
//!
//! ArenaAllocator<'a, T> ── &'a Arena (typed front end, identity equality)
//! ```
//!
//! # Growth policy
//!
//! A request that does not fit the current block opens a new one; the
//! tail of the old block is abandoned. Requests larger than a block get a
//! dedicated block sized to fit, which leaves the current block current.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod allocator;
pub mod arena;
mod block;
pub mod config;
pub mod error;
mod raw;

// Public re-exports for the primary API surface.
pub use allocator::ArenaAllocator;
pub use arena::{Arena, ArenaStats};
pub use config::ArenaConfig;
pub use error::ArenaError;
