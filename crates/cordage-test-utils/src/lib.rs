//! Test utilities for Cordage development.
//!
//! Provides a [`RecordingSink`] that logs every call a flatten makes,
//! canonical fragment sets, a reference [`concat`], and [`init_tracing`]
//! for seeing arena and cord events while a test runs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Once;

use cordage_cord::FlattenSink;

pub use fixtures::{concat, numbered_fragments, SCENARIO_A};

/// One call observed by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkCall {
    Reserve(usize),
    Write(Vec<u8>),
}

/// A [`FlattenSink`] that records every call and the bytes written.
///
/// Use it to assert on the shape of a flatten (one reserve, N writes, no
/// writes for an empty cord) rather than only on the output bytes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    output: Vec<u8>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, in the order it was made.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Concatenation of all written bytes.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn reserve_calls(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Reserve(n) => Some(*n),
                SinkCall::Write(_) => None,
            })
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Write(_)))
            .count()
    }
}

impl FlattenSink for RecordingSink {
    fn reserve(&mut self, additional: usize) {
        self.calls.push(SinkCall::Reserve(additional));
    }

    fn write(&mut self, bytes: &[u8]) {
        self.calls.push(SinkCall::Write(bytes.to_vec()));
        self.output.extend_from_slice(bytes);
    }
}

/// Install a fmt subscriber that honours `RUST_LOG` and writes through the
/// test harness. Safe to call from every test; only the first call acts.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
