//! Benchmark workloads for Cordage.
//!
//! Provides seeded, reproducible fragment sets for the criterion benches:
//!
//! - [`fragment_buckets`]: one bucket of random alphanumeric strings per
//!   maximum length, for sweeping fragment size.
//! - [`bucket_bytes`]: total payload of a bucket, for throughput reporting.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Characters fragments are drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default number of fragments per bucket.
pub const FRAGMENTS_PER_BUCKET: usize = 100;

/// Default seed for reproducible workloads.
pub const DEFAULT_SEED: u64 = 123;

/// Build `max_len + 1` buckets of `per_bucket` random strings.
///
/// Every string has a length uniformly drawn from `1..=max_len`; bucket
/// index is only a label, so buckets are independent samples from the same
/// distribution. Same seed, same output.
pub fn fragment_buckets(max_len: usize, per_bucket: usize, seed: u64) -> Vec<Vec<String>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..=max_len)
        .map(|_| {
            (0..per_bucket)
                .map(|_| random_fragment(&mut rng, max_len))
                .collect()
        })
        .collect()
}

/// Sum of string lengths in a bucket.
pub fn bucket_bytes(bucket: &[String]) -> usize {
    bucket.iter().map(String::len).sum()
}

fn random_fragment(rng: &mut ChaCha8Rng, max_len: usize) -> String {
    let len = rng.random_range(1..=max_len.max(1));
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
