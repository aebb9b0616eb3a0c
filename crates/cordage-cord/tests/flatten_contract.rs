//! Integration test: both cord layouts honour the same flatten contract.
//!
//! Every scenario runs against `LinkedCord` and `FlatCord` and checks the
//! output bytes, the sink call sequence, and growth behaviour.

use cordage_arena::Arena;
use cordage_cord::{Cord, FlatCord, Fragment, LinkedCord, MemoryBuffer};
use cordage_test_utils::{concat, init_tracing, numbered_fragments, RecordingSink, SCENARIO_A};
use proptest::prelude::*;

fn flatten_with<'a, C: Cord<'a>>(mut cord: C, fragments: &[&'a [u8]]) -> (Vec<u8>, RecordingSink) {
    for &f in fragments {
        cord.append(f);
    }
    let mut buf = MemoryBuffer::new();
    cord.flatten(&mut buf);
    let mut sink = RecordingSink::new();
    cord.flatten(&mut sink);
    (buf.into_vec(), sink)
}

// ── Scenario A: mixed fragments ─────────────────────────────────

#[test]
fn scenario_a_flat_cord() {
    init_tracing();
    let arena = Arena::new();
    let mut cord = FlatCord::new(&arena);
    for s in SCENARIO_A {
        cord.append_str(s);
    }
    let mut buf = MemoryBuffer::new();
    cord.flatten(&mut buf);

    let expected = SCENARIO_A.concat();
    assert_eq!(buf.data(), expected.as_bytes());
    assert_eq!(buf.size(), SCENARIO_A.iter().map(|s| s.len()).sum::<usize>());
}

#[test]
fn scenario_a_linked_cord() {
    init_tracing();
    let arena = Arena::new();
    let mut cord = LinkedCord::new(&arena);
    for s in SCENARIO_A {
        cord.append_str(s);
    }
    let mut buf = MemoryBuffer::new();
    cord.flatten(&mut buf);
    assert_eq!(buf.data(), SCENARIO_A.concat().as_bytes());
}

#[test]
fn scenario_a_sink_sees_one_reserve_then_ordered_writes() {
    let arena = Arena::new();
    let fragments: Vec<&[u8]> = SCENARIO_A.iter().map(|s| s.as_bytes()).collect();
    for (_, sink) in [
        flatten_with(LinkedCord::new(&arena), &fragments),
        flatten_with(FlatCord::new(&arena), &fragments),
    ] {
        assert_eq!(sink.reserve_calls(), vec![concat(&SCENARIO_A).len()]);
        assert_eq!(sink.write_count(), SCENARIO_A.len());
        assert_eq!(sink.output(), concat(&SCENARIO_A).as_slice());
    }
}

// ── Scenario B: empty cord ──────────────────────────────────────

#[test]
fn scenario_b_empty_cords_write_nothing() {
    let arena = Arena::new();
    for (bytes, sink) in [
        flatten_with(LinkedCord::new(&arena), &[]),
        flatten_with(FlatCord::new(&arena), &[]),
    ] {
        assert!(bytes.is_empty());
        assert_eq!(sink.write_count(), 0);
    }
    assert_eq!(arena.block_count(), 0);
}

// ── Scenario C: 10,000 one-byte fragments ───────────────────────

#[test]
fn scenario_c_growth_is_doubling_bounded() {
    init_tracing();
    let source = vec![b'x'; 10_000];
    let arena = Arena::new();
    let mut cord = FlatCord::new(&arena);
    for byte in source.chunks(1) {
        cord.append(byte);
    }
    assert_eq!(cord.total_bytes(), 10_000);
    // 8, 16, ..., 16384: twelve arrays in total.
    assert_eq!(cord.growth_count(), 12);

    let mut buf = MemoryBuffer::new();
    cord.flatten(&mut buf);
    assert_eq!(buf.size(), 10_000);
    assert_eq!(buf.growth_count(), 1);
    assert_eq!(buf.data(), source.as_slice());
}

#[test]
fn scenario_c_linked_cord_matches() {
    let source = vec![b'y'; 10_000];
    let arena = Arena::new();
    let mut cord = LinkedCord::new(&arena);
    cord.extend(source.chunks(1));
    assert_eq!(cord.total_bytes(), 10_000);

    let mut buf = MemoryBuffer::new();
    cord.flatten(&mut buf);
    assert_eq!(buf.growth_count(), 1);
    assert_eq!(buf.data(), source.as_slice());
}

// ── Order and reuse ─────────────────────────────────────────────

#[test]
fn reordering_appends_reorders_output() {
    let frags = numbered_fragments(50);
    let arena = Arena::new();

    let mut forward = FlatCord::new(&arena);
    let mut backward = LinkedCord::new(&arena);
    for f in &frags {
        forward.append_str(f);
    }
    for f in frags.iter().rev() {
        backward.append_str(f);
    }

    let reversed: Vec<&str> = frags.iter().rev().map(String::as_str).collect();
    assert_eq!(forward.to_vec(), concat(&frags));
    assert_eq!(backward.to_vec(), concat(&reversed));
    assert_ne!(forward.to_vec(), backward.to_vec());
}

#[test]
fn cleared_buffer_is_reused_without_growth() {
    let arena = Arena::new();
    let mut cord = FlatCord::new(&arena);
    for s in SCENARIO_A {
        cord.append_str(s);
    }
    let mut buf = MemoryBuffer::new();
    cord.flatten(&mut buf);
    let grown = buf.growth_count();
    for _ in 0..10 {
        buf.clear();
        cord.flatten(&mut buf);
    }
    assert_eq!(buf.growth_count(), grown);
    assert_eq!(buf.data(), SCENARIO_A.concat().as_bytes());
}

#[test]
fn flatten_appends_after_existing_content() {
    let arena = Arena::new();
    let mut cord = LinkedCord::new(&arena);
    cord.append(b"tail");
    let mut buf = MemoryBuffer::new();
    buf.write(b"head-");
    cord.flatten(&mut buf);
    assert_eq!(buf.data(), b"head-tail");
}

#[test]
fn flatten_into_dyn_sink() {
    let arena = Arena::new();
    let mut cord = FlatCord::new(&arena);
    cord.push(Fragment::from("dyn"));
    let mut buf = MemoryBuffer::new();
    let sink: &mut dyn cordage_cord::FlattenSink = &mut buf;
    cord.flatten(sink);
    assert_eq!(buf.data(), b"dyn");
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn both_layouts_equal_reference_concat(
        fragments in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..40), 0..200),
    ) {
        let arena = Arena::with_block_size(512).unwrap();
        let views: Vec<&[u8]> = fragments.iter().map(|f| f.as_slice()).collect();
        let expected = concat(&views);

        let (linked, linked_sink) = flatten_with(LinkedCord::new(&arena), &views);
        let (flat, flat_sink) = flatten_with(FlatCord::new(&arena), &views);

        prop_assert_eq!(&linked, &expected);
        prop_assert_eq!(&flat, &expected);
        prop_assert_eq!(linked_sink.calls(), flat_sink.calls());
    }

    #[test]
    fn flatten_is_repeatable(
        fragments in proptest::collection::vec("[a-z]{0,12}", 0..100),
    ) {
        let arena = Arena::new();
        let mut cord = FlatCord::new(&arena);
        for f in &fragments {
            cord.append_str(f);
        }
        let mut first = MemoryBuffer::new();
        let mut second = MemoryBuffer::new();
        cord.flatten(&mut first);
        cord.flatten(&mut second);
        prop_assert_eq!(first.data(), second.data());
        prop_assert_eq!(first.size(), cord.total_bytes());
    }

    #[test]
    fn flat_total_matches_sum_of_lengths(
        lengths in proptest::collection::vec(0usize..64, 0..600),
    ) {
        let source = vec![7u8; 64];
        let arena = Arena::new();
        let mut cord = FlatCord::new(&arena);
        for &len in &lengths {
            cord.append(&source[..len]);
        }
        prop_assert_eq!(cord.total_bytes(), lengths.iter().sum::<usize>());
        prop_assert_eq!(cord.fragment_count(), lengths.len());
        prop_assert!(cord.fragment_count() <= cord.capacity());
    }
}
