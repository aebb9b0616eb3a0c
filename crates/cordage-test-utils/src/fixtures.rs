//! Canonical fragment sets.

/// Six fragments of mixed length, including repeated characters.
pub const SCENARIO_A: [&str; 6] = [
    "some",
    "looooooooooooooong",
    "231",
    "string",
    "bleble",
    "aaaaaaaaaaaaaaaaaaaaaaaaaa",
];

/// Reference concatenation: what any correct flatten must produce.
pub fn concat<S: AsRef<[u8]>>(fragments: &[S]) -> Vec<u8> {
    let mut out = Vec::with_capacity(fragments.iter().map(|f| f.as_ref().len()).sum());
    for fragment in fragments {
        out.extend_from_slice(fragment.as_ref());
    }
    out
}

/// `count` distinct, order-revealing fragments: `"[0]"`, `"[1]"`, ...
pub fn numbered_fragments(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("[{i}]")).collect()
}
