//! Trailing windows over key-sorted aggregates.

use std::collections::BTreeMap;

/// The final `n` elements, in their original order.
///
/// Returns the whole slice when it has `n` or fewer elements.
pub fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// The `n` greatest keys of a map with their values, in ascending key order.
pub fn last_n_sorted<K: Clone, V: Clone>(map: &BTreeMap<K, V>, n: usize) -> Vec<(K, V)> {
    let skip = map.len().saturating_sub(n);
    map.iter()
        .skip(skip)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Sort `(key, value)` pairs lexicographically by key, then keep the last `n`.
pub fn sorted_tail<V>(mut entries: Vec<(String, V)>, n: usize) -> Vec<(String, V)> {
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let skip = entries.len().saturating_sub(n);
    entries.split_off(skip)
}
