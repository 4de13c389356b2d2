//! Group-by-key accumulation.
//!
//! Results are `BTreeMap`s, so iteration is lexicographic by key. For
//! `YYYY-MM` and `YYYY-Www` keys that is chronological order.

use std::collections::BTreeMap;

use serde::Serialize;

/// Fold `items` into one accumulator per key.
///
/// Items for which `key_fn` returns `None` are skipped.
pub fn group_by<I, K, A>(
    items: I,
    mut key_fn: impl FnMut(&I::Item) -> Option<K>,
    mut init: impl FnMut() -> A,
    mut fold: impl FnMut(&mut A, I::Item),
) -> BTreeMap<K, A>
where
    I: IntoIterator,
    K: Ord,
{
    let mut groups = BTreeMap::new();
    for item in items {
        let Some(key) = key_fn(&item) else {
            continue;
        };
        fold(groups.entry(key).or_insert_with(&mut init), item);
    }
    groups
}

/// Number of items per key.
pub fn count_by<I, K>(items: I, key_fn: impl FnMut(&I::Item) -> Option<K>) -> BTreeMap<K, usize>
where
    I: IntoIterator,
    K: Ord,
{
    group_by(items, key_fn, || 0, |count, _| *count += 1)
}

/// Sum of `value_fn` per key.
pub fn sum_by<I, K>(
    items: I,
    key_fn: impl FnMut(&I::Item) -> Option<K>,
    mut value_fn: impl FnMut(&I::Item) -> f64,
) -> BTreeMap<K, f64>
where
    I: IntoIterator,
    K: Ord,
{
    group_by(items, key_fn, || 0.0, |sum, item| *sum += value_fn(&item))
}

/// Count and sum of one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Items folded in
    pub count: usize,
    /// Sum of their values
    pub sum: f64,
}

impl Totals {
    /// Record one value.
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
    }

    /// Mean value; 0 for an empty group.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Count and sum per key.
pub fn totals_by<I, K>(
    items: I,
    key_fn: impl FnMut(&I::Item) -> Option<K>,
    mut value_fn: impl FnMut(&I::Item) -> f64,
) -> BTreeMap<K, Totals>
where
    I: IntoIterator,
    K: Ord,
{
    group_by(items, key_fn, Totals::default, |totals, item| {
        totals.add(value_fn(&item))
    })
}

/// Lay `groups` out along `keys`, filling gaps with `empty`.
///
/// Keys present in `groups` but not in `keys` are dropped.
pub fn align<A: Clone>(groups: &BTreeMap<String, A>, keys: &[String], empty: A) -> Vec<(String, A)> {
    keys.iter()
        .map(|key| {
            let value = groups.get(key).cloned().unwrap_or_else(|| empty.clone());
            (key.clone(), value)
        })
        .collect()
}
