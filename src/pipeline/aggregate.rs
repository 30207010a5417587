//! Grouping and reduction: folds (key, value) pairs into a per-key
//! accumulator, iterated in ascending lexicographic key order.

use std::collections::BTreeMap;

/// Per-key (sum, count) accumulator from which an average is derived as
/// sum / count. A key only exists once it received a value, so the count is
/// never zero.
pub type WeightedSum = (f64, u64);

/// Folds each key's values left-to-right into one accumulated value.
/// `combine` must be associative and commutative so partial reductions merge
/// identically under any partitioning of the input.
pub fn aggregate<V, I, F>(pairs: I, combine: F) -> BTreeMap<String, V>
where
    V: Copy,
    I: IntoIterator<Item = (String, V)>,
    F: Fn(V, V) -> V,
{
    let mut reduced: BTreeMap<String, V> = BTreeMap::new();
    for (key, value) in pairs {
        reduced
            .entry(key)
            .and_modify(|acc| *acc = combine(*acc, value))
            .or_insert(value);
    }
    reduced
}

/// Count mode: every occurrence contributes 1.
pub fn count_by_key<I>(keys: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = String>,
{
    aggregate(keys.into_iter().map(|k| (k, 1u64)), |a, b| a + b)
}

/// Pair-sum mode: component-wise addition of (sum, count) pairs.
pub fn sum_by_key<I>(pairs: I) -> BTreeMap<String, WeightedSum>
where
    I: IntoIterator<Item = (String, f64)>,
{
    aggregate(
        pairs.into_iter().map(|(k, v)| (k, (v, 1u64))),
        |a: WeightedSum, b: WeightedSum| (a.0 + b.0, a.1 + b.1),
    )
}
