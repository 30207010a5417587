//! Inner equi-join of two keyed record sequences on a shared key.

use std::collections::HashMap;

/// Joins `left` and `right` on their key, keeping full per-key multiplicity:
/// every left value for a key pairs with every right value for the same key.
/// Keys present on only one side are dropped. Output order is unspecified;
/// downstream aggregation re-sorts by its own derived key.
pub fn inner_join<A, B>(left: Vec<(String, A)>, right: Vec<(String, B)>) -> Vec<(String, A, B)>
where
    A: Clone,
    B: Clone,
{
    let mut right_by_key: HashMap<String, Vec<B>> = HashMap::new();
    for (key, value) in right {
        right_by_key.entry(key).or_default().push(value);
    }

    let mut joined = Vec::new();
    for (key, left_value) in left {
        if let Some(right_values) = right_by_key.get(&key) {
            for right_value in right_values {
                joined.push((key.clone(), left_value.clone(), right_value.clone()));
            }
        }
    }
    joined
}
