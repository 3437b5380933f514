//! Asymmetric multiset difference used by every matching stage.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Items of `a` that `b` does not account for, in `a`'s order.
///
/// - An item absent from `b` is kept at every occurrence.
/// - An item present in both but more often in `a` is kept once, at its
///   first occurrence in `a`.
///
/// This is not strict multiset subtraction: surplus occurrences are reported
/// as present, not counted.
pub fn surplus<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let in_a = multiplicities(a);
    let in_b = multiplicities(b);
    let mut reported: HashSet<&T> = HashSet::new();
    let mut out = Vec::new();

    for item in a {
        match in_b.get(item) {
            None => out.push(item.clone()),
            Some(&count_b) => {
                let count_a = in_a.get(item).copied().unwrap_or(0);
                if count_a > count_b && reported.insert(item) {
                    out.push(item.clone());
                }
            }
        }
    }

    out
}

/// [`surplus`] in both directions: `(surplus(a, b), surplus(b, a))`.
pub fn surplus_both<T>(a: &[T], b: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Eq + Hash + Clone,
{
    (surplus(a, b), surplus(b, a))
}

fn multiplicities<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_missing_from_b_keep_every_occurrence() {
        assert_eq!(surplus(&["x", "y", "x"], &["z"]), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_excess_items_reported_once() {
        assert_eq!(surplus(&["d", "d", "d"], &["d"]), vec!["d"]);
        assert!(surplus(&["d"], &["d", "d", "d"]).is_empty());
    }

    #[test]
    fn test_equal_multiplicity_cancels() {
        assert!(surplus(&["a", "b", "a"], &["a", "a", "b"]).is_empty());
    }

    #[test]
    fn test_order_follows_first_occurrence() {
        let a = ["k", "m", "k", "n", "m", "k"];
        let b = ["k", "m"];
        // k: 3 vs 1 -> first k; m: 2 vs 1 -> first m; n absent -> kept
        assert_eq!(surplus(&a, &b), vec!["k", "m", "n"]);
    }

    #[test]
    fn test_both_directions_are_independent() {
        let (left, right) = surplus_both(&["a", "a", "b"], &["a", "c", "c"]);
        assert_eq!(left, vec!["a", "b"]);
        assert_eq!(right, vec!["c", "c"]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(surplus(&empty, &["a"]).is_empty());
        assert_eq!(surplus(&["a"], &empty), vec!["a"]);
    }
}
