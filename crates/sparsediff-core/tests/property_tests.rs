//! Property-based checks of the comparator and the pipeline.

use proptest::prelude::*;
use sparsediff_core::diff::compare_logs;
use sparsediff_core::diff::multiset::surplus;
use sparsediff_core::DiffOptions;
use std::collections::HashMap;

/// A diagnostic-looking line drawn from a small vocabulary so that
/// collisions (duplicates, shifts, continuations) are frequent.
fn diagnostic_line() -> impl Strategy<Value = String> {
    let path = prop::sample::select(vec!["a.c", "b.c", "include/x.h"]);
    let line = 1u32..6;
    let column = 1u32..3;
    let body = prop::sample::select(vec![
        " warning: unused variable",
        " warning: context imbalance",
        " error: expected ';'",
        "    expected int",
        "    got restricted gfp_t",
    ]);
    (path, line, column, body).prop_map(|(p, l, c, b)| format!("{p}:{l}:{c}:{b}"))
}

fn log_text() -> impl Strategy<Value = String> {
    let noise = prop::sample::select(vec!["", "make[2]: Entering directory", "  CC foo.o"]);
    let entry = prop_oneof![
        8 => diagnostic_line(),
        1 => noise.prop_map(str::to_string),
    ];
    prop::collection::vec(entry, 0..24).prop_map(|lines| lines.join("\n"))
}

fn counts(items: &[u8]) -> HashMap<u8, usize> {
    let mut map = HashMap::new();
    for i in items {
        *map.entry(*i).or_insert(0) += 1;
    }
    map
}

proptest! {
    #[test]
    fn prop_comparing_a_log_with_itself_is_empty(log in log_text()) {
        let result = compare_logs(&log, &log, &DiffOptions::default());
        prop_assert!(result.removed.is_empty());
        prop_assert!(result.added.is_empty());
    }

    #[test]
    fn prop_swapping_inputs_swaps_outputs(old in log_text(), new in log_text()) {
        let options = DiffOptions::default();
        let forward = compare_logs(&old, &new, &options);
        let backward = compare_logs(&new, &old, &options);
        prop_assert_eq!(forward.removed, backward.added);
        prop_assert_eq!(forward.added, backward.removed);
    }

    #[test]
    fn prop_surplus_is_an_ordered_subsequence(
        a in prop::collection::vec(0u8..6, 0..20),
        b in prop::collection::vec(0u8..6, 0..20),
    ) {
        let out = surplus(&a, &b);
        let mut rest = a.iter();
        for item in &out {
            prop_assert!(rest.any(|x| x == item));
        }
    }

    #[test]
    fn prop_surplus_membership(
        a in prop::collection::vec(0u8..6, 0..20),
        b in prop::collection::vec(0u8..6, 0..20),
    ) {
        let out = surplus(&a, &b);
        let (in_a, in_b, in_out) = (counts(&a), counts(&b), counts(&out));
        for (item, &count_a) in &in_a {
            let expected = match in_b.get(item) {
                None => count_a,
                Some(&count_b) if count_a > count_b => 1,
                Some(_) => 0,
            };
            prop_assert_eq!(in_out.get(item).copied().unwrap_or(0), expected);
        }
    }
}
