//! Property-based tests for pool expression expansion.

use parampool::CandidatePool;
use proptest::prelude::*;

proptest! {
    /// Property: a range token expands to one value per number
    ///
    /// `prefix[start..end]suffix` yields |start - end| + 1 values, with the
    /// first and last matching the bounds in the order they were written.
    #[test]
    fn prop_range_expansion_counts(
        prefix in "[a-z][a-z0-9_-]{0,7}",
        start in 0u64..200,
        end in 0u64..200,
        suffix in "[a-z0-9_-]{0,4}",
    ) {
        let spec = format!("{prefix}[{start}..{end}]{suffix}");
        let pool = CandidatePool::parse(&spec);
        let values = pool.to_vec();

        let expected = usize::try_from(start.abs_diff(end) + 1).unwrap();
        prop_assert_eq!(values.len(), expected);
        prop_assert_eq!(&values[0], &format!("{prefix}{start}{suffix}"));
        prop_assert_eq!(&values[values.len() - 1], &format!("{prefix}{end}{suffix}"));
    }

    /// Property: rendering and re-parsing a pool reproduces it exactly.
    #[test]
    fn prop_expansion_is_stable(
        tokens in prop::collection::vec("[a-zA-Z][a-zA-Z0-9_-]{0,10}", 1..8)
    ) {
        let spec = tokens.join(", ");
        let once = CandidatePool::parse(&spec);
        let again = CandidatePool::parse(&once.to_string());
        prop_assert_eq!(once, again);
    }

    /// Property: no expansion ever contains duplicate values.
    #[test]
    fn prop_no_duplicate_values(
        tokens in prop::collection::vec(prop_oneof![
            "[a-z]{1,6}".boxed(),
            ("[a-z]{1,4}", 0u64..30, 0u64..30)
                .prop_map(|(p, a, b)| format!("{p}[{a}..{b}]"))
                .boxed(),
        ], 1..6)
    ) {
        let spec = tokens.join(",");
        let values = CandidatePool::parse(&spec).to_vec();

        let unique: std::collections::HashSet<&String> = values.iter().collect();
        prop_assert_eq!(unique.len(), values.len());
    }

    /// Property: literal tokens keep their first-occurrence order.
    #[test]
    fn prop_first_occurrence_order(
        tokens in prop::collection::vec("[a-z]{1,6}", 1..10)
    ) {
        let spec = tokens.join(", ");
        let pool = CandidatePool::parse(&spec);

        let mut expected = Vec::new();
        for token in &tokens {
            if !expected.contains(token) {
                expected.push(token.clone());
            }
        }
        prop_assert_eq!(pool.to_vec(), expected);
    }

    /// Property: a descending range is exactly the ascending one reversed.
    #[test]
    fn prop_reverse_range_mirrors_forward(
        prefix in "[a-z]{1,5}",
        a in 0u64..100,
        b in 0u64..100,
    ) {
        let forward = CandidatePool::parse(&format!("{prefix}[{a}..{b}]"));
        let backward = CandidatePool::parse(&format!("{prefix}[{b}..{a}]"));

        let mut reversed = backward.to_vec();
        reversed.reverse();
        prop_assert_eq!(forward.to_vec(), reversed);
    }
}
