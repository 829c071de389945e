//! Property tests over the whole parse + sort pipeline

use numsort_core::CAPACITY;
use numsort_parser::parse_line;
use numsort_sort::sort_sequence;
use proptest::prelude::*;

fn join(values: &[i32]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

proptest! {
    #[test]
    fn test_output_is_sorted(values in prop::collection::vec(any::<i32>(), 0..=CAPACITY)) {
        let mut sequence = parse_line(&join(&values));
        sort_sequence(&mut sequence);
        prop_assert!(sequence.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_output_is_permutation(values in prop::collection::vec(any::<i32>(), 0..=CAPACITY)) {
        let mut sequence = parse_line(&join(&values));
        sort_sequence(&mut sequence);

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(sequence.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_only_first_capacity_values_kept(values in prop::collection::vec(any::<i32>(), CAPACITY..40)) {
        let mut sequence = parse_line(&join(&values));
        prop_assert_eq!(sequence.len(), CAPACITY);

        sort_sequence(&mut sequence);
        let mut expected = values[..CAPACITY].to_vec();
        expected.sort_unstable();
        prop_assert_eq!(sequence.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_sorting_is_idempotent(values in prop::collection::vec(-5i32..5, 0..=CAPACITY)) {
        let mut sequence = parse_line(&join(&values));
        sort_sequence(&mut sequence);
        let once = sequence;
        sort_sequence(&mut sequence);
        prop_assert_eq!(sequence, once);
    }
}
