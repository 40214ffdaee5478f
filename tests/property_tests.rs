//! Property-based tests using proptest
//!
//! Random streams (duplicates included) are pushed through every strategy and
//! checked against a full sort, against each other, and against the storage
//! invariant of each accumulator.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

use kth_smallest::fused_heap::FusedHeap;
use kth_smallest::harness::shuffled_range;
use kth_smallest::heap_ops::is_max_heap;
use kth_smallest::hole_heap::HoleHeap;
use kth_smallest::sorted_buffer::SortedBuffer;
use kth_smallest::std_heap::StdBoundedHeap;
use kth_smallest::BoundedAccumulator;
use kth_smallest::Strategy as SelectStrategy;

/// A stream plus a valid k for it
fn stream_and_k() -> impl Strategy<Value = (Vec<u32>, usize)> {
    prop::collection::vec(0u32..64, 1..200).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 1..=len)
    })
}

/// After every insertion the accumulator holds exactly the smallest min(seen, k) values
fn check_prefix_invariant<A: BoundedAccumulator<u32>>(
    values: &[u32],
    k: usize,
    sorted_layout: bool,
) -> Result<(), TestCaseError> {
    let mut acc = A::with_capacity(k);
    for (seen, &value) in values.iter().enumerate() {
        acc.insert(value);

        let mut expected = values[..=seen].to_vec();
        expected.sort_unstable();
        expected.truncate(k);

        let slice = acc.as_slice();
        if sorted_layout {
            prop_assert_eq!(slice, expected.as_slice());
        } else {
            prop_assert!(is_max_heap(slice), "heap order broken: {:?}", slice);
            let mut held = slice.to_vec();
            held.sort_unstable();
            prop_assert_eq!(held, expected);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_all_strategies_match_sort((values, k) in stream_and_k()) {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        let expected = sorted[k - 1];

        for strategy in SelectStrategy::ALL {
            prop_assert_eq!(strategy.select(&values, k), Ok(expected), "{}", strategy);
        }
    }

    #[test]
    fn prop_permutation_yields_k_minus_one(n in 1usize..2000, k_frac in 0.0f64..1.0, seed in any::<u64>()) {
        let k = ((n as f64 * k_frac) as usize).clamp(1, n);
        let values = shuffled_range(n, &mut StdRng::seed_from_u64(seed)).unwrap();
        for strategy in SelectStrategy::ALL {
            prop_assert_eq!(strategy.select(&values, k), Ok(k as u32 - 1), "{}", strategy);
        }
    }

    #[test]
    fn prop_sorted_buffer_prefix_invariant((values, k) in stream_and_k()) {
        check_prefix_invariant::<SortedBuffer<u32>>(&values, k, true)?;
    }

    #[test]
    fn prop_std_heap_prefix_invariant((values, k) in stream_and_k()) {
        check_prefix_invariant::<StdBoundedHeap<u32>>(&values, k, false)?;
    }

    #[test]
    fn prop_hole_heap_prefix_invariant((values, k) in stream_and_k()) {
        check_prefix_invariant::<HoleHeap<u32>>(&values, k, false)?;
    }

    #[test]
    fn prop_fused_heap_prefix_invariant((values, k) in stream_and_k()) {
        check_prefix_invariant::<FusedHeap<u32>>(&values, k, false)?;
    }

    #[test]
    fn prop_hole_heap_replace_top_matches_model(
        seed in prop::collection::vec(any::<u32>(), 1..64),
        replacements in prop::collection::vec(any::<u32>(), 0..64),
    ) {
        let mut heap = HoleHeap::from_prefix(seed.len(), &seed);
        let mut model = seed.clone();
        for value in replacements {
            heap.replace_top(value);
            let max_pos = model
                .iter()
                .enumerate()
                .max_by_key(|&(_, v)| *v)
                .map(|(i, _)| i)
                .unwrap();
            model[max_pos] = value;

            prop_assert!(is_max_heap(heap.as_slice()));
            prop_assert_eq!(heap.peek_max(), model.iter().max());
        }
        model.sort_unstable();
        prop_assert_eq!(heap.into_sorted_vec(), model);
    }

    #[test]
    fn prop_fused_heap_rejected_add_is_noop(
        seed in prop::collection::vec(0u32..1000, 1..64),
        offset in 0u32..1000,
    ) {
        let mut heap = FusedHeap::from_prefix(seed.len(), &seed);
        let before = heap.as_slice().to_vec();
        let top = *heap.peek_max().unwrap();
        heap.add(top + offset);
        prop_assert_eq!(heap.as_slice(), before.as_slice());
    }
}
