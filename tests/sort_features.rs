//! Tests for the stable sort and hash composition

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sugars_prims::bits::hash_code_with;
use sugars_prims::sort::{self, timsort};
use sugars_prims::PrimSliceExt;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn keyed(len: usize, keys: u32, seed: u64) -> Vec<(u32, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|i| (rng.gen_range(0..keys), i)).collect()
}

fn assert_stably_sorted(v: &[(u32, usize)]) {
    for pair in v.windows(2) {
        assert!(
            pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1),
            "out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_large_random_input_is_stable() {
    init_logging();
    for (len, keys) in [(10_000, 7), (5_000, 1_000), (3_333, 2)] {
        let mut v = keyed(len, keys, len as u64);
        sort::stable_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_stably_sorted(&v);
    }
}

#[test]
fn test_structured_inputs() {
    init_logging();
    let ascending: Vec<i32> = (0..5_000).collect();
    let descending: Vec<i32> = (0..5_000).rev().collect();
    let sawtooth: Vec<i32> = (0..5_000).map(|i| i % 97).collect();
    let organ_pipe: Vec<i32> = (0..2_500).chain((0..2_500).rev()).collect();
    let runs: Vec<i32> = (0..40).flat_map(|r| (0..(r * 13 + 1)).map(move |i| i * 40 + r)).collect();

    for input in [ascending, descending, sawtooth, organ_pipe, runs] {
        let mut ours = input.clone();
        sort::stable_sort(&mut ours);
        let mut expected = input;
        expected.sort();
        assert_eq!(ours, expected);
    }
}

#[test]
fn test_descending_runs_with_duplicates_stay_stable() {
    // equal keys inside a descending stretch must not be reversed
    let mut v: Vec<(u32, usize)> = (0..200).map(|i| (9 - (i / 20) as u32, i)).collect();
    sort::stable_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_stably_sorted(&v);
}

#[test]
fn test_min_run_length_bounds() {
    assert_eq!(timsort::min_run_length(31), 31);
    for n in [64usize, 65, 1_000, 65_536, 1_000_003] {
        let run = timsort::min_run_length(n);
        assert!((timsort::MIN_MERGE / 2..=timsort::MIN_MERGE).contains(&run), "n={n} run={run}");
    }
}

proptest! {
    #[test]
    fn prop_agrees_with_std_stable_sort(v in proptest::collection::vec((0u8..6, any::<u16>()), 0..700)) {
        let mut ours = v.clone();
        sort::stable_sort_by(&mut ours, |a, b| a.0.cmp(&b.0));
        let mut expected = v;
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn prop_sort_primitives_is_total(v in proptest::collection::vec(any::<f64>(), 0..400)) {
        let mut sorted = v.clone();
        sort::sort_primitives(&mut sorted);
        prop_assert!(sorted.is_sorted_total());
        prop_assert_eq!(sorted.len(), v.len());
    }

    #[test]
    fn prop_hash_composes(
        seed in any::<i32>(),
        a in proptest::collection::vec(any::<i64>(), 0..40),
        b in proptest::collection::vec(any::<i64>(), 0..40),
    ) {
        let joined: Vec<i64> = a.iter().chain(&b).copied().collect();
        prop_assert_eq!(hash_code_with(hash_code_with(seed, &a), &b), hash_code_with(seed, &joined));
    }
}
