use heap_kway::{from_iter, from_try_iter, HeapMerger, TryIterWay};
use itertools::Itertools;
use test_strategy::proptest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReadFailed;

type FixtureWay = TryIterWay<Box<dyn Iterator<Item = Result<i16, ReadFailed>>>>;

fn failing_way(items: Vec<i16>) -> FixtureWay {
    from_try_iter(Box::new(items.into_iter().map(Ok).chain(std::iter::once(Err(ReadFailed))))
        as Box<dyn Iterator<Item = Result<i16, ReadFailed>>>)
}

fn clean_way(items: Vec<i16>) -> FixtureWay {
    from_try_iter(
        Box::new(items.into_iter().map(Ok)) as Box<dyn Iterator<Item = Result<i16, ReadFailed>>>
    )
}

#[proptest]
fn merge_is_sorted_permutation_of_inputs(mut ways: Vec<Vec<i16>>) {
    for way in &mut ways {
        way.sort_unstable();
    }
    let mut expected: Vec<i16> = ways.iter().flatten().copied().collect();
    expected.sort_unstable();

    let merged: Vec<i16> = HeapMerger::from_iters_min(ways)
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(merged, expected);
}

#[proptest]
fn exhaustion_is_idempotent(mut ways: Vec<Vec<u8>>) {
    for way in &mut ways {
        way.sort_unstable();
    }
    let mut merger = HeapMerger::from_iters_min(ways);
    while merger.next().unwrap().is_some() {}

    for _ in 0..3 {
        assert_eq!(merger.next().unwrap(), None);
    }
    assert!(merger.is_exhausted());
}

#[proptest]
fn equal_keys_stay_in_way_order(mut ways: Vec<Vec<u8>>) {
    for way in &mut ways {
        way.sort_unstable();
    }
    let tagged = ways
        .into_iter()
        .enumerate()
        .map(|(tag, way)| from_iter(way.into_iter().map(move |v| (v, tag)).collect::<Vec<_>>()));
    let by_value = |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0);
    let merger = HeapMerger::with_comparator(tagged, by_value).unwrap();

    let merged: Vec<(u8, usize)> = merger.into_iter().map(Result::unwrap).collect();
    for ((v1, t1), (v2, t2)) in merged.iter().tuple_windows() {
        assert!(v1 <= v2);
        if v1 == v2 {
            assert!(t1 <= t2);
        }
    }
}

#[proptest]
fn max_merge_is_min_merge_reversed(ways: Vec<Vec<i16>>) {
    let ascending: Vec<Vec<i16>> = ways
        .iter()
        .map(|way| {
            let mut way = way.clone();
            way.sort_unstable();
            way
        })
        .collect();
    let descending: Vec<Vec<i16>> = ascending
        .iter()
        .map(|way| way.iter().rev().copied().collect())
        .collect();

    let mut min_merged: Vec<i16> = HeapMerger::from_iters_min(ascending)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    let max_merged: Vec<i16> = HeapMerger::from_iters_max(descending)
        .into_iter()
        .map(Result::unwrap)
        .collect();

    min_merged.reverse();
    assert_eq!(max_merged, min_merged);
}

#[proptest]
fn read_failure_surfaces_once_and_merge_continues(
    mut failing: Vec<i16>,
    mut clean: Vec<i16>,
) {
    failing.sort_unstable();
    clean.sort_unstable();

    let ways = vec![failing_way(failing.clone()), clean_way(clean.clone())];
    match HeapMerger::new(ways) {
        Err(err) => {
            // an empty failing way errors on its priming read
            assert!(failing.is_empty());
            assert_eq!(err.way, 0);
            assert_eq!(err.source, ReadFailed);
        }
        Ok(mut merger) => {
            let mut values = Vec::new();
            let mut errors = Vec::new();
            loop {
                match merger.next() {
                    Ok(Some(value)) => values.push(value),
                    Ok(None) => break,
                    Err(err) => errors.push(err),
                }
            }

            // the failing way errors exactly once, and every element read
            // before the failure is still delivered in order
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].way, 0);
            let mut expected: Vec<i16> = failing.iter().chain(clean.iter()).copied().collect();
            expected.sort_unstable();
            assert_eq!(values, expected);
        }
    }
}
