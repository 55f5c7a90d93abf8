use proptest::prelude::*;
use std::collections::BTreeSet;
use strdb::matching::count_occurrences;
use strdb::model::{Marker, Profile, ProfileIndex, TreeNode};

fn distinct_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Za-z]{1,4}, [A-Za-z]{1,4}", 0..64)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn index_of(keys: &[String]) -> ProfileIndex {
    keys.iter().map(|key| (key.as_str(), Profile::default())).collect()
}

proptest! {
    #[test]
    fn in_order_is_sorted(keys in distinct_keys()) {
        let index = index_of(&keys);
        let in_order: Vec<&str> = index.iter().map(TreeNode::key).collect();
        let sorted: BTreeSet<&str> = keys.iter().map(String::as_str).collect();

        prop_assert_eq!(index.len(), keys.len());
        prop_assert!(in_order.iter().copied().eq(sorted.iter().copied()));
    }

    #[test]
    fn delete_removes_exactly_one(keys in distinct_keys(), every in 1usize..4) {
        let mut index = index_of(&keys);
        let (deleted, kept): (Vec<_>, Vec<_>) =
            keys.iter().enumerate().partition(|(i, _)| i % every == 0);

        for (_, key) in &deleted {
            prop_assert!(index.delete(key));
            prop_assert!(!index.contains(key));
        }
        prop_assert_eq!(index.len(), kept.len());
        for (_, key) in &kept {
            prop_assert!(index.contains(key));
        }

        let in_order: Vec<&str> = index.iter().map(TreeNode::key).collect();
        prop_assert!(in_order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn collect_agrees_with_count(
        keys in distinct_keys(),
        flags in prop::collection::vec(any::<bool>(), 64),
    ) {
        let mut index = index_of(&keys);
        for (key, flag) in keys.iter().zip(&flags) {
            if let Some(profile) = index.get_mut(key) {
                profile.set_of_interest(*flag);
            }
        }

        for of_interest in [true, false] {
            let collected = index.collect_by_flag(of_interest);
            prop_assert_eq!(collected.len(), index.count_matching(of_interest));
        }
        prop_assert_eq!(index.count_matching(true) + index.count_matching(false), index.len());
    }

    #[test]
    fn prune_keeps_exactly_the_flagged(
        keys in distinct_keys(),
        flags in prop::collection::vec(any::<bool>(), 64),
    ) {
        let mut index = index_of(&keys);
        let mut flagged = BTreeSet::new();
        for (key, flag) in keys.iter().zip(&flags) {
            if *flag {
                index.get_mut(key).unwrap().set_of_interest(true);
                flagged.insert(key.as_str());
            }
        }

        prop_assert_eq!(index.prune_unmarked(), keys.len() - flagged.len());
        let remaining: Vec<&str> = index.iter().map(TreeNode::key).collect();
        prop_assert!(remaining.iter().copied().eq(flagged.iter().copied()));
        prop_assert_eq!(index.prune_unmarked(), 0);
    }

    #[test]
    fn repeated_needle_is_counted(needle in "[ACGT]{1,4}", times in 0usize..16) {
        let haystack = needle.repeat(times);
        prop_assert_eq!(count_occurrences(&haystack, &needle), times);
    }

    #[test]
    fn profile_with_all_markers_present_is_flagged(counts in prop::collection::vec(0usize..4, 0..8)) {
        let markers: Vec<Marker> = counts
            .iter()
            .enumerate()
            .map(|(i, count)| Marker::new(format!("<{i}>"), *count))
            .collect();
        let sequence: String = markers
            .iter()
            .map(|marker| marker.name().repeat(marker.occurrences()))
            .collect();

        let mut index = ProfileIndex::with_sequences(sequence, "");
        index.insert("Doe, Jane", Profile::new(markers));
        index.classify();
        prop_assert!(index.get("Doe, Jane").unwrap().is_of_interest());
    }
}
