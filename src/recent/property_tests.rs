//! Property-Based Tests for the Recent Notes List
//!
//! Uses proptest to check the list invariants over arbitrary view/delete
//! sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::{CacheTransport, InMemoryCache};
use crate::notes::NoteId;
use crate::recent::{RecentItemsTracker, RecentList, MAX_RECENT, RECENT_NOTES_KEY};

// == Strategies ==
/// Small id space so sequences revisit the same notes often
fn note_id_strategy() -> impl Strategy<Value = NoteId> {
    1u64..8
}

#[derive(Debug, Clone)]
enum TrackerOp {
    View(NoteId),
    Delete(NoteId),
}

fn tracker_op_strategy() -> impl Strategy<Value = TrackerOp> {
    prop_oneof![
        3 => note_id_strategy().prop_map(TrackerOp::View),
        1 => note_id_strategy().prop_map(TrackerOp::Delete),
    ]
}

fn assert_invariants(ids: &[NoteId]) -> Result<(), TestCaseError> {
    prop_assert!(ids.len() <= MAX_RECENT, "List too long: {:?}", ids);
    let unique: HashSet<&NoteId> = ids.iter().collect();
    prop_assert_eq!(unique.len(), ids.len(), "Duplicate ids: {:?}", ids);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of views leaves a bounded list with no duplicates.
    #[test]
    fn prop_views_keep_list_bounded_and_unique(
        views in prop::collection::vec(note_id_strategy(), 0..40)
    ) {
        let mut list = RecentList::new(MAX_RECENT);
        for id in &views {
            list.touch(*id);
            assert_invariants(&list.ids())?;
        }

        if let Some(last) = views.last() {
            prop_assert_eq!(list.ids()[0], *last);
        }
    }

    // Viewing an id already listed moves it to the front and keeps every
    // other member in its relative order.
    #[test]
    fn prop_touch_existing_moves_to_front(
        seed in prop::collection::vec(note_id_strategy(), 1..10),
        pick in any::<prop::sample::Index>()
    ) {
        let mut list = RecentList::from_ids(seed, MAX_RECENT);
        let before = list.ids();
        let target = before[pick.index(before.len())];

        let evicted = list.touch(target);

        prop_assert!(evicted.is_empty());
        let after = list.ids();
        prop_assert_eq!(after[0], target);
        let others_before: Vec<NoteId> =
            before.iter().copied().filter(|id| *id != target).collect();
        prop_assert_eq!(after[1..].to_vec(), others_before);
    }

    // Removing a listed id shrinks the list by one and preserves order;
    // removing an unlisted id changes nothing.
    #[test]
    fn prop_remove_preserves_order(
        seed in prop::collection::vec(note_id_strategy(), 0..10),
        target in note_id_strategy()
    ) {
        let mut list = RecentList::from_ids(seed, MAX_RECENT);
        let before = list.ids();

        let removed = list.remove(target);

        prop_assert_eq!(removed, before.contains(&target));
        let expected: Vec<NoteId> = before.iter().copied().filter(|id| *id != target).collect();
        prop_assert_eq!(list.ids(), expected);
    }

    // Whatever a stored value holds, decoding either fails or produces a
    // list that satisfies the invariants.
    #[test]
    fn prop_decode_never_violates_invariants(raw in ".{0,64}") {
        if let Ok(list) = RecentList::decode(&raw, MAX_RECENT) {
            assert_invariants(&list.ids())?;
        }
    }

    // The tracker, going through the cache wire format, agrees with the
    // in-memory list model for mixed view/delete sequences. Deletes before
    // the first view leave the key unset.
    #[test]
    fn prop_tracker_matches_model(
        ops in prop::collection::vec(tracker_op_strategy(), 1..30)
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let (actual, expected) = runtime.block_on(async {
            let cache = Arc::new(InMemoryCache::new());
            let tracker = RecentItemsTracker::new(cache.clone());
            let mut model: Option<RecentList> = None;

            for op in &ops {
                match op {
                    TrackerOp::View(id) => {
                        tracker.record_view(*id).await;
                        model
                            .get_or_insert_with(|| RecentList::new(MAX_RECENT))
                            .touch(*id);
                    }
                    TrackerOp::Delete(id) => {
                        tracker.remove_if_present(*id).await;
                        if let Some(list) = model.as_mut() {
                            list.remove(*id);
                        }
                    }
                }
            }

            let raw = cache.get(RECENT_NOTES_KEY).await.unwrap();
            (raw, model.map(|list| list.encode().unwrap()))
        });

        prop_assert_eq!(actual, expected);
    }
}
