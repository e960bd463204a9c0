/// The filtering algorithm
///
/// Walks the unfiltered record list in order, resolving stubs through
/// the store as it goes, and keeps every record that passes the active
/// star threshold. Special folders always pass, and so does any record
/// that could not be resolved: without a rating to judge it by, an
/// asset must stay visible rather than vanish. The input list is the
/// source of truth and is never mutated; turning the filter off must
/// therefore restore the full list in its original order.

use super::data::AssetRecord;
use super::store::AssetStore;

/// Produce the ordered filtered list for the given threshold.
///
/// Resolution failures are recovered locally: the stub stays in the
/// output so an asset never disappears because its sidecar was
/// unreadable. A threshold of 0 means no filter.
pub fn apply_star_filter(
    records: &[AssetRecord],
    threshold: u8,
    store: &mut dyn AssetStore,
) -> Vec<AssetRecord> {
    let mut filtered = Vec::with_capacity(records.len());

    for record in records {
        let record = match record {
            AssetRecord::Stub { id } => match store.resolve(id) {
                Ok(Some(full)) => AssetRecord::Full(full),
                // unknown to the store: keep what we have
                Ok(None) => record.clone(),
                Err(err) => {
                    eprintln!("⚠️  Could not resolve asset '{}': {}", id, err);
                    record.clone()
                }
            },
            other => other.clone(),
        };

        let keep = match &record {
            AssetRecord::SpecialFolder { .. } => true,
            // still a stub: resolution failed or the id is unknown, so
            // there is no rating to judge; the asset stays visible
            AssetRecord::Stub { .. } => true,
            _ => threshold == 0 || record.effective_stars() >= threshold,
        };

        if keep {
            filtered.push(record);
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testutil::{full, special, MemoryStore};
    use std::collections::HashSet;

    fn ids(records: &[AssetRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_zero_threshold_keeps_everything_in_order() {
        let records = vec![special("textures"), full("a", 2), full("b", 0)];
        let mut store = MemoryStore::new(records.clone());
        let filtered = apply_star_filter(&records, 0, &mut store);
        assert_eq!(ids(&filtered), vec!["textures", "a", "b"]);
    }

    #[test]
    fn test_threshold_drops_low_rated_assets() {
        let records = vec![full("a", 2), full("b", 5), special("tex")];
        let mut store = MemoryStore::new(records.clone());
        let filtered = apply_star_filter(&records, 3, &mut store);
        assert_eq!(ids(&filtered), vec!["b", "tex"]);
    }

    #[test]
    fn test_special_folders_ignore_the_threshold() {
        let records = vec![special("maps")];
        let mut store = MemoryStore::new(records.clone());
        let filtered = apply_star_filter(&records, 6, &mut store);
        assert_eq!(ids(&filtered), vec!["maps"]);
    }

    #[test]
    fn test_stub_is_resolved_for_the_decision() {
        let stub = AssetRecord::Stub { id: "a".to_string() };
        let mut store = MemoryStore::new(vec![full("a", 4)]);
        let filtered = apply_star_filter(&[stub], 3, &mut store);
        assert_eq!(ids(&filtered), vec!["a"]);
        assert!(!filtered[0].is_stub());
    }

    #[test]
    fn test_failed_resolution_keeps_the_stub_at_any_threshold() {
        let stub = AssetRecord::Stub { id: "a".to_string() };
        let mut store = MemoryStore::new(vec![full("a", 4)]);
        store.failing.insert("a".to_string());

        for threshold in 0..=6 {
            let filtered = apply_star_filter(&[stub.clone()], threshold, &mut store);
            assert_eq!(ids(&filtered), vec!["a"], "threshold {}", threshold);
            assert!(filtered[0].is_stub());
        }
    }

    #[test]
    fn test_unknown_stub_is_retained() {
        let stub = AssetRecord::Stub { id: "orphan".to_string() };
        let mut store = MemoryStore::new(vec![]);
        let filtered = apply_star_filter(&[stub.clone()], 0, &mut store);
        assert_eq!(ids(&filtered), vec!["orphan"]);

        // an unresolvable record has no rating to judge, so it also
        // survives a nonzero threshold
        let filtered = apply_star_filter(&[stub], 4, &mut store);
        assert_eq!(ids(&filtered), vec!["orphan"]);
    }

    #[test]
    fn test_filter_monotonicity() {
        let records = vec![
            full("a", 1),
            full("b", 2),
            full("c", 3),
            full("d", 4),
            special("tex"),
        ];
        let mut store = MemoryStore::new(records.clone());
        let at_two: HashSet<String> = apply_star_filter(&records, 2, &mut store)
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        let at_four: HashSet<String> = apply_star_filter(&records, 4, &mut store)
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert!(at_four.is_subset(&at_two));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let mut store = MemoryStore::new(vec![]);
        assert!(apply_star_filter(&[], 3, &mut store).is_empty());
    }

    #[test]
    fn test_source_list_is_not_mutated() {
        let records = vec![full("a", 1), full("b", 5)];
        let mut store = MemoryStore::new(records.clone());
        let _ = apply_star_filter(&records, 4, &mut store);
        // turning the filter back off restores the full list
        let restored = apply_star_filter(&records, 0, &mut store);
        assert_eq!(ids(&restored), vec!["a", "b"]);
    }
}
