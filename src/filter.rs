//! Search filter — pure projection of the cache against a query string.

use crate::types::VehicleRecord;

/// Records whose `name` contains `query` case-insensitively, original order
/// preserved. An empty query matches everything. No state, no errors — callers
/// recompute whenever the cache or the query changes.
pub fn visible<'a>(records: &'a [VehicleRecord], query: &str) -> Vec<&'a VehicleRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VehicleId;

    fn record(id: VehicleId, name: &str) -> VehicleRecord {
        VehicleRecord {
            id,
            name: name.to_string(),
            brand: "VW".to_string(),
            model: "1300".to_string(),
        }
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let records = vec![record(1, "Fusca"), record(2, "Gol")];
        let lower = visible(&records, "fus");
        let upper = visible(&records, "FUS");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].name, "Fusca");
        assert_eq!(lower, upper);
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let records = vec![record(2, "Gol"), record(1, "Fusca")];
        let all = visible(&records, "");
        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Gol", "Fusca"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let records = vec![record(1, "Fusca")];
        assert!(visible(&records, "kombi").is_empty());
    }

    #[test]
    fn matches_only_on_name_not_brand_or_model() {
        let records = vec![record(1, "Fusca")];
        assert!(visible(&records, "vw").is_empty());
        assert!(visible(&records, "1300").is_empty());
    }

    #[test]
    fn order_is_preserved_across_matches() {
        let records = vec![record(3, "Gol G3"), record(1, "Golf"), record(2, "Fusca")];
        let hits = visible(&records, "gol");
        let ids: Vec<VehicleId> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
