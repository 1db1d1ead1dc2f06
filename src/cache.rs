//! CollectionCache — in-memory mirror of the remote vehicle catalog.
//!
//! Pure bookkeeping: no gateway calls, no validation. Every mutation comes
//! from a confirmed coordinator result, so invariant violations here mean a
//! caller bug or a misbehaving server; they degrade to logged no-ops because
//! the remote store, not this cache, is authoritative.

use std::collections::HashSet;

use crate::types::{RecordFields, VehicleId, VehicleRecord};

/// Ordered sequence of vehicle records, unique by id.
///
/// Insertion order is preserved; `replace` mutates in place (position
/// unchanged) and `remove` drops exactly one element.
#[derive(Debug, Clone, Default)]
pub struct CollectionCache {
    records: Vec<VehicleRecord>,
}

impl CollectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire sequence with a fresh server listing.
    ///
    /// If the listing carries duplicate ids the first occurrence wins.
    pub fn load(&mut self, records: Vec<VehicleRecord>) {
        let mut seen: HashSet<VehicleId> = HashSet::with_capacity(records.len());
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id) {
                unique.push(record);
            } else {
                tracing::warn!(id = record.id, "duplicate id in server listing; dropped");
            }
        }
        self.records = unique;
    }

    /// Append a server-confirmed new record.
    ///
    /// Inserting an id that is already present is a caller error; the
    /// existing record is kept and the new one dropped.
    pub fn insert(&mut self, record: VehicleRecord) {
        if self.contains(record.id) {
            tracing::warn!(id = record.id, "insert of duplicate id; kept existing record");
            return;
        }
        self.records.push(record);
    }

    /// Merge the three fields into the record with this id, keeping its
    /// position. Returns `false` (logged no-op) if the id is absent.
    pub fn replace(&mut self, id: VehicleId, fields: &RecordFields) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.name = fields.name.clone();
                record.brand = fields.brand.clone();
                record.model = fields.model.clone();
                true
            }
            None => {
                tracing::warn!(id, "replace target not in cache; no-op");
                false
            }
        }
    }

    /// Remove the record with this id if present. Removing an absent id is a
    /// silent no-op; returns whether anything was removed.
    pub fn remove(&mut self, id: VehicleId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.get(id).is_some()
    }

    /// Snapshot of the full sequence, in insertion order.
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: VehicleId, name: &str) -> VehicleRecord {
        VehicleRecord {
            id,
            name: name.to_string(),
            brand: "VW".to_string(),
            model: "1300".to_string(),
        }
    }

    fn unique_ids(cache: &CollectionCache) -> bool {
        let mut seen = HashSet::new();
        cache.iter().all(|r| seen.insert(r.id))
    }

    #[test]
    fn insert_preserves_insertion_order() {
        let mut cache = CollectionCache::new();
        cache.insert(record(1, "Fusca"));
        cache.insert(record(2, "Gol"));
        cache.insert(record(3, "Kombi"));
        let names: Vec<&str> = cache.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Fusca", "Gol", "Kombi"]);
    }

    #[test]
    fn insert_duplicate_id_keeps_existing() {
        let mut cache = CollectionCache::new();
        cache.insert(record(1, "Fusca"));
        cache.insert(record(1, "Gol"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1).unwrap().name, "Fusca");
        assert!(unique_ids(&cache));
    }

    #[test]
    fn load_replaces_everything() {
        let mut cache = CollectionCache::new();
        cache.insert(record(1, "Fusca"));
        cache.load(vec![record(2, "Gol"), record(3, "Kombi")]);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(1));
    }

    #[test]
    fn load_drops_duplicate_ids_first_wins() {
        let mut cache = CollectionCache::new();
        cache.load(vec![record(1, "Fusca"), record(1, "Gol"), record(2, "Kombi")]);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(1).unwrap().name, "Fusca");
        assert!(unique_ids(&cache));
    }

    #[test]
    fn replace_mutates_in_place() {
        let mut cache = CollectionCache::new();
        cache.insert(record(1, "Fusca"));
        cache.insert(record(2, "Gol"));
        let changed = cache.replace(1, &RecordFields::new("Fusca", "Volkswagen", "1500"));
        assert!(changed);
        // Position unchanged
        assert_eq!(cache.records()[0].id, 1);
        assert_eq!(cache.records()[0].brand, "Volkswagen");
        assert_eq!(cache.records()[0].model, "1500");
    }

    #[test]
    fn replace_absent_id_is_noop() {
        let mut cache = CollectionCache::new();
        cache.insert(record(1, "Fusca"));
        let before = cache.records().to_vec();
        assert!(!cache.replace(99, &RecordFields::new("x", "y", "z")));
        assert_eq!(cache.records(), before.as_slice());
    }

    #[test]
    fn remove_drops_exactly_one() {
        let mut cache = CollectionCache::new();
        cache.insert(record(1, "Fusca"));
        cache.insert(record(2, "Gol"));
        assert!(cache.remove(1));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.records()[0].id, 2);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut cache = CollectionCache::new();
        cache.insert(record(1, "Fusca"));
        assert!(!cache.remove(99));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn mixed_mutation_sequence_never_duplicates_ids() {
        let mut cache = CollectionCache::new();
        cache.load(vec![record(1, "Fusca"), record(2, "Gol")]);
        cache.insert(record(3, "Kombi"));
        cache.insert(record(2, "Brasilia"));
        cache.replace(3, &RecordFields::new("Kombi", "VW", "T2"));
        cache.remove(1);
        cache.insert(record(1, "Fusca"));
        cache.remove(42);
        assert!(unique_ids(&cache));
        assert_eq!(cache.len(), 3);
    }
}
