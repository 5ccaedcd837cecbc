//! Lookup index over loaded title records.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::titles::{TitleId, TitleRecord};

/// An indexed view of the title database keyed by normalized title ID.
///
/// Lookup is tolerant of formatting: `BCES-00011`, `bces00011`, and
/// `BCES_00011` all resolve to the same record.
#[derive(Debug)]
pub struct TitleIndex {
    by_key: HashMap<String, usize>,
    records: Vec<TitleRecord>,
}

impl TitleIndex {
    /// Build an index from loaded records.
    ///
    /// Duplicate title IDs keep the first-seen record; later duplicates are
    /// logged and dropped.
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        let mut by_key = HashMap::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            match by_key.entry(record.title_id.normalized_key()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) => {
                    log::warn!(
                        "Duplicate title ID {} in database, keeping first entry",
                        record.title_id
                    );
                }
            }
        }

        Self { by_key, records }
    }

    /// Look up a raw title ID string in any accepted format.
    pub fn lookup(&self, raw_id: &str) -> Option<&TitleRecord> {
        let id = TitleId::parse(raw_id)?;
        self.get(&id)
    }

    /// Look up an already-parsed title ID.
    pub fn get(&self, id: &TitleId) -> Option<&TitleRecord> {
        self.by_key
            .get(&id.normalized_key())
            .map(|&i| &self.records[i])
    }

    /// Number of distinct title IDs in the index.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> TitleRecord {
        TitleRecord {
            title_id: TitleId::parse(id).unwrap(),
            title_name: name.to_string(),
            sony_name: None,
            version: None,
        }
    }

    #[test]
    fn test_lookup_is_format_insensitive() {
        let index = TitleIndex::from_records(vec![record("BCES-00011", "SingStar")]);

        for query in ["BCES-00011", "bces00011", "BCES_00011", "bces-00011"] {
            let found = index.lookup(query);
            assert_eq!(found.map(|r| r.title_name.as_str()), Some("SingStar"), "query: {query:?}");
        }
    }

    #[test]
    fn test_lookup_unknown_returns_none() {
        let index = TitleIndex::from_records(vec![record("BCES-00011", "SingStar")]);
        assert!(index.lookup("BCUS-99999").is_none());
        assert!(index.lookup("garbage").is_none());
    }

    #[test]
    fn test_duplicates_keep_first() {
        let index = TitleIndex::from_records(vec![
            record("BCES-00011", "First"),
            record("bces00011", "Second"),
        ]);

        assert_eq!(index.len(), 1);
        let found = index.lookup("BCES-00011").unwrap();
        assert_eq!(found.title_name, "First");
    }
}
