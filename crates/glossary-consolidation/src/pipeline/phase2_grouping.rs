//! Phase 2: Grouping. Bucket records by acronym key, first-seen key order,
//! aggregation order inside each bucket.

use std::collections::HashMap;

use glossary_core::models::{AcronymKey, RawTermRecord};

/// Records sharing one acronym key.
#[derive(Debug, Clone)]
pub struct AcronymGroup {
    pub key: AcronymKey,
    pub records: Vec<RawTermRecord>,
}

impl AcronymGroup {
    /// Trimmed raw acronym of a lone record. `None` for multi-record groups.
    pub fn singleton_acronym(&self) -> Option<String> {
        match self.records.as_slice() {
            [only] => Some(only.acronym.trim().to_string()),
            _ => None,
        }
    }
}

/// Group records by `AcronymKey`. Pure; consumes the records.
pub fn group_by_acronym(records: Vec<RawTermRecord>) -> Vec<AcronymGroup> {
    let mut index: HashMap<AcronymKey, usize> = HashMap::new();
    let mut groups: Vec<AcronymGroup> = Vec::new();

    for record in records {
        let key = AcronymKey::from_acronym(&record.acronym);
        match index.get(&key) {
            Some(&slot) => groups[slot].records.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(AcronymGroup {
                    key,
                    records: vec![record],
                });
            }
        }
    }

    groups
}
