//! Phase 3: Concept clustering. Partition each acronym group into clusters of
//! records that denote the same concept.
//!
//! Each record joins the first cluster whose representative it matches, else it
//! starts a new cluster. A representative never changes once the cluster exists.

use glossary_core::config::ConsolidationConfig;
use glossary_core::models::{AcronymKey, RawTermRecord};

use super::phase2_grouping::AcronymGroup;
use crate::algorithms::name_normalizer::{name_tokens, normalize_name};

/// Minimum shared words for two names to denote the same concept.
const MIN_SHARED_WORDS: usize = 2;
/// Names with at most this many words merge on a single shared word.
const SHORT_NAME_WORDS: usize = 2;

/// Records under one key believed to denote one concept.
#[derive(Debug, Clone)]
pub struct ConceptCluster {
    members: Vec<RawTermRecord>,
}

impl ConceptCluster {
    fn new(representative: RawTermRecord) -> Self {
        Self {
            members: vec![representative],
        }
    }

    /// The first record of the cluster.
    pub fn representative(&self) -> &RawTermRecord {
        &self.members[0]
    }

    pub fn members(&self) -> &[RawTermRecord] {
        &self.members
    }
}

/// Clusters for one acronym key, in creation order.
#[derive(Debug, Clone)]
pub struct ClusteredGroup {
    pub key: AcronymKey,
    pub clusters: Vec<ConceptCluster>,
    /// Trimmed raw acronym when the group held a single record.
    pub singleton_acronym: Option<String>,
}

/// Whether two records under the same key denote the same concept.
pub fn same_concept(
    record: &RawTermRecord,
    representative: &RawTermRecord,
    config: &ConsolidationConfig,
) -> bool {
    let name_a = normalize_name(record.name_str());
    let name_b = normalize_name(representative.name_str());
    if name_a == name_b {
        return true;
    }

    let words_a = name_tokens(&name_a);
    let words_b = name_tokens(&name_b);
    let shared = words_a.intersection(&words_b).count();
    if shared >= MIN_SHARED_WORDS {
        return true;
    }
    if words_a.len() <= SHORT_NAME_WORDS && words_b.len() <= SHORT_NAME_WORDS && shared >= 1 {
        return true;
    }

    // Abbreviated vs expanded name.
    let (smaller, larger) = if words_a.len() < words_b.len() {
        (&words_a, &words_b)
    } else {
        (&words_b, &words_a)
    };
    if smaller.len() >= MIN_SHARED_WORDS && smaller.is_subset(larger) {
        return true;
    }

    if let (Some(cat_a), Some(cat_b)) = (record.category_str(), representative.category_str()) {
        if config.categories_incompatible(cat_a, cat_b) && shared == 0 {
            return false;
        }
    }

    true
}

/// Cluster one acronym group.
pub fn cluster_group(group: AcronymGroup, config: &ConsolidationConfig) -> ClusteredGroup {
    let singleton_acronym = group.singleton_acronym();
    let mut clusters: Vec<ConceptCluster> = Vec::new();

    for record in group.records {
        match clusters
            .iter_mut()
            .find(|c| same_concept(&record, c.representative(), config))
        {
            Some(cluster) => cluster.members.push(record),
            None => clusters.push(ConceptCluster::new(record)),
        }
    }

    ClusteredGroup {
        key: group.key,
        clusters,
        singleton_acronym,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phase2_grouping::group_by_acronym;

    fn rec(name: &str, category: &str) -> RawTermRecord {
        RawTermRecord::new("X", name).with_category(category)
    }

    fn same(a: &RawTermRecord, b: &RawTermRecord) -> bool {
        same_concept(a, b, &ConsolidationConfig::default())
    }

    #[test]
    fn plural_names_are_same_concept() {
        assert!(same(
            &rec("Architecture Decision Records", "Engineering"),
            &rec("Architecture decision record", "Engineering"),
        ));
    }

    #[test]
    fn two_shared_words_merge() {
        assert!(same(
            &rec("Product Information Management System", "Product"),
            &rec("Product Information Hub", "Retail"),
        ));
    }

    #[test]
    fn short_names_merge_on_one_word() {
        assert!(same(&rec("Key Results", "Product"), &rec("Results", "Product")));
    }

    #[test]
    fn incompatible_categories_without_shared_words_split() {
        assert!(!same(
            &rec("Account Executive", "Sales"),
            &rec("Application Engineering", "Engineering"),
        ));
        assert!(!same(
            &rec("Application Engineering", "Engineering"),
            &rec("Account Executive", "Sales"),
        ));
    }

    #[test]
    fn unrelated_names_default_to_same_concept() {
        assert!(same(
            &rec("Account Executive", "Sales"),
            &rec("Application Engineering", "Product"),
        ));
    }

    #[test]
    fn missing_category_never_triggers_override() {
        let a = RawTermRecord::new("AE", "Account Executive");
        let b = rec("Application Engineering", "Engineering");
        assert!(same(&a, &b));
    }

    #[test]
    fn configured_pairs_replace_defaults() {
        let config = ConsolidationConfig {
            incompatible_categories: vec![["Legal".to_string(), "Product".to_string()]],
            ..Default::default()
        };
        let a = rec("Service Level Agreement", "Legal");
        let b = rec("Shipping Lead Amount", "Product");
        assert!(!same_concept(&a, &b, &config));
        let c = rec("Account Executive", "Sales");
        let d = rec("Application Engineering", "Engineering");
        assert!(same_concept(&c, &d, &config));
    }

    #[test]
    fn records_join_first_matching_representative() {
        let groups = group_by_acronym(vec![
            RawTermRecord::new("AE", "Account Executive").with_category("Sales"),
            RawTermRecord::new("AE", "Application Engineering").with_category("Engineering"),
            RawTermRecord::new("AE", "Account Executives").with_category("Sales"),
        ]);
        let clustered = cluster_group(groups[0].clone(), &ConsolidationConfig::default());
        assert_eq!(clustered.clusters.len(), 2);
        assert_eq!(clustered.clusters[0].members().len(), 2);
        assert_eq!(
            clustered.clusters[1].representative().name_str(),
            Some("Application Engineering")
        );
        assert!(clustered.singleton_acronym.is_none());
    }
}
