//! Terms per category, largest first.

use std::collections::HashMap;

use glossary_core::models::{CanonicalTerm, CategoryCount};

/// Count terms per category, sorted by count descending then category name.
pub fn category_breakdown(terms: &[CanonicalTerm]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for term in terms {
        *counts.entry(term.category.as_str()).or_insert(0) += 1;
    }
    let mut breakdown: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_by_count_then_name() {
        let terms = vec![
            CanonicalTerm::new("A", "a", "Sales"),
            CanonicalTerm::new("B", "b", "Engineering"),
            CanonicalTerm::new("C", "c", "Product"),
            CanonicalTerm::new("D", "d", "Engineering"),
        ];
        let breakdown = category_breakdown(&terms);
        let flat: Vec<(&str, usize)> = breakdown
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect();
        assert_eq!(flat, vec![("Engineering", 2), ("Product", 1), ("Sales", 1)]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(category_breakdown(&[]).is_empty());
    }
}
