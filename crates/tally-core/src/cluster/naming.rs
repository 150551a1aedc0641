//! Representative label selection
//!
//! A cluster is displayed under one label: the lone member for singleton
//! clusters, otherwise the word its members repeat most. The chosen label
//! may be a sub-word of a multi-word member, so it is not guaranteed to be
//! a category any user typed verbatim.

use std::collections::HashMap;

/// Pick the display label for a cluster's members.
///
/// Singleton clusters keep their member, case-folded. Larger clusters
/// case-fold and count every whitespace-delimited word across all members
/// and take the most frequent one; ties go to the word encountered first
/// in member order. That order comes from the clustering step, so the
/// tie-break is implementation-defined but deterministic.
pub fn representative_label(members: &[String]) -> String {
    if members.len() == 1 {
        return members[0].to_lowercase();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for member in members {
        for word in member.to_lowercase().split_whitespace() {
            if !counts.contains_key(word) {
                order.push(word.to_string());
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for word in &order {
        let count = counts[word.as_str()];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((word.as_str(), count));
        }
    }

    match best {
        Some((word, _)) => word.to_string(),
        // A cluster of empty/whitespace-only members has no words to count
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_singleton_is_case_folded() {
        assert_eq!(
            representative_label(&members(&["Баба балувана"])),
            "баба балувана"
        );
    }

    #[test]
    fn test_most_frequent_word_wins() {
        let label = representative_label(&members(&["кава з собою", "кава", "смачна кава"]));
        assert_eq!(label, "кава");
    }

    #[test]
    fn test_tie_broken_by_first_encounter() {
        // "кафе" and "кава" both appear twice; "кафе" is seen first
        let label = representative_label(&members(&["кафе", "кава", "кава в кафе"]));
        assert_eq!(label, "кафе");
    }

    #[test]
    fn test_counting_is_case_insensitive() {
        let label = representative_label(&members(&["Кава", "КАВА еспресо"]));
        assert_eq!(label, "кава");
    }
}
