use std::collections::HashSet;

use crate::types::suggestion::Suggestion;

/// Drops suggestions whose label was already seen, keeping the first one.
pub fn dedupe(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen_labels = HashSet::<String>::new();

    suggestions
        .into_iter()
        .filter(|s| seen_labels.insert(s.label.clone()))
        .collect()
}
