use crate::models::logbook::{LogbookCategory, LogbookEntry};
use std::collections::BTreeSet;

/// Criteria for narrowing the logbook view. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct LogbookFilter {
    pub search: Option<String>,
    pub category: Option<LogbookCategory>,
    pub tags: Vec<String>,
}

impl LogbookFilter {
    pub fn matches(&self, entry: &LogbookEntry) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                entry.title.to_lowercase().contains(&term)
                    || entry.content.to_lowercase().contains(&term)
                    || entry.tags.iter().any(|t| t.to_lowercase().contains(&term))
            }
        };

        let matches_category = self.category.is_none_or(|c| entry.category == c);

        let matches_tags = self.tags.iter().all(|t| entry.tags.contains(t));

        matches_search && matches_category && matches_tags
    }
}

pub fn filter_entries<'a>(entries: &'a [LogbookEntry], filter: &LogbookFilter) -> Vec<&'a LogbookEntry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}

/// Every tag in use, sorted and without duplicates.
pub fn all_tags(entries: &[LogbookEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
