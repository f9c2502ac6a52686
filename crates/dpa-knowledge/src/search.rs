//! Ranked keyword search over the loaded sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::Section;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub section: String,
    pub title: String,
    pub relevance: usize,
}

/// Rank sections for a keyword: term frequency in content, title matches
/// weighted 2x, ties broken by ascending section id.
pub(crate) fn search_sections(
    sections: &BTreeMap<String, Section>,
    keyword: &str,
    limit: usize,
) -> Vec<SearchHit> {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = sections
        .iter()
        .filter_map(|(id, section)| {
            let content_hits = section.content.to_lowercase().matches(&keyword).count();
            let title_hits = section.title.to_lowercase().matches(&keyword).count();
            let relevance = content_hits + 2 * title_hits;
            (relevance > 0).then(|| SearchHit {
                section: id.clone(),
                title: section.title.clone(),
                relevance,
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        b.relevance
            .cmp(&a.relevance)
            .then_with(|| section_sort_key(&a.section).cmp(&section_sort_key(&b.section)))
    });
    hits.truncate(limit);
    hits
}

/// Section ids are usually numeric strings; sort them numerically so "9"
/// precedes "12", with non-numeric ids after all numeric ones.
fn section_sort_key(id: &str) -> (u64, &str) {
    match id.parse::<u64>() {
        Ok(n) => (n, ""),
        Err(_) => (u64::MAX, id),
    }
}
