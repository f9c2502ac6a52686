//! Partitioning of detected items into regular and sensitive categories.

use shared_types::{DetectedItem, PiiSummary};

/// Entity types that are sensitive under Section 3(l) of the Act regardless
/// of the extractor's own flag: legally protected categories plus
/// government-issued identifiers.
pub const SENSITIVE_ENTITY_TYPES: &[&str] = &[
    "HEALTH_INFO",
    "RELIGIOUS_INFO",
    "FINANCIAL_INFO",
    "PH_TIN",
    "PH_SSS",
    "PH_PHILHEALTH",
];

/// An item is sensitive if the extractor says so or its entity type belongs
/// to the fixed sensitive-category set.
pub fn is_sensitive_item(item: &DetectedItem) -> bool {
    item.is_sensitive || SENSITIVE_ENTITY_TYPES.contains(&item.entity_type.as_str())
}

/// Partition detected items and derive the per-request counts.
pub fn categorize_items(items: &[DetectedItem]) -> PiiSummary {
    let mut summary = PiiSummary {
        total_count: items.len(),
        ..PiiSummary::default()
    };

    for item in items {
        if is_sensitive_item(item) {
            summary.sensitive_items.push(item.clone());
        } else {
            summary.regular_items.push(item.clone());
        }
    }

    summary.sensitive_count = summary.sensitive_items.len();
    summary.regular_count = summary.regular_items.len();
    summary
}
