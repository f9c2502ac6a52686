//! The violation evaluator: a fixed, ordered list of independent rules.
//!
//! Every rule is evaluated unconditionally per request; multiple violations
//! may legitimately co-occur. Rule order here is the canonical ordering of
//! violations in the output when no reconciliation occurs.

pub mod consent;
pub mod security;
pub mod sensitive;
pub mod transparency;

use dpa_knowledge::KnowledgeBase;
use shared_types::{PiiSummary, Violation};

use crate::patterns::TextSignals;

/// Max offending literals sampled into a violation's `affected_data`.
pub(crate) const AFFECTED_DATA_CAP: usize = 5;

/// Run all rules in their fixed order.
pub fn check_violations(
    kb: &KnowledgeBase,
    pii: &PiiSummary,
    signals: &TextSignals,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    violations.extend(consent::check_unauthorized_processing(kb, pii, signals));
    violations.extend(sensitive::check_spi_protection(kb, pii));
    violations.extend(transparency::check_transparency(kb, pii, signals));
    violations.extend(transparency::check_proportionality(kb, pii));
    violations.extend(security::check_security_measures(kb, signals));
    violations
}

/// Section title from the knowledge base, falling back to the canonical
/// statutory title when the knowledge base is empty or degraded.
pub(crate) fn section_title(kb: &KnowledgeBase, id: &str, fallback: &str) -> String {
    let title = &kb.section(id).title;
    if title.is_empty() {
        fallback.to_string()
    } else {
        title.clone()
    }
}

/// Sample up to [`AFFECTED_DATA_CAP`] item literals.
pub(crate) fn sample_literals(items: &[shared_types::DetectedItem]) -> Vec<String> {
    items
        .iter()
        .take(AFFECTED_DATA_CAP)
        .map(|item| item.text.clone())
        .collect()
}
