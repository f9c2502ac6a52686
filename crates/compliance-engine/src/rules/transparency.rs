//! Section 11: general data privacy principles — transparency and
//! proportionality.

use dpa_knowledge::KnowledgeBase;
use shared_types::{PiiSummary, Severity, Source, Violation};

use crate::patterns::TextSignals;

use super::section_title;

/// Item count above which processing is considered potentially excessive.
pub(crate) const EXCESSIVE_PROCESSING_THRESHOLD: usize = 10;

const SECTION_11_TITLE: &str = "General Data Privacy Principles";

/// Personal information present without any purpose statement.
pub fn check_transparency(
    kb: &KnowledgeBase,
    pii: &PiiSummary,
    signals: &TextSignals,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if pii.total_count > 0 && !signals.has_purpose_language {
        violations.push(Violation {
            section: "Section 11".to_string(),
            violation_type: "lack_of_transparency".to_string(),
            title: section_title(kb, "11", SECTION_11_TITLE),
            severity: Severity::Medium,
            description: "Personal information processing without clear purpose statement \
                          violates transparency principle"
                .to_string(),
            details: format!(
                "No purpose statement found for data processing. Section 11 requires: {}",
                kb.section_summary("11")
            ),
            affected_data: Vec::new(),
            dpa_reference: kb.excerpt("11"),
            source: Source::RuleBased,
            confidence: None,
        });
    }

    violations
}

/// More items than the proportionality threshold allows.
pub fn check_proportionality(kb: &KnowledgeBase, pii: &PiiSummary) -> Vec<Violation> {
    let mut violations = Vec::new();

    if pii.total_count > EXCESSIVE_PROCESSING_THRESHOLD {
        violations.push(Violation {
            section: "Section 11".to_string(),
            violation_type: "excessive_processing".to_string(),
            title: section_title(kb, "11", SECTION_11_TITLE),
            severity: Severity::Medium,
            description: "Potentially excessive personal information processing violates \
                          proportionality principle"
                .to_string(),
            details: format!(
                "Large amount of PII detected ({} instances) may violate proportionality \
                 requirements",
                pii.total_count
            ),
            affected_data: Vec::new(),
            dpa_reference: kb.excerpt("11"),
            source: Source::RuleBased,
            confidence: None,
        });
    }

    violations
}
