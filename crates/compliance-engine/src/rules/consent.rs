//! Section 12: criteria for lawful processing of personal information.

use dpa_knowledge::KnowledgeBase;
use shared_types::{PiiSummary, Severity, Source, Violation};

use crate::patterns::TextSignals;

use super::{sample_literals, section_title};

/// Personal information present without any consent-language signal.
pub fn check_unauthorized_processing(
    kb: &KnowledgeBase,
    pii: &PiiSummary,
    signals: &TextSignals,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if pii.total_count > 0 && !signals.has_consent_language {
        violations.push(Violation {
            section: "Section 12".to_string(),
            violation_type: "unauthorized_processing".to_string(),
            title: section_title(
                kb,
                "12",
                "Criteria for Lawful Processing of Personal Information",
            ),
            severity: Severity::High,
            description: "Personal information detected without evidence of consent or other \
                          lawful basis as required by Section 12"
                .to_string(),
            details: format!(
                "Found {} PII instances without consent indicators. Section 12 requires: {}",
                pii.total_count,
                kb.section_summary("12")
            ),
            affected_data: sample_literals(&pii.regular_items),
            dpa_reference: kb.excerpt("12"),
            source: Source::RuleBased,
            confidence: None,
        });
    }

    violations
}
