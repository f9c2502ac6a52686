//! Section 13: sensitive personal information and privileged information.

use dpa_knowledge::KnowledgeBase;
use shared_types::{PiiSummary, Severity, Source, Violation};

use super::{sample_literals, section_title};

/// Any sensitive item at all triggers this rule: processing sensitive
/// personal information demands protections the text gives no evidence of.
pub fn check_spi_protection(kb: &KnowledgeBase, pii: &PiiSummary) -> Vec<Violation> {
    let mut violations = Vec::new();

    if pii.sensitive_count > 0 {
        violations.push(Violation {
            section: "Section 13".to_string(),
            violation_type: "inadequate_spi_protection".to_string(),
            title: section_title(
                kb,
                "13",
                "Sensitive Personal Information and Privileged Information",
            ),
            severity: Severity::Critical,
            description: "Sensitive personal information detected without adequate protection \
                          measures as required by Section 13"
                .to_string(),
            details: format!(
                "Found {} sensitive PII instances. Section 13 states: {}",
                pii.sensitive_count,
                kb.section_summary("13")
            ),
            affected_data: sample_literals(&pii.sensitive_items),
            dpa_reference: kb.excerpt("13"),
            source: Source::RuleBased,
            confidence: None,
        });
    }

    violations
}
