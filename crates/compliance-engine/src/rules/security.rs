//! Section 20: security of personal information.

use dpa_knowledge::KnowledgeBase;
use shared_types::{Severity, Source, Violation};

use crate::patterns::TextSignals;

use super::section_title;

/// Text admits an insecure handling practice. Only the first matching
/// insecurity keyword is reported, however many are present.
pub fn check_security_measures(kb: &KnowledgeBase, signals: &TextSignals) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(indicator) = signals.insecurity_indicator {
        violations.push(Violation {
            section: "Section 20".to_string(),
            violation_type: "inadequate_security".to_string(),
            title: section_title(kb, "20", "Security of Personal Information"),
            severity: Severity::High,
            description: "Inadequate security measures for personal information as required by \
                          Section 20"
                .to_string(),
            details: format!(
                "Security concern detected: {}. Section 20 requires: {}",
                indicator,
                kb.section_summary("20")
            ),
            affected_data: Vec::new(),
            dpa_reference: kb.excerpt("20"),
            source: Source::RuleBased,
            confidence: None,
        });
    }

    violations
}
