//! Remediation recommendations mapped from violation types.
//!
//! One recommendation per distinct triggering violation type (set semantics,
//! so multiple violations of the same type collapse to one record). Output
//! order mirrors the fixed table below, not input order.

use shared_types::{PiiSummary, Priority, Recommendation, Source, Violation};

struct TableEntry {
    violation_type: &'static str,
    priority: Priority,
    action: &'static str,
    description: &'static str,
    section_reference: &'static str,
}

/// Fixed violation-type to recommendation table, in output order.
const RECOMMENDATION_TABLE: &[TableEntry] = &[
    TableEntry {
        violation_type: "unauthorized_processing",
        priority: Priority::High,
        action: "Obtain proper consent",
        description: "Implement consent mechanisms before processing personal information",
        section_reference: "Section 12",
    },
    TableEntry {
        violation_type: "inadequate_spi_protection",
        priority: Priority::Critical,
        action: "Enhance SPI protection",
        description: "Implement additional security measures for sensitive personal information",
        section_reference: "Section 13, Section 20",
    },
    TableEntry {
        violation_type: "lack_of_transparency",
        priority: Priority::Medium,
        action: "Add purpose statements",
        description: "Clearly state the purpose for processing personal information",
        section_reference: "Section 11",
    },
    TableEntry {
        violation_type: "excessive_processing",
        priority: Priority::Medium,
        action: "Review data minimization",
        description: "Ensure only necessary personal information is processed",
        section_reference: "Section 11",
    },
    TableEntry {
        violation_type: "inadequate_security",
        priority: Priority::High,
        action: "Implement security measures",
        description: "Deploy appropriate technical and organizational security measures",
        section_reference: "Section 20",
    },
];

pub fn generate_recommendations(
    violations: &[Violation],
    pii: &PiiSummary,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for entry in RECOMMENDATION_TABLE {
        let triggered = violations
            .iter()
            .any(|v| v.violation_type == entry.violation_type);
        if triggered {
            recommendations.push(Recommendation {
                priority: entry.priority,
                action: entry.action.to_string(),
                description: entry.description.to_string(),
                section_reference: entry.section_reference.to_string(),
                source: Source::RuleBased,
            });
        }
    }

    // Whenever any personal information is present at all, a privacy impact
    // assessment is advised regardless of which rules fired.
    if pii.total_count > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Low,
            action: "Conduct privacy impact assessment".to_string(),
            description: "Perform a comprehensive privacy impact assessment for this document"
                .to_string(),
            section_reference: "General DPA Compliance".to_string(),
            source: Source::RuleBased,
        });
    }

    recommendations
}
